use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Embedded watch-page config, pulled from `clip_page_config = {...};`.
#[derive(Deserialize, Debug)]
pub(crate) struct ClipPageConfig {
    pub player: PlayerRef,
    pub clip: ClipRef,
}

#[derive(Deserialize, Debug)]
pub(crate) struct PlayerRef {
    pub config_url: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ClipRef {
    pub title: String,
}

/// Player config payload. The watch page's `config_url` endpoint and the
/// embed player's inline `var t={...};` blob share this shape.
#[derive(Deserialize, Debug)]
pub(crate) struct PlayerConfig {
    pub request: ConfigRequest,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ConfigRequest {
    pub files: ConfigFiles,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ConfigFiles {
    #[serde(default)]
    pub progressive: Vec<ProgressiveFile>,
    pub hls: Option<HlsFiles>,
}

/// One flat-file rendition.
#[derive(Deserialize, Debug, Clone)]
pub struct ProgressiveFile {
    pub quality: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize, Debug)]
pub(crate) struct HlsFiles {
    #[serde(default)]
    pub cdns: FxHashMap<String, HlsCdn>,
}

/// One master-playlist mirror. The cdns are content-equivalent alternates;
/// only one needs to respond.
#[derive(Deserialize, Debug)]
pub(crate) struct HlsCdn {
    pub url: String,
}

/// Channel listing payload from the api endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct ChannelVideos {
    #[serde(default)]
    pub data: Vec<ChannelVideo>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ChannelVideo {
    pub uri: String,
}

/// Raw clip metadata produced by one resolution strategy. Built once per
/// resolution call and discarded after the catalog is populated.
#[derive(Debug, Clone)]
pub struct ClipInfo {
    pub title: String,
    pub progressive: Vec<ProgressiveFile>,
    /// Master playlist mirrors, flattened from the cdn map in sorted key
    /// order so the fallback sequence is reproducible.
    pub hls_mirrors: Vec<String>,
}

impl PlayerConfig {
    /// Flatten into the strategy-independent clip shape.
    pub(crate) fn into_clip_info(self, title: String) -> ClipInfo {
        let mut mirrors: Vec<(String, String)> = self
            .request
            .files
            .hls
            .map(|hls| {
                hls.cdns
                    .into_iter()
                    .map(|(key, cdn)| (key, cdn.url))
                    .collect()
            })
            .unwrap_or_default();
        mirrors.sort_by(|a, b| a.0.cmp(&b.0));

        ClipInfo {
            title,
            progressive: self.request.files.progressive,
            hls_mirrors: mirrors.into_iter().map(|(_, url)| url).collect(),
        }
    }
}
