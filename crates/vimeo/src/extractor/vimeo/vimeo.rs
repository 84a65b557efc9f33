use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

use crate::extractor::error::ExtractorError;
use crate::extractor::extractor::{Extractor, PlatformExtractor};
use crate::extractor::hls::HlsExtractor;
use crate::extractor::utils::{capture_group_1, capture_group_1_owned, probe_sizes};
use crate::extractor::vimeo::models::{ClipInfo, ClipPageConfig, PlayerConfig};
use crate::extractor::vimeo::playlist::scan_master_playlist;
use crate::extractor::vimeo::{CHANNEL_URL_REGEX, URL_REGEX, VimeoEndpoints};
use crate::media::catalog::{StreamCatalog, ladder_profile};
use crate::media::media_format::MediaFormat;
use crate::media::media_info::MediaInfo;
use crate::media::stream_info::StreamInfo;

static CLIP_PAGE_CONFIG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"clip_page_config\s*=\s*(\{.+?\});").unwrap());
static EMBED_CONFIG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var t=(\{.+?\});").unwrap());
static TITLE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>([^<]+)</title>").unwrap());
static CLIP_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""clip_id":(\d+)"#).unwrap());

/// Heights expanded from the HLS path. Lower tiers are only reachable
/// through progressive files.
const HLS_HEIGHTS: [u32; 2] = [2160, 1440];

pub struct VimeoExtractor {
    extractor: Extractor,
    /// Referer forwarded to the player config endpoint, when the caller
    /// supplies one.
    referer: Option<String>,
    endpoints: VimeoEndpoints,
}

impl VimeoExtractor {
    pub fn new(platform_url: String, client: Client) -> Self {
        Self::with_endpoints(platform_url, client, VimeoEndpoints::default())
    }

    pub fn with_endpoints(
        platform_url: String,
        client: Client,
        endpoints: VimeoEndpoints,
    ) -> Self {
        Self {
            extractor: Extractor::new("Vimeo".to_string(), platform_url, client),
            referer: None,
            endpoints,
        }
    }

    pub fn from_id(vid: &str, client: Client) -> Self {
        Self::new(format!("{}/{}", VimeoEndpoints::WATCH, vid), client)
    }

    /// Resolve a video id from an arbitrary url, scraping the page for an
    /// embedded clip id when the url itself does not carry one.
    pub async fn resolve_video_id(url: &str, client: &Client) -> Result<String, ExtractorError> {
        if CHANNEL_URL_REGEX.is_match(url) {
            return Err(ExtractorError::ValidationError(format!(
                "{url} is a channel url, use ChannelClient instead"
            )));
        }
        if let Some(vid) = capture_group_1(&URL_REGEX, url) {
            return Ok(vid.to_owned());
        }

        let extractor = Extractor::new("Vimeo".to_string(), url.to_string(), client.clone());
        let page = extractor.fetch_text(url).await?;
        capture_group_1_owned(&CLIP_ID_REGEX, &page)
            .ok_or_else(|| ExtractorError::InvalidUrl(url.to_string()))
    }

    /// Set the referer forwarded when fetching the player config.
    pub fn set_referer(&mut self, referer: impl Into<String>) {
        self.referer = Some(referer.into());
    }

    fn video_id(&self) -> Result<&str, ExtractorError> {
        if CHANNEL_URL_REGEX.is_match(&self.extractor.url) {
            return Err(ExtractorError::ValidationError(format!(
                "{} is a channel url, use ChannelClient instead",
                self.extractor.url
            )));
        }
        capture_group_1(&URL_REGEX, &self.extractor.url)
            .ok_or_else(|| ExtractorError::InvalidUrl(self.extractor.url.clone()))
    }

    async fn fetch_player_config(&self, config_url: &str) -> Result<String, ExtractorError> {
        let mut request = self.extractor.get(config_url);
        if let Some(referer) = &self.referer {
            request = request.header(reqwest::header::REFERER, referer);
        }
        let response = request.send().await?.error_for_status()?;
        let content = response.text().await?;
        Ok(content)
    }

    /// Primary strategy: the watch page embeds a config blob pointing at the
    /// player config endpoint, and carries the canonical title.
    async fn resolve_from_watch_page(&self, vid: &str) -> Result<ClipInfo, ExtractorError> {
        let page = self
            .extractor
            .fetch_text(&format!("{}/{}", self.endpoints.watch_base, vid))
            .await?;
        let raw = capture_group_1(&CLIP_PAGE_CONFIG_REGEX, &page).ok_or_else(|| {
            ExtractorError::ValidationError("clip_page_config not found in watch page".to_string())
        })?;
        let page_config: ClipPageConfig = serde_json::from_str(raw)?;

        let body = self.fetch_player_config(&page_config.player.config_url).await?;
        let player_config: PlayerConfig = serde_json::from_str(&body)?;

        Ok(player_config.into_clip_info(page_config.clip.title))
    }

    /// Fallback strategy: the embed player page inlines a structurally
    /// different blob with the same `request.files` payload, and the title
    /// only appears in the html title tag.
    async fn resolve_from_embed_player(&self, vid: &str) -> Result<ClipInfo, ExtractorError> {
        let page = self
            .extractor
            .fetch_text(&format!("{}/video/{}", self.endpoints.player_base, vid))
            .await?;
        let title = capture_group_1_owned(&TITLE_TAG_REGEX, &page).ok_or_else(|| {
            ExtractorError::ValidationError("title tag not found in embed player page".to_string())
        })?;
        let raw = capture_group_1(&EMBED_CONFIG_REGEX, &page).ok_or_else(|| {
            ExtractorError::ValidationError(
                "player config blob not found in embed player page".to_string(),
            )
        })?;
        let player_config: PlayerConfig = serde_json::from_str(raw)?;

        Ok(player_config.into_clip_info(title))
    }

    /// Resolve title, progressive files and master-playlist mirrors for this
    /// video. Any failure of the watch-page strategy, transport or parse,
    /// falls back to the embed player; if both fail the embed player's error
    /// is surfaced.
    pub async fn resolve_clip_info(&self) -> Result<ClipInfo, ExtractorError> {
        let vid = self.video_id()?;

        match self.resolve_from_watch_page(vid).await {
            Ok(info) => {
                debug!(vid = %vid, "resolved metadata from watch page");
                Ok(info)
            }
            Err(primary) => {
                debug!(vid = %vid, error = %primary, "watch page strategy failed, trying embed player");
                match self.resolve_from_embed_player(vid).await {
                    Ok(info) => {
                        debug!(vid = %vid, "resolved metadata from embed player");
                        Ok(info)
                    }
                    Err(fallback) => {
                        warn!(vid = %vid, primary = %primary, fallback = %fallback,
                            "both metadata strategies failed");
                        Err(fallback)
                    }
                }
            }
        }
    }

    /// Try the master-playlist mirrors in order; the first one that answers
    /// is authoritative. Returns the winning url together with the content.
    async fn fetch_master_playlist(&self, mirrors: &[String]) -> Option<(String, String)> {
        for mirror in mirrors {
            match self.extractor.fetch_text(mirror).await {
                Ok(content) => {
                    debug!(url = %mirror, "fetched master playlist");
                    return Some((mirror.clone(), content));
                }
                Err(e) => {
                    debug!(url = %mirror, error = %e, "mirror fetch failed, trying next");
                }
            }
        }
        None
    }

    /// Build the stream catalog for a resolved clip. Never fails hard: if no
    /// mirror answers, the catalog holds whatever progressive streams exist.
    pub async fn build_catalog(&self, info: &ClipInfo) -> StreamCatalog {
        let mut catalog = StreamCatalog::new();

        for file in &info.progressive {
            // Only ladder qualities are recognized.
            if ladder_profile(&file.quality).is_none() {
                continue;
            }
            catalog.insert(StreamInfo {
                quality: file.quality.clone(),
                format: MediaFormat::Mp4,
                video_profile: format!("{}x{}", file.width, file.height),
                src: vec![file.url.clone()],
                size: 0,
            });
        }

        let Some((master_url, master_content)) =
            self.fetch_master_playlist(&info.hls_mirrors).await
        else {
            return catalog;
        };

        let base_url = match Url::parse(&master_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = %master_url, error = %e, "unusable master playlist url");
                return catalog;
            }
        };

        for variant in scan_master_playlist(&master_content) {
            if !HLS_HEIGHTS.contains(&variant.height) {
                continue;
            }
            let quality = format!("{}p", variant.height);
            // The hls tiers are always on the ladder; the profile is pinned
            // to the canonical string, not the playlist's exact numbers.
            let video_profile = ladder_profile(&quality).unwrap_or_default().to_string();

            let variant_url = match base_url.join(&variant.uri) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    warn!(uri = %variant.uri, error = %e, "unusable variant uri, skipping");
                    continue;
                }
            };
            let src = match self
                .extract_hls_segments(&self.extractor.client, &variant_url)
                .await
            {
                Ok(segments) => segments,
                Err(e) => {
                    warn!(url = %variant_url, error = %e, "failed to expand hls variant, skipping");
                    continue;
                }
            };

            // Overwrites any progressive entry at the same quality id.
            catalog.insert(StreamInfo {
                quality,
                format: MediaFormat::M3u8,
                video_profile,
                src,
                size: 0,
            });
        }

        catalog
    }
}

impl HlsExtractor for VimeoExtractor {}

#[async_trait]
impl PlatformExtractor for VimeoExtractor {
    fn get_extractor(&self) -> &Extractor {
        &self.extractor
    }

    async fn extract(&self) -> Result<MediaInfo, ExtractorError> {
        let info = self.resolve_clip_info().await?;
        let mut catalog = self.build_catalog(&info).await;

        // Segmented entries keep size zero; their lists are too long to probe
        // per extraction.
        for stream in catalog.values_mut() {
            if stream.format == MediaFormat::Mp4 {
                stream.size = probe_sizes(&self.extractor.client, &stream.src).await;
            }
        }

        Ok(MediaInfo::new(
            self.extractor.url.clone(),
            info.title,
            catalog.into_sorted(),
        ))
    }
}
