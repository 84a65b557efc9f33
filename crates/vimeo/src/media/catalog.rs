use rustc_hash::FxHashMap;

use crate::media::stream_info::StreamInfo;

/// The fixed quality ladder, best first. Used both to decide which HLS
/// resolutions are worth expanding and to order the final output.
pub const QUALITY_LADDER: [(&str, &str); 6] = [
    ("2160p", "3840x2160"),
    ("1440p", "2560x1440"),
    ("1080p", "1920x1080"),
    ("720p", "1280x720"),
    ("540p", "960x540"),
    ("360p", "640x360"),
];

/// Canonical video profile for a ladder quality id, `None` for ids that are
/// not on the ladder.
pub fn ladder_profile(quality: &str) -> Option<&'static str> {
    QUALITY_LADDER
        .iter()
        .find(|(id, _)| *id == quality)
        .map(|(_, profile)| *profile)
}

/// Sparse catalog of streams keyed by quality id.
///
/// At most one stream per quality id. Inserting an id that is already present
/// replaces the previous entry, so with the extraction build order
/// (progressive first, HLS expansion second) the segmented stream wins a tie.
#[derive(Debug, Clone, Default)]
pub struct StreamCatalog {
    streams: FxHashMap<String, StreamInfo>,
}

impl StreamCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stream, returning the entry it replaced, if any.
    pub fn insert(&mut self, stream: StreamInfo) -> Option<StreamInfo> {
        self.streams.insert(stream.quality.clone(), stream)
    }

    pub fn get(&self, quality: &str) -> Option<&StreamInfo> {
        self.streams.get(quality)
    }

    pub fn contains(&self, quality: &str) -> bool {
        self.streams.contains_key(quality)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut StreamInfo> {
        self.streams.values_mut()
    }

    /// Streams in ladder order, best quality first. Absent tiers are simply
    /// omitted; ids off the ladder never appear.
    pub fn sorted(&self) -> Vec<StreamInfo> {
        QUALITY_LADDER
            .iter()
            .filter_map(|(id, _)| self.streams.get(*id).cloned())
            .collect()
    }

    /// Consuming variant of [`sorted`](Self::sorted).
    pub fn into_sorted(mut self) -> Vec<StreamInfo> {
        QUALITY_LADDER
            .iter()
            .filter_map(|(id, _)| self.streams.remove(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaFormat;

    fn stream(quality: &str, format: MediaFormat) -> StreamInfo {
        StreamInfo {
            quality: quality.to_string(),
            format,
            video_profile: ladder_profile(quality).unwrap_or("0x0").to_string(),
            src: vec![format!("https://example.com/{quality}")],
            size: 0,
        }
    }

    #[test]
    fn sorted_follows_ladder_order() {
        let mut catalog = StreamCatalog::new();
        catalog.insert(stream("360p", MediaFormat::Mp4));
        catalog.insert(stream("2160p", MediaFormat::M3u8));
        catalog.insert(stream("720p", MediaFormat::Mp4));

        let qualities: Vec<_> = catalog.sorted().into_iter().map(|s| s.quality).collect();
        assert_eq!(qualities, ["2160p", "720p", "360p"]);
    }

    #[test]
    fn later_insert_overwrites_earlier() {
        let mut catalog = StreamCatalog::new();
        catalog.insert(stream("1440p", MediaFormat::Mp4));
        let replaced = catalog.insert(stream("1440p", MediaFormat::M3u8));

        assert_eq!(replaced.unwrap().format, MediaFormat::Mp4);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("1440p").unwrap().format, MediaFormat::M3u8);
    }

    #[test]
    fn absent_tiers_are_omitted_not_padded() {
        let mut catalog = StreamCatalog::new();
        catalog.insert(stream("540p", MediaFormat::Mp4));

        let sorted = catalog.sorted();
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].quality, "540p");
    }

    #[test]
    fn ladder_profile_lookup() {
        assert_eq!(ladder_profile("2160p"), Some("3840x2160"));
        assert_eq!(ladder_profile("1440p"), Some("2560x1440"));
        assert_eq!(ladder_profile("240p"), None);
    }
}
