use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    /// Progressive flat file, served from a single url.
    Mp4,
    /// Segmented HLS delivery.
    M3u8,
}

impl MediaFormat {
    pub fn as_str(&self) -> &str {
        match self {
            MediaFormat::Mp4 => "mp4",
            MediaFormat::M3u8 => "m3u8",
        }
    }

    pub fn from_str(format: &str) -> Option<Self> {
        match format.to_lowercase().as_str() {
            "mp4" => Some(MediaFormat::Mp4),
            "m3u8" => Some(MediaFormat::M3u8),
            _ => None,
        }
    }
}
