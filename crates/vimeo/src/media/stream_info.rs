use crate::media::MediaFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StreamInfo {
    // Quality id of the stream, e.g., "1080p", "720p", etc.
    pub quality: String,
    pub format: MediaFormat,
    // "WxH" video profile, e.g., "1920x1080"
    pub video_profile: String,
    // Ordered source urls. A single url for progressive streams, the full
    // segment list for segmented streams.
    pub src: Vec<String>,
    // Total size in bytes. Zero until probed.
    pub size: u64,
}

impl fmt::Display for StreamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size > 0 {
            write!(
                f,
                "{} ({}, {}, {} bytes)",
                self.quality,
                self.video_profile,
                self.format.as_str(),
                self.size
            )
        } else {
            write!(
                f,
                "{} ({}, {})",
                self.quality,
                self.video_profile,
                self.format.as_str()
            )
        }
    }
}
