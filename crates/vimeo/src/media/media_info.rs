use serde::{Deserialize, Serialize};

use super::stream_info::StreamInfo;

/// The caller-facing result of an extraction: the clip title plus every
/// usable stream, already in ladder order (best quality first).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MediaInfo {
    // Url the extraction started from
    pub site_url: String,
    pub title: String,
    pub streams: Vec<StreamInfo>,
}

impl MediaInfo {
    pub fn new(site_url: String, title: String, streams: Vec<StreamInfo>) -> Self {
        Self {
            site_url,
            title,
            streams,
        }
    }

    /// Serialize the MediaInfo to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a MediaInfo from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
