use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::extractor::error::ExtractorError;
use crate::extractor::extractor::PlatformExtractor;
use crate::extractor::utils::{capture_group_1, capture_group_1_or_invalid_url};
use crate::extractor::vimeo::models::ChannelVideos;
use crate::extractor::vimeo::{CHANNEL_URL_REGEX, VimeoEndpoints, VimeoExtractor};
use crate::media::media_info::MediaInfo;

static VIDEO_URI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/videos/(\w+)").unwrap());

/// Published api token from the reference client. Treated as opaque
/// configuration; override it per deployment.
pub const DEFAULT_ACCESS_TOKEN: &str = "f6785418277b72c7c87d3132c79eec24";

/// Thin client for the channel listing endpoint.
pub struct ChannelClient {
    client: Client,
    access_token: String,
    endpoints: VimeoEndpoints,
}

impl ChannelClient {
    pub fn new(client: Client) -> Self {
        Self::with_access_token(client, DEFAULT_ACCESS_TOKEN)
    }

    pub fn with_access_token(client: Client, access_token: impl Into<String>) -> Self {
        Self::with_endpoints(client, access_token, VimeoEndpoints::default())
    }

    pub fn with_endpoints(
        client: Client,
        access_token: impl Into<String>,
        endpoints: VimeoEndpoints,
    ) -> Self {
        Self {
            client,
            access_token: access_token.into(),
            endpoints,
        }
    }

    /// Pull the channel id out of a channel url.
    pub fn channel_id_from_url(url: &str) -> Result<&str, ExtractorError> {
        capture_group_1_or_invalid_url(&CHANNEL_URL_REGEX, url)
    }

    /// List the video ids of a channel.
    pub async fn video_ids(&self, channel_id: &str) -> Result<Vec<String>, ExtractorError> {
        let url = format!("{}/channels/{}/videos", self.endpoints.api_base, channel_id);
        let response = self
            .client
            .get(&url)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let listing: ChannelVideos = serde_json::from_str(&body)?;

        Ok(listing
            .data
            .iter()
            .filter_map(|video| capture_group_1(&VIDEO_URI_REGEX, &video.uri))
            .map(ToOwned::to_owned)
            .collect())
    }

    /// Extract every video in a channel. A failing video is logged and
    /// skipped; the batch continues with the remaining ids.
    pub async fn extract_all(&self, channel_id: &str) -> Result<Vec<MediaInfo>, ExtractorError> {
        let ids = self.video_ids(channel_id).await?;
        debug!(channel_id = %channel_id, count = ids.len(), "listed channel videos");

        let mut results = Vec::with_capacity(ids.len());
        for vid in ids {
            let extractor = VimeoExtractor::with_endpoints(
                format!("{}/{}", VimeoEndpoints::WATCH, vid),
                self.client.clone(),
                self.endpoints.clone(),
            );
            match extractor.extract().await {
                Ok(info) => results.push(info),
                Err(e) => {
                    warn!(vid = %vid, error = %e, "extraction failed, continuing with remaining videos");
                }
            }
        }
        Ok(results)
    }
}
