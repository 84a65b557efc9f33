use async_trait::async_trait;
use m3u8_rs::Playlist;
use reqwest::Client;
use url::Url;

use super::error::ExtractorError;

/// Expansion of a leaf HLS media playlist into its concrete segment list.
#[async_trait]
pub trait HlsExtractor {
    /// Fetch a media playlist and return the ordered segment urls, resolved
    /// against the playlist url.
    async fn extract_hls_segments(
        &self,
        client: &Client,
        playlist_url: &str,
    ) -> Result<Vec<String>, ExtractorError> {
        let base_url = Url::parse(playlist_url)
            .map_err(|e| ExtractorError::HlsPlaylistError(e.to_string()))?;

        let response = client.get(playlist_url).send().await?.bytes().await?;
        let playlist = m3u8_rs::parse_playlist_res(&response)
            .map_err(|e| ExtractorError::HlsPlaylistError(e.to_string()))?;

        match playlist {
            Playlist::MediaPlaylist(pl) => {
                let mut segments = Vec::with_capacity(pl.segments.len());
                for segment in &pl.segments {
                    let segment_url = base_url
                        .join(&segment.uri)
                        .map_err(|e| ExtractorError::HlsPlaylistError(e.to_string()))?;
                    segments.push(segment_url.to_string());
                }
                Ok(segments)
            }
            Playlist::MasterPlaylist(_) => Err(ExtractorError::HlsPlaylistError(
                "expected a media playlist, got a master playlist".to_string(),
            )),
        }
    }
}
