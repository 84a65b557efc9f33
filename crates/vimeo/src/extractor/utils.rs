use futures::future::join_all;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::extractor::error::ExtractorError;

#[inline]
pub fn capture_group_1<'a>(re: &Regex, input: &'a str) -> Option<&'a str> {
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[inline]
pub fn capture_group_1_owned(re: &Regex, input: &str) -> Option<String> {
    capture_group_1(re, input).map(ToOwned::to_owned)
}

#[inline]
pub fn capture_group_1_or_invalid_url<'a>(
    re: &Regex,
    input: &'a str,
) -> Result<&'a str, ExtractorError> {
    capture_group_1(re, input).ok_or_else(|| ExtractorError::InvalidUrl(input.to_string()))
}

/// Sum the Content-Length of every url, probing them concurrently.
///
/// A url without a usable HEAD response counts as zero. Probing never fails
/// the extraction.
pub async fn probe_sizes(client: &Client, urls: &[String]) -> u64 {
    let probes = urls.iter().map(|url| async move {
        match client.head(url).send().await {
            // Read the header directly: `content_length()` reports the body
            // size, which is always zero for a HEAD response.
            Ok(response) => response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(0),
            Err(e) => {
                debug!(error = %e, url = %url, "size probe failed");
                0
            }
        }
    });

    join_all(probes).await.into_iter().sum()
}
