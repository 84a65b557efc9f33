use crate::extractor::default::DEFAULT_UA;
use crate::media::media_info::MediaInfo;

use super::error::ExtractorError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};

/// Base extractor shared by the platform front ends.
///
/// Holds the HTTP client plus the default headers that are attached to every
/// request the extractor makes.
#[derive(Debug, Clone)]
pub struct Extractor {
    // url to extract from, e.g., "https://vimeo.com/58388167"
    pub url: String,
    // name of the platform, e.g., "Vimeo"
    pub platform_name: String,
    // The reqwest client
    pub client: Client,
    platform_headers: HeaderMap,
}

impl Extractor {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        platform_name: S1,
        platform_url: S2,
        client: Client,
    ) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            reqwest::header::USER_AGENT,
            HeaderValue::from_static(DEFAULT_UA),
        );
        default_headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        default_headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );
        // Do not set `Accept-Encoding` here.
        // Reqwest auto-adds it (and auto-decompresses) when the corresponding
        // crate features are enabled, as long as we don't override the header.

        Self {
            platform_name: platform_name.into(),
            url: platform_url.into(),
            client,
            platform_headers: default_headers,
        }
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Create an HTTP request with the platform headers pre-configured.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .headers(self.platform_headers.clone())
    }

    /// GET a url and return the response body as text. Client and server
    /// error statuses are reported as http errors.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ExtractorError> {
        let response = self.get(url).send().await?.error_for_status()?;
        let content = response.text().await?;
        Ok(content)
    }
}

#[async_trait]
pub trait PlatformExtractor: Send + Sync {
    fn get_extractor(&self) -> &Extractor;

    async fn extract(&self) -> Result<MediaInfo, ExtractorError>;
}
