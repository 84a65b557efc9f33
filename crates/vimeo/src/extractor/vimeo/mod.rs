pub mod channel;
pub mod models;
pub(crate) mod playlist;
#[allow(clippy::module_inception)]
pub mod vimeo;

pub use channel::ChannelClient;
pub use models::{ClipInfo, ProgressiveFile};
pub use vimeo::VimeoExtractor;

use regex::Regex;
use std::sync::LazyLock;

/// Upstream hosts the extractors talk to. Injected at construction so a
/// deployment can route through a proxy or a staging host.
#[derive(Debug, Clone)]
pub struct VimeoEndpoints {
    pub watch_base: String,
    pub player_base: String,
    pub api_base: String,
}

impl VimeoEndpoints {
    const WATCH: &'static str = "https://vimeo.com";
    const PLAYER: &'static str = "https://player.vimeo.com";
    const API: &'static str = "https://api.vimeo.com";
}

impl Default for VimeoEndpoints {
    fn default() -> Self {
        Self {
            watch_base: Self::WATCH.to_string(),
            player_base: Self::PLAYER.to_string(),
            api_base: Self::API.to_string(),
        }
    }
}

/// Watch or player urls carrying a numeric video id.
pub static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:[\w-]+\.)?vimeo\.com(?:/[\w-]+)*?/(\d+)").unwrap()
});

/// Channel urls, e.g. "https://vimeo.com/channels/464686".
pub static CHANNEL_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)?(?:www\.)?vimeo\.com/channels/(\w+)").unwrap());
