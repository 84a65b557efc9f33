use regex::Regex;
use std::sync::LazyLock;

static RESOLUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RESOLUTION=(\d+)x(\d+)").unwrap());

const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF";

/// A variant entry scanned out of a master playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Variant {
    pub width: u32,
    pub height: u32,
    /// Variant playlist uri, possibly relative to the master playlist url.
    pub uri: String,
}

enum ScanState {
    AwaitingTag,
    AwaitingUri { width: u32, height: u32 },
}

/// Scan the variant entries of a master playlist.
///
/// A `#EXT-X-STREAM-INF` line describes the next non-empty line, which is the
/// variant's playlist uri. A tag line without a parsable RESOLUTION attribute
/// is skipped without consuming the following line, so it can never
/// desynchronize the tag/uri stride.
pub(crate) fn scan_master_playlist(content: &str) -> Vec<Variant> {
    let mut variants = Vec::new();
    let mut state = ScanState::AwaitingTag;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match state {
            ScanState::AwaitingTag => {
                if !line.starts_with(STREAM_INF_TAG) {
                    continue;
                }
                if let Some(caps) = RESOLUTION_REGEX.captures(line) {
                    let width = caps[1].parse().unwrap_or(0);
                    let height = caps[2].parse().unwrap_or(0);
                    state = ScanState::AwaitingUri { width, height };
                }
            }
            ScanState::AwaitingUri { width, height } => {
                variants.push(Variant {
                    width,
                    height,
                    uri: line.to_string(),
                });
                state = ScanState::AwaitingTag;
            }
        }
    }

    variants
}
