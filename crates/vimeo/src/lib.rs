pub mod extractor;
pub mod media;

pub use extractor::error::ExtractorError;
pub use extractor::extractor::PlatformExtractor;
pub use extractor::vimeo::{ChannelClient, VimeoEndpoints, VimeoExtractor};
pub use media::{MediaFormat, MediaInfo, StreamInfo};
