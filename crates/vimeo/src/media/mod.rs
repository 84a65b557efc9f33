pub mod catalog;
pub mod media_format;
pub mod media_info;
pub mod stream_info;

pub use catalog::StreamCatalog;
pub use media_format::MediaFormat;
pub use media_info::MediaInfo;
pub use stream_info::StreamInfo;
