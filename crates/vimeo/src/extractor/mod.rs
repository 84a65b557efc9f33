pub mod error;
pub mod extractor;
pub mod hls;
pub mod utils;
pub mod vimeo;
mod default;

pub use default::default_client;
