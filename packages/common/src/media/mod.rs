mod content_type;
mod error;
mod transcode;

pub use content_type::{OCTET_STREAM, resolve_content_type};
pub use error::MediaError;
pub use transcode::{Transcoded, transcode};
