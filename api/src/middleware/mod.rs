pub mod error_handler;
pub mod request_id;

pub use error_handler::ErrorNormalizer;
pub use request_id::{RequestId, RequestIdentity, REQUEST_ID_HEADER};
