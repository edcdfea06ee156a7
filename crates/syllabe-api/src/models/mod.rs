//! Model module

mod request;
mod response;

pub use request::SegmentRequest;
pub use response::SegmentResponse;
