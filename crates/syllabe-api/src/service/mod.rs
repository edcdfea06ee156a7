//! Service module

mod segment_service;

pub use segment_service::{SegmentApiService, SegmentApiServiceFull};
