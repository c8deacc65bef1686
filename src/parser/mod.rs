//! Capture feed parsing and schema definitions.
//!
//! This module handles:
//! - Parsing recorded capture feeds (JSON) from debugger-side scripts
//! - Turning frame records into frame reads (including faults)
//! - Replaying them into a capture session

pub mod feed;
pub mod schema;

// Re-export main types
pub use feed::{parse_capture_feed, read_capture_feed, CaptureFeed, FrameReads};
pub use schema::{RawCaptureEvent, RawFrameRecord};
