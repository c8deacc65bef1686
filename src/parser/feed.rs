//! Capture feed parser.
//!
//! Parses a recorded capture feed into frame reads and replays them into a
//! [`CaptureSession`], exactly as a live debugger hook would call it.

use super::schema::{RawCaptureEvent, RawFrameRecord};
use crate::capture::{CaptureSession, RawFrame};
use crate::utils::config::CAPTURE_FIELD_NAMES;
use crate::utils::error::{FrameError, ParseError};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Frame reads for one breakpoint stop, innermost first
pub type FrameReads = Vec<Result<RawFrame, FrameError>>;

/// A parsed capture feed
#[derive(Debug, Clone, Default)]
pub struct CaptureFeed {
    /// Breakpoint location, if the script recorded it
    pub breakpoint: Option<String>,

    /// One entry per breakpoint stop, in arrival order
    pub events: Vec<FrameReads>,
}

impl CaptureFeed {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed every event to `session` in order
    ///
    /// **Public** - returns the number of captures recorded
    pub fn replay_into(self, session: &mut CaptureSession) -> usize {
        let count = self.events.len();

        for reads in self.events {
            session.capture(reads);
        }

        info!("Replayed {} captures", count);
        count
    }
}

/// Parse a capture feed from JSON
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw_feed` - Either an object holding a `captures` array (or `events` /
///   `stacks`) or a bare array of events
///
/// # Errors
/// * `ParseError::InvalidFormat` - wrong top-level shape or an unreadable event
pub fn parse_capture_feed(raw_feed: &serde_json::Value) -> Result<CaptureFeed, ParseError> {
    let (breakpoint, raw_events) = detect_feed_format(raw_feed)?;

    let events = raw_events
        .iter()
        .enumerate()
        .map(|(i, raw)| parse_event(i, raw))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} capture events", events.len());

    Ok(CaptureFeed { breakpoint, events })
}

/// Read and parse a capture feed file
pub fn read_capture_feed(input_path: impl AsRef<Path>) -> Result<CaptureFeed, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading capture feed from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_capture_feed(&raw)
}

/// Locate the event list and optional breakpoint label
///
/// **Private** - internal helper for parse_capture_feed
fn detect_feed_format(
    raw_feed: &serde_json::Value,
) -> Result<(Option<String>, &Vec<serde_json::Value>), ParseError> {
    match raw_feed {
        serde_json::Value::Object(obj) => {
            let events = CAPTURE_FIELD_NAMES
                .iter()
                .find_map(|field| obj.get(*field).and_then(|v| v.as_array()))
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "Feed object has no capture list (expected one of: {})",
                        CAPTURE_FIELD_NAMES.join(", ")
                    ))
                })?;

            let breakpoint = obj
                .get("breakpoint")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            Ok((breakpoint, events))
        }

        serde_json::Value::Array(events) => {
            debug!("Feed is a bare event array");
            Ok((None, events))
        }

        _ => Err(ParseError::InvalidFormat(
            "Capture feed must be a JSON object or array".to_string(),
        )),
    }
}

fn parse_event(index: usize, raw: &serde_json::Value) -> Result<FrameReads, ParseError> {
    let event: RawCaptureEvent = serde_json::from_value(raw.clone())
        .map_err(|e| ParseError::InvalidFormat(format!("Capture {}: {}", index, e)))?;

    let reads = match event {
        RawCaptureEvent::Frames(frames) => frames.into_iter().map(frame_read).collect(),

        RawCaptureEvent::Detailed {
            frames,
            truncated,
            reason,
        } => {
            let mut reads: FrameReads = frames.into_iter().map(frame_read).collect();
            if truncated {
                let reason = reason.unwrap_or_else(|| "unwinding stopped".to_string());
                reads.push(Err(FrameError::ChainBroken(reason)));
            }
            reads
        }
    };

    Ok(reads)
}

fn frame_read(record: RawFrameRecord) -> Result<RawFrame, FrameError> {
    match record {
        RawFrameRecord::Name(name) => Ok(RawFrame::named(name)),

        RawFrameRecord::Detailed {
            error: Some(error), ..
        } => Err(FrameError::MalformedFrame(error)),

        RawFrameRecord::Detailed {
            function, locals, ..
        } => Ok(RawFrame { function, locals }),
    }
}
