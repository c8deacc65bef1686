//! Capture feed schema.
//!
//! A capture feed is the JSON a debugger-side script writes while the
//! debuggee runs: one event per breakpoint stop, frames innermost first.
//! Several shorthand shapes are accepted so simple scripts can dump plain
//! name lists:
//!
//! ```json
//! {
//!   "breakpoint": "arrow::compute::Foo",
//!   "captures": [
//!     ["Foo(int)", "Bar()", "main"],
//!     { "frames": [
//!         { "function": "Foo(int)", "locals": [{ "name": "i", "value": "3" }] },
//!         { "error": "cannot read symbol" },
//!         "main"
//!       ],
//!       "truncated": true,
//!       "reason": "corrupt stack"
//!     }
//!   ]
//! }
//! ```

use crate::capture::LocalValue;
use serde::Deserialize;

/// One frame as written by the capture script
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawFrameRecord {
    /// Bare function name
    Name(String),

    /// Full frame record
    Detailed {
        #[serde(default, alias = "name")]
        function: Option<String>,

        #[serde(default)]
        locals: Vec<LocalValue>,

        /// Present when the script failed to read this frame
        #[serde(default)]
        error: Option<String>,
    },
}

/// One breakpoint stop as written by the capture script
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCaptureEvent {
    /// Bare frame list
    Frames(Vec<RawFrameRecord>),

    /// Frame list with unwinding status
    Detailed {
        #[serde(alias = "stack")]
        frames: Vec<RawFrameRecord>,

        /// Unwinding stopped early after the listed frames
        #[serde(default)]
        truncated: bool,

        #[serde(default)]
        reason: Option<String>,
    },
}
