//! Trace capture sink.
//!
//! Receives frame chains from a debugger collaborator, normalizes them and
//! keeps the ordered trace collection for one session.

pub mod session;
pub mod trace;

pub use session::{CaptureSession, SessionReport};
pub use trace::{LocalValue, RawFrame, Trace};
