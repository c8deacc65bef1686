//! Captured trace model.
//!
//! A trace is the normalized frame chain recorded at one breakpoint stop,
//! innermost frame first.

use crate::normalizer::FrameName;
use serde::{Deserialize, Serialize};

/// One observed local variable (name and its formatted value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalValue {
    pub name: String,
    pub value: String,
}

impl LocalValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A frame as reported by the debugger, before normalization
///
/// **Public** - what collaborators hand to [`CaptureSession::capture`](super::CaptureSession::capture)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFrame {
    /// Raw function name; `None` when the debugger can't resolve one
    pub function: Option<String>,

    /// Locals in scope for this frame
    pub locals: Vec<LocalValue>,
}

impl RawFrame {
    pub fn named(function: impl Into<String>) -> Self {
        Self {
            function: Some(function.into()),
            locals: Vec::new(),
        }
    }

    /// A frame without a resolvable function name
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_locals(mut self, locals: Vec<LocalValue>) -> Self {
        self.locals = locals;
        self
    }
}

/// A normalized stack trace captured at one breakpoint stop
///
/// Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Normalized frames, innermost first
    frames: Vec<FrameName>,

    /// Locals of the originating frame
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    locals: Vec<LocalValue>,

    /// Set when frames were skipped or the chain could not be fully walked
    #[serde(default)]
    truncated: bool,
}

impl Trace {
    pub fn new(frames: Vec<FrameName>, locals: Vec<LocalValue>, truncated: bool) -> Self {
        Self {
            frames,
            locals,
            truncated,
        }
    }

    pub fn frames(&self) -> &[FrameName] {
        &self.frames
    }

    pub fn locals(&self) -> &[LocalValue] {
        &self.locals
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame where the breakpoint hit
    pub fn innermost(&self) -> Option<&FrameName> {
        self.frames.first()
    }

    /// Frame `depth` levels in from the outermost end (0 = outermost)
    pub fn from_outermost(&self, depth: usize) -> Option<&FrameName> {
        self.frames.len().checked_sub(depth + 1).map(|i| &self.frames[i])
    }

    /// Adjacent `(caller, callee)` pairs
    ///
    /// Index 0 is innermost, so `frames[i + 1]` called `frames[i]`.
    pub fn call_pairs(&self) -> impl Iterator<Item = (&FrameName, &FrameName)> {
        self.frames.windows(2).map(|pair| (&pair[1], &pair[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    fn trace(names: &[&str]) -> Trace {
        Trace::new(names.iter().map(|n| normalize(n)).collect(), Vec::new(), false)
    }

    #[test]
    fn test_call_pairs_point_caller_to_callee() {
        let t = trace(&["C", "B", "A"]);
        let pairs: Vec<(&str, &str)> = t
            .call_pairs()
            .map(|(caller, callee)| (caller.as_str(), callee.as_str()))
            .collect();

        assert_eq!(pairs, vec![("B", "C"), ("A", "B")]);
    }

    #[test]
    fn test_call_pairs_short_traces() {
        assert_eq!(trace(&[]).call_pairs().count(), 0);
        assert_eq!(trace(&["main"]).call_pairs().count(), 0);
    }

    #[test]
    fn test_from_outermost() {
        let t = trace(&["leaf", "mid", "main"]);
        assert_eq!(t.from_outermost(0).map(|f| f.as_str()), Some("main"));
        assert_eq!(t.from_outermost(2).map(|f| f.as_str()), Some("leaf"));
        assert_eq!(t.from_outermost(3), None);
        assert_eq!(t.innermost().map(|f| f.as_str()), Some("leaf"));
    }
}
