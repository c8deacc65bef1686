//! Normalized frame names.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical display name of one stack frame's function
///
/// **Public** - produced by [`Normalizer::normalize`](super::Normalizer::normalize)
///
/// Equality is plain string equality of the normalized text, so two raw
/// names that normalize the same way land on the same graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameName(String);

impl FrameName {
    pub(crate) fn new(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FrameName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FrameName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FrameName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FrameName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
