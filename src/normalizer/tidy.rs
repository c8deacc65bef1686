//! Frame name tidying rules.
//!
//! Debuggers report fully decorated C++ symbol names such as
//! `arrow::compute::(anonymous namespace)::ExecPlan::Run(int, int)`.
//! Graph nodes want the short form, so every raw name goes through three
//! textual steps, in this order:
//!
//! 1. strip configured namespace prefixes (every occurrence)
//! 2. collapse names starting with a known family prefix to the family label
//! 3. drop parenthesized groups by keeping the even-indexed `(`/`)` segments

use super::name::FrameName;
use crate::utils::config::{ANONYMOUS_NAMESPACE, DEFAULT_FAMILIES, DEFAULT_STRIP_PREFIXES};
use log::warn;
use std::collections::HashSet;

/// A family of names collapsed into one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRule {
    /// Names starting with this prefix belong to the family
    pub prefix: String,

    /// Label every member collapses to
    pub label: String,
}

impl FamilyRule {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
        }
    }
}

/// Normalizer configuration
///
/// **Public** - built from CLI flags in the graph command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Literal substrings removed from names, applied in order
    pub strip_prefixes: Vec<String>,

    /// Family collapse rules; the longest matching prefix wins
    pub families: Vec<FamilyRule>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        let mut strip_prefixes: Vec<String> =
            DEFAULT_STRIP_PREFIXES.iter().map(|p| p.to_string()).collect();
        strip_prefixes.push(ANONYMOUS_NAMESPACE.to_string());

        Self {
            strip_prefixes,
            families: DEFAULT_FAMILIES
                .iter()
                .map(|f| FamilyRule::new(*f, *f))
                .collect(),
        }
    }
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with no prefixes and no families (only argument stripping)
    pub fn empty() -> Self {
        Self {
            strip_prefixes: Vec::new(),
            families: Vec::new(),
        }
    }

    /// Drop the built-in namespace prefixes, keeping the anonymous-namespace marker
    pub fn without_default_prefixes(mut self) -> Self {
        self.strip_prefixes
            .retain(|p| !DEFAULT_STRIP_PREFIXES.contains(&p.as_str()));
        self
    }

    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() && !self.strip_prefixes.contains(&prefix) {
            self.strip_prefixes.push(prefix);
        }
        self
    }

    /// Add a family whose label is the prefix itself
    pub fn with_family(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let label = prefix.clone();
        self.with_family_label(prefix, label)
    }

    pub fn with_family_label(mut self, prefix: impl Into<String>, label: impl Into<String>) -> Self {
        let rule = FamilyRule::new(prefix, label);
        if !rule.prefix.is_empty() && !self.families.contains(&rule) {
            self.families.push(rule);
        }
        self
    }

    /// Check that every family label survives another normalization pass
    ///
    /// A label is unstable when a tidy pass changes it: it contains a group or
    /// a configured prefix, or it starts with another family's prefix and
    /// collapses to a different label. Families whose labels point at each
    /// other are caught by the last case.
    ///
    /// Returns the offending labels; each is also logged as a warning.
    pub fn validate(&self) -> Vec<String> {
        let normalizer = Normalizer::new(self.clone());
        let mut unstable = Vec::new();

        for family in &self.families {
            let label = &family.label;
            let tidied = normalizer.tidy(label);

            if &tidied != label {
                warn!(
                    "Family label '{}' is changed by normalization (to '{}') and will not be stable",
                    label, tidied
                );
                unstable.push(label.clone());
            }
        }

        unstable
    }
}

/// Maps raw debugger function names to [`FrameName`]s
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a raw function name
    ///
    /// **Public** - also used by display layers to label things consistently
    ///
    /// Runs the tidy pass until it reaches a fixpoint so that
    /// `normalize(normalize(x)) == normalize(x)` holds even for names where
    /// removing a group exposes a new prefix (`st(x)d::Foo`).
    ///
    /// A pass that doesn't collapse a family strictly shortens the name, so
    /// the loop only revisits a name when family labels trigger each other.
    /// That stops at the first repeat (see [`NormalizerConfig::validate`]).
    pub fn normalize(&self, raw: &str) -> FrameName {
        let mut current = self.tidy(raw);
        let mut seen = HashSet::new();

        loop {
            let next = self.tidy(&current);
            if next == current {
                break;
            }
            if !seen.insert(current.clone()) {
                warn!("Family labels cycle while normalizing '{}', stopping at '{}'", raw, current);
                break;
            }
            current = next;
        }

        FrameName::new(current)
    }

    /// One pass of the three tidy steps
    fn tidy(&self, raw: &str) -> String {
        let mut name = raw.to_string();

        for prefix in &self.config.strip_prefixes {
            if !prefix.is_empty() {
                name = name.replace(prefix.as_str(), "");
            }
        }

        if let Some(family) = self.matching_family(&name) {
            name = family.label.clone();
        }

        strip_groups(&name)
    }

    fn matching_family(&self, name: &str) -> Option<&FamilyRule> {
        self.config
            .families
            .iter()
            .filter(|f| name.starts_with(f.prefix.as_str()))
            .fold(None, |best: Option<&FamilyRule>, f| match best {
                Some(b) if b.prefix.len() >= f.prefix.len() => Some(b),
                _ => Some(f),
            })
    }
}

/// Keep only the text outside parenthesized groups
///
/// Splits on both `(` and `)` and keeps segments 0, 2, 4, ... Unbalanced
/// input never fails; a lone `(` simply drops everything after it.
fn strip_groups(name: &str) -> String {
    name.split(['(', ')']).step_by(2).collect()
}

/// Normalize with the default configuration
///
/// **Public** - convenience for callers that don't customise prefixes
pub fn normalize(raw: &str) -> FrameName {
    Normalizer::default().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_groups() {
        assert_eq!(strip_groups("Foo(int, int)"), "Foo");
        assert_eq!(strip_groups("Foo(int)::Bar(x)"), "Foo::Bar");
        assert_eq!(strip_groups("NoGroups"), "NoGroups");
        assert_eq!(strip_groups(""), "");
    }

    #[test]
    fn test_strip_groups_unbalanced() {
        assert_eq!(strip_groups("Foo(int"), "Foo");
        assert_eq!(strip_groups("Foo)int"), "Foo");
        assert_eq!(strip_groups("Foo)a(b"), "Foob");
    }

    #[test]
    fn test_strip_groups_nested_keeps_alternating_segments() {
        // segments: "f", "a", "b", "", "" -> keep 0, 2, 4
        assert_eq!(strip_groups("f(a(b))"), "fb");
    }

    #[test]
    fn test_default_prefixes() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("arrow::engine::Foo(int)"), "Foo");
        assert_eq!(normalizer.normalize("std::vector<std::string>::push_back"), "vector<string>::push_back");
        assert_eq!(
            normalizer.normalize("arrow::(anonymous namespace)::Helper(double)"),
            "Helper"
        );
    }

    #[test]
    fn test_family_collapse() {
        assert_eq!(
            normalize("CheckNotYetImplementedTestCase<Bar,Baz>(x)"),
            "CheckNotYetImplementedTestCase"
        );
    }

    #[test]
    fn test_longest_family_wins() {
        let config = NormalizerConfig::empty()
            .with_family_label("Check", "check")
            .with_family_label("CheckArray", "check-array");
        let normalizer = Normalizer::new(config);

        assert_eq!(normalizer.normalize("CheckArrayRoundTrip<int>"), "check-array");
        assert_eq!(normalizer.normalize("CheckScalar<int>"), "check");
    }

    #[test]
    fn test_fixpoint_after_group_removal() {
        let normalizer = Normalizer::default();
        let once = normalizer.normalize("st(x)d::Foo");
        assert_eq!(once, "Foo");
        assert_eq!(normalizer.normalize(once.as_str()), once);
    }

    #[test]
    fn test_cyclic_families_terminate() {
        let config = NormalizerConfig::empty()
            .with_family_label("A", "B")
            .with_family_label("B", "A");
        let normalizer = Normalizer::new(config.clone());

        let name = normalizer.normalize("Alpha(int)");
        assert!(name == "A" || name == "B");
        assert_eq!(config.validate(), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_validate_accepts_self_labelled_chain() {
        // "Xyz" also starts with "X", but the longer rule keeps it as is
        let config = NormalizerConfig::empty()
            .with_family_label("X", "Xyz")
            .with_family("Xyz");

        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_without_default_prefixes() {
        let config = NormalizerConfig::default().without_default_prefixes();
        assert_eq!(config.strip_prefixes, vec![ANONYMOUS_NAMESPACE.to_string()]);

        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.normalize("std::sort(a, b)"), "std::sort");
    }

    #[test]
    fn test_builder_ignores_empty_and_duplicates() {
        let config = NormalizerConfig::empty()
            .with_strip_prefix("")
            .with_strip_prefix("ns::")
            .with_strip_prefix("ns::")
            .with_family("");
        assert_eq!(config.strip_prefixes, vec!["ns::".to_string()]);
        assert!(config.families.is_empty());
    }

    #[test]
    fn test_validate_flags_unstable_labels() {
        let config = NormalizerConfig::default()
            .with_family_label("Odd", "odd(label)")
            .with_family_label("Ns", "std::thing");

        let unstable = config.validate();
        assert_eq!(unstable, vec!["odd(label)".to_string(), "std::thing".to_string()]);
        assert!(NormalizerConfig::default().validate().is_empty());
    }
}
