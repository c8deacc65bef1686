use stack_trace_studio::normalizer::{normalize, Normalizer, NormalizerConfig};

const SAMPLES: &[&str] = &[
    "arrow::engine::Foo(int)",
    "arrow::compute::(anonymous namespace)::ExecBatch::Run(arrow::Array const&)",
    "CheckNotYetImplementedTestCase<Bar,Baz>(x)",
    "std::function<void (int)>::operator()(int) const",
    "std::_Function_handler<void (), main::{lambda()#1}>::_M_invoke(std::_Any_data const&)",
    "st(x)d::Foo",
    "unbalanced(open",
    "unbalanced)close",
    "((()))",
    "",
    "plain_c_function",
];

#[test]
fn test_prefix_stripping() {
    assert_eq!(normalize("arrow::engine::Foo(int)"), "Foo");
}

#[test]
fn test_family_collapse() {
    assert_eq!(
        normalize("CheckNotYetImplementedTestCase<Bar,Baz>(x)"),
        "CheckNotYetImplementedTestCase"
    );
}

#[test]
fn test_idempotent_on_samples() {
    let normalizer = Normalizer::default();

    for raw in SAMPLES {
        let once = normalizer.normalize(raw);
        let twice = normalizer.normalize(once.as_str());
        assert_eq!(once, twice, "normalize is not idempotent for {:?}", raw);
    }
}

#[test]
fn test_deterministic() {
    for raw in SAMPLES {
        assert_eq!(normalize(raw), normalize(raw));
    }
}

#[test]
fn test_empty_name() {
    assert_eq!(normalize(""), "");
    assert!(normalize("").is_empty());
}

#[test]
fn test_unbalanced_parentheses_never_fail() {
    assert_eq!(normalize("unbalanced(open"), "unbalanced");
    assert_eq!(normalize("unbalanced)close"), "unbalanced");
    assert_eq!(normalize("((()))"), "");
}

#[test]
fn test_anonymous_namespace_marker() {
    assert_eq!(
        normalize("arrow::compute::(anonymous namespace)::ExecBatch::Run(arrow::Array const&)"),
        "compute::ExecBatch::Run"
    );
}

#[test]
fn test_custom_prefixes_and_families() {
    let config = NormalizerConfig::default()
        .with_strip_prefix("compute::")
        .with_family("TestScalar")
        .with_family("TestScalarCast");
    let normalizer = Normalizer::new(config);

    assert_eq!(
        normalizer.normalize("arrow::compute::ExecBatch::Run(int)"),
        "ExecBatch::Run"
    );
    assert_eq!(normalizer.normalize("TestScalarCast<Int8Type>(x)"), "TestScalarCast");
    assert_eq!(normalizer.normalize("TestScalarAdd<Int8Type>"), "TestScalar");
}

#[test]
fn test_prefix_stripping_applies_everywhere_in_name() {
    assert_eq!(
        normalize("std::vector<std::string>::push_back(std::string&&)"),
        "vector<string>::push_back"
    );
}

#[test]
fn test_idempotent_on_deeply_nested_prefixes() {
    // each pass removes one "std::" and exposes the next one
    let raw = format!("{}std::{}Foo", "st".repeat(10), "d::".repeat(10));

    let once = normalize(&raw);
    assert_eq!(once, "Foo");
    assert_eq!(normalize(once.as_str()), once);
}

#[test]
fn test_idempotent_on_deeply_nested_groups() {
    let raw = format!("{}std::{}Bar", "st(x)".repeat(12), "d::".repeat(12));
    let normalizer = Normalizer::default();

    let once = normalizer.normalize(&raw);
    assert_eq!(normalizer.normalize(once.as_str()), once);
}

#[test]
fn test_validate_flags_cyclic_family_labels() {
    let config = NormalizerConfig::empty()
        .with_family_label("A", "B")
        .with_family_label("B", "A");

    assert_eq!(config.validate(), vec!["B".to_string(), "A".to_string()]);
    assert!(NormalizerConfig::default().validate().is_empty());
}
