use core::fmt::Display;
use outcome_rail::errors;
use outcome_rail::types::errors_formatter::{ErrorsFormatConfig, ErrorsFormatter};

struct TestDisplay(String);

impl Display for TestDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_default_formatter() {
    let config = ErrorsFormatConfig::default();
    let d1 = TestDisplay("first".into());
    let d2 = TestDisplay("second".into());

    let items = vec![&d1 as &dyn Display, &d2 as &dyn Display];
    assert_eq!(config.format_list(items.into_iter()), "first; second");
}

#[test]
fn test_bulleted_formatter() {
    let errors = errors!["name is empty", "age is negative"];
    let rendered = errors.display_with(ErrorsFormatConfig::bulleted()).to_string();
    assert_eq!(rendered, "- name is empty\n- age is negative");
}

#[test]
fn test_numbered_formatter() {
    let errors = errors!["a", "b", "c"];
    let rendered = errors.display_with(ErrorsFormatConfig::numbered()).to_string();
    assert_eq!(rendered, "1. a\n2. b\n3. c");
}

#[test]
fn test_compact_formatter() {
    let errors = errors!["a", "b"];
    assert_eq!(errors.display().compact().to_string(), "a | b");
}

#[test]
fn test_header_single_and_multi_line() {
    let errors = errors!["a", "b"];
    assert_eq!(errors.display().with_header("2 problems:").to_string(), "2 problems: a; b");
    assert_eq!(
        errors.display().bulleted().with_header("2 problems:").to_string(),
        "2 problems:\n- a\n- b"
    );
}

#[test]
fn test_custom_separator_and_suffix() {
    let config = ErrorsFormatConfig {
        separator: ", ".into(),
        item_suffix: Some("!".into()),
        ..Default::default()
    };
    assert_eq!(errors!["x", "y"].display_with(config).to_string(), "x!, y!");
    assert_eq!(errors!["x", "y"].display().with_separator(" / ").numbered(true).to_string(), "1. x / 2. y");
}

#[test]
fn test_display_for_errors_uses_default() {
    assert_eq!(errors!["only"].to_string(), "only");
    assert_eq!(errors![1, 2, 3].to_string(), "1; 2; 3");
}

struct Bracketed;

impl ErrorsFormatter for Bracketed {
    fn format_item(&self, index: usize, item: &dyn Display) -> String {
        format!("[{index}:{item}]")
    }
}

#[test]
fn test_trait_default_methods() {
    let d1 = TestDisplay("a".into());
    let d2 = TestDisplay("b".into());
    let items = vec![&d1 as &dyn Display, &d2 as &dyn Display];
    assert_eq!(Bracketed.format_list(items.into_iter()), "[0:a]; [1:b]");
}

#[test]
fn test_multiline_detection() {
    assert!(ErrorsFormatConfig::bulleted().is_multiline());
    assert!(!ErrorsFormatConfig::compact().is_multiline());
}
