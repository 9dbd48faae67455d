use rstest::rstest;
use text_size::{TextRange, TextSize};

use super::{ImportParts, parse_import_text};

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

#[test]
fn parses_single_class_import() {
    let parts = parse_import_text("import java.util.List").unwrap();
    assert_eq!(
        parts,
        ImportParts {
            reference_text: "java.util.List".into(),
            reference_range: range(7, 21),
            alias_name: None,
            is_static: false,
            is_on_demand: false,
        }
    );
}

#[test]
fn parses_aliased_import() {
    let parts = parse_import_text("import java.util.List as Seq;").unwrap();
    assert_eq!(parts.reference_text, "java.util.List");
    assert_eq!(parts.alias_name.as_deref(), Some("Seq"));
    assert!(!parts.is_on_demand);
}

#[test]
fn parses_on_demand_import() {
    let parts = parse_import_text("import java.util.*").unwrap();
    assert_eq!(parts.reference_text, "java.util");
    assert!(parts.is_on_demand);
    // the star is not part of the reference span
    assert_eq!(parts.reference_range, range(7, 16));
}

#[test]
fn parses_static_imports() {
    let single = parse_import_text("import static java.lang.Math.abs").unwrap();
    assert!(single.is_static);
    assert!(!single.is_on_demand);
    assert_eq!(single.reference_text, "java.lang.Math.abs");

    let wildcard = parse_import_text("import static java.lang.Math.*;").unwrap();
    assert!(wildcard.is_static);
    assert!(wildcard.is_on_demand);
    assert_eq!(wildcard.reference_text, "java.lang.Math");
}

#[test]
fn parses_static_aliased_member_import() {
    let parts = parse_import_text("import static pkg.Foo.bar as baz").unwrap();
    assert!(parts.is_static);
    assert_eq!(parts.reference_text, "pkg.Foo.bar");
    assert_eq!(parts.alias_name.as_deref(), Some("baz"));
}

#[rstest]
#[case("")]
#[case("import")]
#[case("import .")]
#[case("import a..b")]
#[case("import a.b as")]
#[case("import a.* as c")]
#[case("import a.b extra")]
#[case("package a.b")]
fn malformed_statements_yield_nothing(#[case] text: &str) {
    assert_eq!(parse_import_text(text), None);
}

#[test]
fn tokens_after_the_wildcard_are_malformed() {
    assert_eq!(parse_import_text("import a.*.b"), None);
}
