//! Property-accessor name derivation.
//!
//! A statically imported field `bar` is reachable property-style through
//! `getBar()`, `isBar()`, and `setBar(...)`; this module expands one
//! imported identifier into that synonym set and pairs requested names with
//! the underlying member names when the import is aliased.

use smol_str::{SmolStr, format_smolstr};

/// Capitalize per the host accessor convention: a name whose second
/// character is already uppercase is left untouched (`sName` stays `sName`,
/// `URL` stays `URL`).
fn capitalize(name: &str) -> SmolStr {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return SmolStr::default();
    };
    if chars.clone().next().is_some_and(char::is_uppercase) {
        return SmolStr::new(name);
    }
    let mut result = String::with_capacity(name.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    SmolStr::from(result)
}

pub fn getter_name(name: &str) -> SmolStr {
    format_smolstr!("get{}", capitalize(name))
}

pub fn boolean_getter_name(name: &str) -> SmolStr {
    format_smolstr!("is{}", capitalize(name))
}

pub fn setter_name(name: &str) -> SmolStr {
    format_smolstr!("set{}", capitalize(name))
}

/// The four names a property-style reference may use for `name`, in probe
/// order: the name itself, its getter, its boolean getter, its setter.
/// Always four entries, whether or not any real member answers to them.
pub fn synonyms(name: &str) -> [SmolStr; 4] {
    [
        SmolStr::new(name),
        getter_name(name),
        boolean_getter_name(name),
        setter_name(name),
    ]
}

/// Pair each requested-name variant with the member-name variant to probe.
///
/// Un-aliased imports pair every synonym with itself. Aliased imports pair
/// positionally: a use site asking for `getBaz` (alias `baz`) must be
/// matched against the real member's `getBar`.
pub fn paired_synonyms(imported_name: &str, reference_name: &str) -> Vec<(SmolStr, SmolStr)> {
    if imported_name == reference_name {
        synonyms(imported_name)
            .into_iter()
            .map(|name| (name.clone(), name))
            .collect()
    } else {
        synonyms(imported_name)
            .into_iter()
            .zip(synonyms(reference_name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("bar", "getBar", "isBar", "setBar")]
    #[case("x", "getX", "isX", "setX")]
    #[case("sName", "getsName", "issName", "setsName")]
    #[case("URL", "getURL", "isURL", "setURL")]
    #[case("fooBar", "getFooBar", "isFooBar", "setFooBar")]
    fn accessor_names(
        #[case] name: &str,
        #[case] getter: &str,
        #[case] boolean_getter: &str,
        #[case] setter: &str,
    ) {
        assert_eq!(getter_name(name), getter);
        assert_eq!(boolean_getter_name(name), boolean_getter);
        assert_eq!(setter_name(name), setter);
    }

    #[test]
    fn synonym_set_is_always_four_names_in_probe_order() {
        assert_eq!(synonyms("bar"), ["bar", "getBar", "isBar", "setBar"]);
    }

    #[test]
    fn identity_pairing_without_alias() {
        let pairs = paired_synonyms("bar", "bar");
        assert_eq!(pairs.len(), 4);
        for (requested, actual) in &pairs {
            assert_eq!(requested, actual);
        }
    }

    #[test]
    fn positional_pairing_with_alias() {
        let pairs = paired_synonyms("baz", "bar");
        assert_eq!(
            pairs,
            [
                ("baz".into(), "bar".into()),
                ("getBaz".into(), "getBar".into()),
                ("isBaz".into(), "isBar".into()),
                ("setBaz".into(), "setBar".into()),
            ]
        );
    }
}
