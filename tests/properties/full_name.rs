//! Property tests for full-name identity.

use proptest::prelude::*;

use descsync::FullName;

fn code() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap()
}

fn version() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[vV][0-9]{1,3}").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Changing the case of code or version never changes identity.
    #[test]
    fn property_full_name_ignores_case(code in code(), version in version()) {
        let original = FullName::new(&code, version.as_deref());
        let upper_version = version.as_ref().map(|v| v.to_uppercase());
        let shouted = FullName::new(&code.to_uppercase(), upper_version.as_deref());

        prop_assert_eq!(&original, &shouted);
        prop_assert_eq!(original.key(), shouted.key());
    }

    /// PROPERTY: The display form keeps the declared spelling.
    #[test]
    fn property_full_name_display_preserves_spelling(code in code(), version in version()) {
        let name = FullName::new(&code, version.as_deref());
        let expected = match &version {
            Some(v) => format!("{}.{}", code, v),
            None => code.clone(),
        };
        prop_assert_eq!(name.to_string(), expected);
    }

    /// PROPERTY: Distinct codes never collide.
    #[test]
    fn property_distinct_codes_differ(a in code(), b in code(), version in version()) {
        prop_assume!(a.to_lowercase() != b.to_lowercase());
        prop_assert_ne!(
            FullName::new(&a, version.as_deref()),
            FullName::new(&b, version.as_deref())
        );
    }
}
