//! Property tests for change detection.

use std::collections::BTreeSet;

use proptest::prelude::*;

use descsync::domain::services::ChangeChecker;
use descsync::{FullName, Operation};

fn operation_list() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(("[a-dA-D]", "[12]"), 0..=8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(code, version)| Operation::new(&code, Some(&version), "http://backend"))
            .collect()
    })
}

fn names(ops: &[Operation]) -> BTreeSet<FullName> {
    ops.iter().map(Operation::full_name).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: What is added going one way is removed going back.
    #[test]
    fn property_change_sets_are_symmetric(a in operation_list(), b in operation_list()) {
        let checker = ChangeChecker::new();
        let forward = checker.check(&a, &b);
        let backward = checker.check(&b, &a);

        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
    }

    /// PROPERTY: Comparing a list with itself yields no changes.
    #[test]
    fn property_identical_lists_have_no_changes(a in operation_list()) {
        prop_assert!(ChangeChecker::new().check(&a, &a).is_empty());
    }

    /// PROPERTY: Added names are new, removed names are gone.
    #[test]
    fn property_changes_partition_names(a in operation_list(), b in operation_list()) {
        let changes = ChangeChecker::new().check(&a, &b);
        let before = names(&a);
        let after = names(&b);

        prop_assert!(changes.added.iter().all(|n| after.contains(n) && !before.contains(n)));
        prop_assert!(changes.removed.iter().all(|n| before.contains(n) && !after.contains(n)));
    }

    /// PROPERTY: Registering (empty previous list) reports every name as added.
    #[test]
    fn property_registration_adds_everything(b in operation_list()) {
        let changes = ChangeChecker::new().check(&[], &b);
        prop_assert_eq!(changes.added, names(&b));
        prop_assert!(changes.removed.is_empty());
    }
}
