//! Property-based tests for the classification rule.
//!
//! These tests use proptest to generate random model locations and verify
//! that the registry key and import alias never drift apart.

#[cfg(test)]
mod proptest_tests {
    use crate::classify::{Classification, RelativeSource, MODEL_DIR, VIEW_DIR};
    use proptest::prelude::*;

    fn segment() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9]{0,8}"
    }

    proptest! {
        /// Property: key and alias carry the same segments, only the separator differs
        #[test]
        fn model_key_and_alias_share_segments(rest in prop::collection::vec(segment(), 1..6)) {
            let mut segments = vec![MODEL_DIR.to_string()];
            segments.extend(rest.iter().cloned());
            let source = RelativeSource::from_segments(segments);

            match source.classify("AnyName") {
                Classification::Model { key, alias } => {
                    let key_parts: Vec<&str> = key.split('.').collect();
                    let alias_parts: Vec<&str> = alias.split('_').collect();
                    prop_assert_eq!(&key_parts, &alias_parts);
                    prop_assert_eq!(key_parts.len(), rest.len());
                    prop_assert_eq!(alias.replace('_', "."), key);
                }
                other => prop_assert!(false, "expected model, got {:?}", other),
            }
        }

        /// Property: views are always registered under the class name
        #[test]
        fn view_key_is_class_name(
            rest in prop::collection::vec(segment(), 1..6),
            name in "[A-Z][A-Za-z0-9]{0,12}",
        ) {
            let mut segments = vec![VIEW_DIR.to_string()];
            segments.extend(rest);
            let source = RelativeSource::from_segments(segments);
            prop_assert_eq!(source.classify(&name), Classification::View { name: name.clone() });
        }

        /// Property: any other top-level directory is excluded
        #[test]
        fn other_top_dirs_are_excluded(
            top in "[a-z]{1,8}",
            rest in prop::collection::vec(segment(), 1..4),
        ) {
            prop_assume!(top != VIEW_DIR && top != MODEL_DIR);
            let mut segments = vec![top];
            segments.extend(rest);
            let source = RelativeSource::from_segments(segments);
            prop_assert_eq!(source.classify("Anything"), Classification::Excluded);
        }

        /// Property: the import specifier keeps every segment in order
        #[test]
        fn import_specifier_round_trips_segments(rest in prop::collection::vec(segment(), 1..6)) {
            let source = RelativeSource::from_segments(rest.clone());
            let specifier = source.import_specifier("/src");
            let expected = format!("/src/{}", rest.join("/"));
            prop_assert_eq!(specifier, expected);
        }
    }
}
