//! Property-based tests for the relative path algebra.
//!
//! Note: The normalize module already has property tests for separator
//! conversion. This module focuses on `RelativePath` operations.

use super::normalize::to_unix_style;
use super::relationship::relative_path_from;
use super::{RelativePath, RootFolder};
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4})?"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

// Arbitrary text with both separator kinds, including the empty string
fn any_path_strategy() -> impl Strategy<Value = String> {
    "[a-z./\\\\]{0,24}"
}

fn root_strategy() -> impl Strategy<Value = RootFolder> {
    prop::sample::select(RootFolder::ALL.to_vec())
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 1..6).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Stored form never contains backslashes and unix style is idempotent
    #[test]
    fn unix_style_idempotent(p in any_path_strategy(), root in root_strategy()) {
        let path = RelativePath::new(&p, root);
        let once = path.to_unix_style();
        prop_assert!(!once.contains('\\'));
        prop_assert_eq!(to_unix_style(&once), once.clone());
        prop_assert_eq!(path.root(), root);
    }

    // Applying the same extension twice is the same as applying it once
    #[test]
    fn with_file_extension_stable(p in any_path_strategy(), ext in "\\.?[a-z]{1,4}") {
        let once = RelativePath::new(&p, RootFolder::ProjectFolder).with_file_extension(&ext);
        let twice = once.with_file_extension(&ext);
        prop_assert_eq!(once, twice);
    }

    // Parent undoes child on the last segment
    #[test]
    fn child_then_parent_is_identity(p in relative_path_strategy(), x in path_component_strategy()) {
        let path = RelativePath::new(&p, RootFolder::ProjectFolder);
        let child = path.child_file(&x);
        prop_assert_eq!(child.parent_directory().to_unix_style(), p);
    }

    // Absolute children replace the path
    #[test]
    fn absolute_child_replaces(p in any_path_strategy(), sub in absolute_path_strategy()) {
        let sub = sub.to_string_lossy().into_owned();
        let child = RelativePath::new(&p, RootFolder::BuildTargetFolder).child_file(&sub);
        prop_assert_eq!(child.to_unix_style(), to_unix_style(&sub));
        prop_assert_eq!(child.root(), RootFolder::BuildTargetFolder);
    }

    // Derived paths keep their root
    #[test]
    fn derived_paths_keep_root(p in any_path_strategy(), root in root_strategy()) {
        let path = RelativePath::new(&p, root);
        prop_assert_eq!(path.parent_directory().root(), root);
        prop_assert_eq!(path.child_file("x").root(), root);
        prop_assert_eq!(path.with_file_extension("h").root(), root);
    }

    // Operations are total on arbitrary input
    #[test]
    fn queries_never_panic(p in any_path_strategy()) {
        let path = RelativePath::from(p.as_str());
        let _ = path.file_name();
        let _ = path.file_stem();
        let _ = path.file_extension();
        let _ = path.has_file_extension("cpp;h;");
        let _ = path.is_absolute();
    }

    // Relative computation from a common base round-trips through rebasing
    #[test]
    fn from_file_and_rebase_agree(
        base in absolute_path_strategy(),
        rel in relative_path_strategy(),
        sub in relative_path_strategy(),
    ) {
        let file = base.join(&rel);
        let new_root = base.join(&sub);
        let path = RelativePath::from_file(&file, &base, RootFolder::ProjectFolder);
        prop_assert_eq!(path.as_str(), rel.as_str());

        let rebased = path.rebased(&base, &new_root, RootFolder::BuildTargetFolder);
        prop_assert_eq!(rebased.as_str(), relative_path_from(&file, &new_root));
    }
}
