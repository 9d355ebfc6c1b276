//! Property-based tests for lexical operations.

use crate::lexical::{base, clean, dir, join};
use crate::Pathname;
use proptest::prelude::*;

// Elements mixing normal names with "." and ".." and empty elements
fn element_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z0-9_.-]{1,10}",
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(element_strategy(), 0..8)).prop_map(|(rooted, parts)| {
        let body = parts.join("/");
        if rooted {
            format!("/{body}")
        } else {
            body
        }
    })
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Cleaning is idempotent
    #[test]
    fn clean_idempotent(s in path_strategy()) {
        let once = clean(&s);
        prop_assert_eq!(clean(&once), once);
    }

    // Cleaned paths contain no empty or "." elements
    #[test]
    fn clean_has_no_redundant_elements(s in path_strategy()) {
        let cleaned = clean(&s);
        prop_assert!(!cleaned.contains("//"));
        if cleaned != "." {
            prop_assert!(cleaned.split('/').all(|e| e != "."));
        }
        prop_assert!(cleaned == "/" || !cleaned.ends_with('/'));
    }

    // Cleaning never changes whether a path is rooted
    #[test]
    fn clean_preserves_rootedness(s in path_strategy()) {
        prop_assert_eq!(clean(&s).starts_with('/'), s.starts_with('/'));
    }

    // Pathname::new always holds the cleaned string
    #[test]
    fn new_matches_clean(s in path_strategy()) {
        prop_assert_eq!(Pathname::new(&s).as_str(), clean(&s));
    }

    // Appending a single name and taking the parent gets back where we were
    #[test]
    fn append_then_parent(s in path_strategy(), name in name_strategy()) {
        let p = Pathname::new(&s);
        prop_assert_eq!(p.append(&name).parent(), p);
    }

    // The basename of an appended name is that name
    #[test]
    fn append_then_basename(s in path_strategy(), name in name_strategy()) {
        prop_assert_eq!(Pathname::new(&s).append(&name).basename(), name);
    }

    // join output is always clean (or empty)
    #[test]
    fn join_is_clean(a in path_strategy(), b in path_strategy()) {
        let joined = join(&[&a, &b]);
        prop_assert!(joined.is_empty() || clean(&joined) == joined);
    }

    // dir and base split a cleaned multi-element path
    #[test]
    fn dir_and_base_recombine(s in path_strategy()) {
        let cleaned = clean(&s);
        prop_assume!(cleaned.contains('/') && cleaned != "/");
        prop_assert_eq!(join(&[&dir(&cleaned), &base(&cleaned)]), cleaned);
    }
}
