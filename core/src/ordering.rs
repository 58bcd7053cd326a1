//! Canonical ordering for nested snapshots.
//!
//! Snapshot files are meant to live under version control, so the same
//! schema must always serialize identically. Collections are sorted by name,
//! and fields and relations by their `field` name within each collection.
//!
//! Names are compared with [`locale_cmp`], which uses the CLDR root
//! collation (Unicode Collation Algorithm, tertiary strength, punctuation
//! not ignorable). In practice:
//!
//! - punctuation and symbols sort before digits, digits before letters,
//!   in the order `_ - . $`;
//! - letters compare case-insensitively first, with accented letters next to
//!   their base letter;
//! - remaining ties put lowercase before uppercase, then fall back to code
//!   point order.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use schema_merge_core::locale_cmp;
//!
//! assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
//! assert_eq!(locale_cmp("a", "A"), Ordering::Less);
//! assert_eq!(locale_cmp("date_created", "date1"), Ordering::Less);
//! assert_eq!(locale_cmp("éa", "fa"), Ordering::Less);
//! ```

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::types::{Named, NestedSnapshot};

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compares two names the way the snapshot ordering does.
///
/// Names the collator considers equal are ordered by code point, so the
/// result is a total order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Sorts records by name with [`locale_cmp`].
///
/// The sort is stable, so records sharing a name keep their relative order.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(|a, b| locale_cmp(a.name(), b.name()));
}

/// Puts a nested snapshot into canonical order, in place.
///
/// Idempotent: a second call leaves the snapshot unchanged.
pub fn canonicalize(snapshot: &mut NestedSnapshot) {
    sort_by_name(&mut snapshot.collections);
    for collection in &mut snapshot.collections {
        if let Some(fields) = collection.fields.as_mut() {
            sort_by_name(fields);
        }
        if let Some(relations) = collection.relations.as_mut() {
            sort_by_name(relations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Collection, Field, Metadata, NestedCollection, Relation};

    fn names<T: Named>(items: &[T]) -> Vec<&str> {
        items.iter().map(T::name).collect()
    }

    #[test]
    fn test_case_insensitive_primary() {
        let mut items = vec![
            Collection::new("beta"),
            Collection::new("Alpha"),
            Collection::new("gamma"),
        ];
        sort_by_name(&mut items);
        assert_eq!(names(&items), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Ab", "ab"), Ordering::Greater);
        assert_eq!(locale_cmp("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        let mut items = vec![
            Collection::new("ab"),
            Collection::new("a1"),
            Collection::new("a_b"),
        ];
        sort_by_name(&mut items);
        assert_eq!(names(&items), vec!["a_b", "a1", "ab"]);
    }

    #[test]
    fn test_symbol_and_accent_order_matches_root_collation() {
        let input = ["a-b", "a_b", "a.b", "a$b", "a1", "ab", "aB", "Ab", "éa", "fa"];
        let mut items: Vec<Collection> = input.into_iter().map(Collection::new).collect();
        sort_by_name(&mut items);
        assert_eq!(
            names(&items),
            vec!["a_b", "a-b", "a.b", "a$b", "a1", "ab", "aB", "Ab", "éa", "fa"]
        );
    }

    #[test]
    fn test_accented_letter_sorts_with_base_letter() {
        assert_eq!(locale_cmp("résumé", "rf"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("date", "date_created"), Ordering::Less);
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_stable_for_duplicate_names() {
        let mut items = vec![
            Field::new("first", "dup"),
            Field::new("x", "a"),
            Field::new("second", "dup"),
        ];
        sort_by_name(&mut items);
        let owners: Vec<&str> = items.iter().map(|f| f.collection.as_str()).collect();
        assert_eq!(owners, vec!["x", "first", "second"]);
    }

    #[test]
    fn test_canonicalize_sorts_every_level_and_is_idempotent() {
        let mut b = NestedCollection::from(Collection::new("b"));
        b.fields = Some(vec![Field::new("b", "z"), Field::new("b", "m")]);
        b.relations = Some(vec![Relation::new("b", "z"), Relation::new("b", "a")]);
        let a = NestedCollection::from(Collection::new("a"));
        let mut snapshot = NestedSnapshot {
            directus: None,
            header: Metadata::new(),
            collections: vec![b, a],
        };

        canonicalize(&mut snapshot);
        assert_eq!(names(&snapshot.collections), vec!["a", "b"]);
        let b = &snapshot.collections[1];
        assert_eq!(names(b.fields.as_deref().unwrap()), vec!["m", "z"]);
        assert_eq!(names(b.relations.as_deref().unwrap()), vec!["a", "z"]);
        assert!(snapshot.collections[0].fields.is_none());

        let once = snapshot.clone();
        canonicalize(&mut snapshot);
        assert_eq!(snapshot, once);
    }
}
