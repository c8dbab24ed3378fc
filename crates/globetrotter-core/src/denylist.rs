// crates/globetrotter-core/src/denylist.rs

//! Name pairs that overlap textually but denote different places.
//!
//! The table is consulted only when a containment match would otherwise
//! fire; it never affects exact or alias matches. Pairs are unordered.

use crate::text::fold_key;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Built-in exclusions, folded. Each pair is stored once; order is irrelevant.
const DEFAULT_DENYLIST: &[(&str, &str)] = &[
    ("oman", "romania"),
    ("niger", "nigeria"),
    ("mali", "somalia"),
    ("mali", "somaliland"),
    ("guinea", "equatorial guinea"),
    ("guinea", "guinea-bissau"),
    ("guinea", "papua new guinea"),
    ("sudan", "south sudan"),
    ("dominica", "dominican republic"),
    ("ireland", "northern ireland"),
    ("samoa", "american samoa"),
    ("india", "british indian ocean territory"),
    ("georgia", "south georgia and the south sandwich islands"),
    ("republic of the congo", "democratic republic of the congo"),
    // admin1 names
    ("kansas", "arkansas"),
    ("virginia", "west virginia"),
    ("wales", "new south wales"),
    ("jersey", "new jersey"),
    ("hampshire", "new hampshire"),
    ("mexico", "new mexico"),
];

static DEFAULT_SET: Lazy<Denylist> = Lazy::new(|| Denylist::from_pairs(DEFAULT_DENYLIST));

/// A set of unordered name pairs excluded from containment matching.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    pairs: HashSet<(String, String)>,
}

impl Denylist {
    pub fn builtin() -> &'static Denylist {
        &DEFAULT_SET
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> Self {
        let mut out = Self::default();
        for (a, b) in pairs {
            out.insert(a.as_ref(), b.as_ref());
        }
        out
    }

    /// Add an exclusion. Both names are folded and stored in sorted order.
    pub fn insert(&mut self, a: &str, b: &str) {
        self.pairs.insert(Self::key(&fold_key(a), &fold_key(b)));
    }

    /// `true` if `{a, b}` is excluded. Inputs are expected to be canonical
    /// names already; argument order does not matter.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_order_independent() {
        let d = Denylist::builtin();
        assert!(d.contains("oman", "romania"));
        assert!(d.contains("romania", "oman"));
    }

    #[test]
    fn unrelated_pairs_are_not_excluded() {
        assert!(!Denylist::builtin().contains("austria", "australia"));
    }

    #[test]
    fn insert_folds_names() {
        let mut d = Denylist::empty();
        d.insert(" Iran ", "TIRAN");
        assert!(d.contains("tiran", "iran"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn builtin_pairs_are_folded_and_distinct() {
        for (a, b) in DEFAULT_DENYLIST {
            assert_eq!(fold_key(a), *a);
            assert_eq!(fold_key(b), *b);
            assert_ne!(a, b);
        }
        assert_eq!(Denylist::builtin().len(), DEFAULT_DENYLIST.len());
    }
}
