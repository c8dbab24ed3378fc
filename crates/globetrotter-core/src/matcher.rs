// crates/globetrotter-core/src/matcher.rs

//! # Equivalence Matcher
//!
//! Decides whether two free-text place names denote the same place.
//!
//! The check runs in stages, cheapest and safest first:
//! 1. empty input never matches;
//! 2. canonical names (fold + one alias hop) are equal, and an empty
//!    canonical name goes no further;
//! 3. one further alias hop on either side meets the other's canonical name;
//! 4. one canonical name contains the other, the shorter has at least
//!    [`MIN_CONTAINMENT_LEN`] characters and the pair is not denylisted.
//!
//! Every stage is symmetric, so `matches(a, b) == matches(b, a)`.

use crate::alias::AliasTable;
use crate::config::MatchConfig;
use crate::denylist::Denylist;
use crate::text::char_len;
use once_cell::sync::Lazy;

/// Containment never fires when the contained name is shorter than this.
pub const MIN_CONTAINMENT_LEN: usize = 4;

static DEFAULT_MATCHER: Lazy<NameMatcher<'static>> =
    Lazy::new(|| NameMatcher::new(AliasTable::builtin(), Denylist::builtin()));

/// Borrowing matcher over an alias table and a denylist.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher<'a> {
    aliases: &'a AliasTable,
    denylist: &'a Denylist,
    min_containment_len: usize,
}

impl<'a> NameMatcher<'a> {
    pub fn new(aliases: &'a AliasTable, denylist: &'a Denylist) -> Self {
        Self {
            aliases,
            denylist,
            min_containment_len: MIN_CONTAINMENT_LEN,
        }
    }

    /// Matcher over the built-in alias table and denylist.
    pub fn builtin() -> &'static NameMatcher<'static> {
        &DEFAULT_MATCHER
    }

    pub fn with_config(mut self, config: &MatchConfig) -> Self {
        self.min_containment_len = config.min_containment_len;
        self
    }

    pub fn aliases(&self) -> &'a AliasTable {
        self.aliases
    }

    pub fn denylist(&self) -> &'a Denylist {
        self.denylist
    }

    /// Canonical name of `raw` under this matcher's alias table.
    pub fn normalize(&self, raw: &str) -> String {
        self.aliases.normalize(raw)
    }

    /// `true` if `a` and `b` name the same place.
    ///
    /// Only the empty string is refused outright. Input that folds to nothing
    /// (whitespace, zero-width or combining marks) still matches itself but
    /// never pairs with a non-empty canonical name.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        let norm_a = self.aliases.normalize(a);
        let norm_b = self.aliases.normalize(b);
        if norm_a == norm_b {
            return true;
        }
        if norm_a.is_empty() || norm_b.is_empty() {
            return false;
        }

        // Exactly one more hop; reciprocal entries make a fixed point unreachable.
        if self.aliases.normalize(&norm_a) == norm_b || self.aliases.normalize(&norm_b) == norm_a {
            return true;
        }

        self.contains_guarded(&norm_a, &norm_b) || self.contains_guarded(&norm_b, &norm_a)
    }

    /// [`NameMatcher::matches`] over optional inputs; `None` never matches.
    pub fn matches_opt(&self, a: Option<&str>, b: Option<&str>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => self.matches(a, b),
            _ => false,
        }
    }

    fn contains_guarded(&self, outer: &str, inner: &str) -> bool {
        char_len(inner) >= self.min_containment_len
            && outer.contains(inner)
            && !self.denylist.contains(outer, inner)
    }
}

/// `true` if `a` and `b` name the same place, using the built-in tables.
///
/// ```rust
/// use globetrotter_core::names_match;
///
/// assert!(names_match("USA", "United States of America"));
/// assert!(names_match("Czechia", "Czech Republic"));
/// assert!(!names_match("Romania", "Oman"));
/// assert!(!names_match("", ""));
/// ```
pub fn names_match(a: &str, b: &str) -> bool {
    NameMatcher::builtin().matches(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m() -> &'static NameMatcher<'static> {
        NameMatcher::builtin()
    }

    #[test]
    fn reflexive_for_non_empty() {
        for name in ["France", "usa", "Côte d'Ivoire", "x", "Czechia", "United States"] {
            assert!(m().matches(name, name), "{name} should match itself");
        }
    }

    #[test]
    fn empty_never_matches() {
        assert!(!m().matches("", ""));
        assert!(!m().matches("", "   "));
        assert!(!m().matches("", "France"));
        assert!(!m().matches("France", ""));
        assert!(!m().matches_opt(None, Some("France")));
        assert!(!m().matches_opt(None, None));
    }

    #[test]
    fn names_that_fold_to_nothing_match_only_each_other() {
        for name in [" ", "\t", "   ", "\u{200B}", "\u{301}", "\u{FEFF}"] {
            assert!(m().matches(name, name), "{name:?} should match itself");
            assert!(!m().matches(name, "France"), "{name:?} paired with France");
            assert!(!m().matches("France", name), "France paired with {name:?}");
        }
        assert!(m().matches(" ", "\t"));
    }

    #[test]
    fn alias_matches() {
        assert!(m().matches("USA", "United States of America"));
        assert!(m().matches("USA", "United States"));
        assert!(m().matches("United Kingdom", "Britain"));
        assert!(m().matches("uk", "Great Britain"));
        assert!(m().matches("Czechia", "Czech Republic"));
        assert!(m().matches("Russian Federation", "Russia"));
        assert!(m().matches("Holy See", "Vatican City"));
    }

    #[test]
    fn second_pass_catches_one_transitive_hop() {
        // "east timor" <-> "timor-leste" are reciprocal: first pass swaps them.
        assert!(m().matches("East Timor", "Timor-Leste"));
        // "tanzania" -> long form, and back again.
        assert!(m().matches("Tanzania", "United Republic of Tanzania"));
    }

    #[test]
    fn containment_respects_floor() {
        assert!(!m().matches("Chad", "Ch"));
        assert!(!m().matches("Ch", "Chad"));
        assert!(m().matches("Bolivia", "Plurinational State of Bolivia"));
    }

    #[test]
    fn denylist_blocks_containment_both_ways() {
        assert!(!m().matches("Romania", "Oman"));
        assert!(!m().matches("Oman", "Romania"));
        assert!(!m().matches("Niger", "Nigeria"));
        assert!(!m().matches("Somalia", "Mali"));
        assert!(!m().matches("Republic of the Congo", "Democratic Republic of the Congo"));
    }

    #[test]
    fn denylist_does_not_block_exact_matches() {
        assert!(m().matches("Oman", "OMAN"));
        assert!(m().matches("romania", " Romania "));
    }

    #[test]
    fn custom_floor_is_honoured() {
        let cfg = MatchConfig {
            min_containment_len: 8,
        };
        let strict = NameMatcher::new(AliasTable::builtin(), Denylist::builtin()).with_config(&cfg);
        assert!(!strict.matches("Bolivia", "Plurinational State of Bolivia"));
        assert!(strict.matches("Bolivia", "Bolivia"));
    }

    #[test]
    fn symmetric_over_sample_pairs() {
        let names = [
            "", " ", "USA", "United States", "United States of America", "America",
            "UK", "Britain", "United Kingdom", "Northern Ireland", "Ireland",
            "Czechia", "Czech Republic", "Oman", "Romania", "Chad", "Ch",
            "Niger", "Nigeria", "Guinea", "Guinea-Bissau", "Congo", "DRC",
            "Republic of the Congo", "Democratic Republic of the Congo",
            "East Timor", "Timor-Leste", "Tanzania", "Kansas", "Arkansas",
            "São Paulo", "Sao Paulo", "Bavaria", "Virginia", "West Virginia",
        ];
        for a in names {
            for b in names {
                assert_eq!(m().matches(a, b), m().matches(b, a), "asymmetric for {a:?} / {b:?}");
            }
        }
    }
}
