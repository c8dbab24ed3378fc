// crates/globetrotter-core/src/alias.rs

//! # Alias Table
//!
//! Known synonyms for place names: official vs. common country names,
//! renamed countries, demonym variants and a few special cases.
//!
//! Entries are authored as explicit `(from, to)` pairs. Nothing is
//! auto-inverted: some directions are one-way on purpose and reciprocal
//! pairs are written twice. Lookup is a single hop. Because reciprocal
//! entries form two-element cycles, callers never chase aliases to a fixed
//! point; [`crate::matcher`] applies at most one extra pass.

use crate::text::fold_key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in alias pairs, keyed by folded (trimmed, ASCII, lowercase) name.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    // United States: "usa" and friends land on the short name, which in turn
    // is reciprocal with the official name used by Natural Earth.
    ("usa", "united states"),
    ("u.s.a.", "united states"),
    ("us", "united states"),
    ("u.s.", "united states"),
    ("america", "united states"),
    ("united states", "united states of america"),
    ("united states of america", "united states"),
    // United Kingdom
    ("uk", "united kingdom"),
    ("u.k.", "united kingdom"),
    ("britain", "united kingdom"),
    ("great britain", "united kingdom"),
    ("united kingdom of great britain and northern ireland", "united kingdom"),
    // Renamed countries
    ("czech republic", "czechia"),
    ("czechia", "czech republic"),
    ("russian federation", "russia"),
    ("burma", "myanmar"),
    ("swaziland", "eswatini"),
    ("kingdom of eswatini", "eswatini"),
    ("macedonia", "north macedonia"),
    ("republic of north macedonia", "north macedonia"),
    ("turkiye", "turkey"),
    ("republic of turkiye", "turkey"),
    ("cape verde", "cabo verde"),
    ("cabo verde", "cape verde"),
    ("east timor", "timor-leste"),
    ("timor-leste", "east timor"),
    ("cote d'ivoire", "ivory coast"),
    ("holland", "netherlands"),
    ("the netherlands", "netherlands"),
    // Official long forms
    ("republic of korea", "south korea"),
    ("korea, republic of", "south korea"),
    ("korea", "south korea"),
    ("democratic people's republic of korea", "north korea"),
    ("dprk", "north korea"),
    ("viet nam", "vietnam"),
    ("lao pdr", "laos"),
    ("lao people's democratic republic", "laos"),
    ("syrian arab republic", "syria"),
    ("islamic republic of iran", "iran"),
    ("iran, islamic republic of", "iran"),
    ("united republic of tanzania", "tanzania"),
    ("tanzania", "united republic of tanzania"),
    ("uae", "united arab emirates"),
    ("the bahamas", "bahamas"),
    ("the gambia", "gambia"),
    ("bosnia", "bosnia and herzegovina"),
    // Congo: both states are "Congo" colloquially; the bare name goes to Brazzaville.
    ("congo", "republic of the congo"),
    ("congo-brazzaville", "republic of the congo"),
    ("republic of congo", "republic of the congo"),
    ("drc", "democratic republic of the congo"),
    ("dr congo", "democratic republic of the congo"),
    ("congo-kinshasa", "democratic republic of the congo"),
    ("democratic republic of congo", "democratic republic of the congo"),
    // Special cases
    ("vatican city", "vatican"),
    ("vatican city state", "vatican"),
    ("holy see", "vatican"),
    ("the holy see", "vatican"),
];

static DEFAULT_TABLE: Lazy<AliasTable> = Lazy::new(|| AliasTable::from_pairs(DEFAULT_ALIASES));

/// Immutable `folded name -> folded name` lookup.
///
/// Build it once and lend it to the matcher; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// The built-in table.
    pub fn builtin() -> &'static AliasTable {
        &DEFAULT_TABLE
    }

    /// An empty table: normalization degrades to [`fold_key`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from authored pairs. Both sides are folded so lookups
    /// agree with [`fold_key`]; later duplicates of a key win.
    pub fn from_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(from, to)| (fold_key(from.as_ref()), fold_key(to.as_ref())))
            .filter(|(from, to)| !from.is_empty() && !to.is_empty())
            .collect();
        Self { entries }
    }

    /// Returns a copy of this table extended with `extra` pairs.
    pub fn extended_with<S: AsRef<str>>(&self, extra: &[(S, S)]) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(Self::from_pairs(extra).entries);
        Self { entries }
    }

    /// Single-hop lookup of an already folded key.
    pub fn lookup(&self, folded: &str) -> Option<&str> {
        self.entries.get(folded).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonicalize a raw place name: fold, then apply at most one alias hop.
    ///
    /// Total over all strings; blank input yields `""`.
    ///
    /// ```rust
    /// use globetrotter_core::alias::AliasTable;
    ///
    /// let aliases = AliasTable::builtin();
    /// assert_eq!(aliases.normalize("  Britain "), "united kingdom");
    /// assert_eq!(aliases.normalize("Peru"), "peru");
    /// assert_eq!(aliases.normalize(""), "");
    /// ```
    pub fn normalize(&self, raw: &str) -> String {
        let folded = fold_key(raw);
        if folded.is_empty() {
            return folded;
        }
        match self.lookup(&folded) {
            Some(target) => target.to_string(),
            None => folded,
        }
    }

    /// Grouping key for deduplication: the smaller of the first two
    /// canonical forms. Reciprocal pairs such as "united states" /
    /// "united states of america" therefore share one key.
    ///
    /// ```rust
    /// use globetrotter_core::alias::AliasTable;
    ///
    /// let t = AliasTable::builtin();
    /// assert_eq!(t.dedup_key("USA"), t.dedup_key("United States of America"));
    /// ```
    pub fn dedup_key(&self, raw: &str) -> String {
        let first = self.normalize(raw);
        if first.is_empty() {
            return first;
        }
        let second = self.normalize(&first);
        std::cmp::min(first, second)
    }

    /// [`AliasTable::normalize`] over an optional input; `None` is `""`.
    pub fn normalize_opt(&self, raw: Option<&str>) -> String {
        raw.map(|r| self.normalize(r)).unwrap_or_default()
    }
}

/// Canonicalize `raw` against the built-in alias table.
pub fn normalize(raw: &str) -> String {
    AliasTable::builtin().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_entries_are_folded() {
        for (from, to) in DEFAULT_ALIASES {
            assert_eq!(fold_key(from), *from, "key {from:?} is not folded");
            assert_eq!(fold_key(to), *to, "value {to:?} is not folded");
        }
    }

    #[test]
    fn lookup_is_single_hop() {
        let t = AliasTable::builtin();
        // usa -> united states, and united states itself has an alias,
        // but only one hop is taken.
        assert_eq!(t.normalize("USA"), "united states");
        assert_eq!(t.normalize("united states"), "united states of america");
    }

    #[test]
    fn reciprocal_pairs_cycle_with_period_two() {
        let t = AliasTable::builtin();
        let once = t.normalize("Czechia");
        let twice = t.normalize(&once);
        assert_eq!(once, "czech republic");
        assert_eq!(twice, "czechia");
    }

    #[test]
    fn one_way_entries_are_not_inverted() {
        let t = AliasTable::builtin();
        assert_eq!(t.normalize("Burma"), "myanmar");
        assert_eq!(t.normalize("Myanmar"), "myanmar");
    }

    #[test]
    fn dedup_key_joins_reciprocal_pairs() {
        let t = AliasTable::builtin();
        assert_eq!(t.dedup_key("Czechia"), t.dedup_key("Czech Republic"));
        assert_eq!(t.dedup_key("us"), "united states");
        assert_eq!(t.dedup_key("Peru"), "peru");
        assert_eq!(t.dedup_key(" "), "");
    }

    #[test]
    fn normalize_opt_handles_absent_input() {
        assert_eq!(AliasTable::builtin().normalize_opt(None), "");
        assert_eq!(AliasTable::builtin().normalize_opt(Some(" UK ")), "united kingdom");
    }

    #[test]
    fn extended_table_overrides_and_adds() {
        let t = AliasTable::builtin().extended_with(&[("Blighty", "United Kingdom")]);
        assert_eq!(t.normalize("blighty"), "united kingdom");
        assert_eq!(t.len(), AliasTable::builtin().len() + 1);
    }

    #[test]
    fn empty_table_only_folds() {
        let t = AliasTable::empty();
        assert!(t.is_empty());
        assert_eq!(t.normalize(" UK "), "uk");
    }
}
