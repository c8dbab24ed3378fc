// crates/globetrotter-core/src/flag.rs

//! Country name → flag emoji, using the admin-0 dataset as the source of
//! ISO codes so no separate country list has to be maintained.

use crate::matcher::NameMatcher;
use crate::model::{GeoFeature, PropertyKeys};

/// Regional-indicator flag for an ISO 3166-1 alpha-2 code.
///
/// ```rust
/// use globetrotter_core::flag::flag_emoji;
///
/// assert_eq!(flag_emoji("jp").as_deref(), Some("🇯🇵"));
/// assert_eq!(flag_emoji("-99"), None);
/// ```
pub fn flag_emoji(iso2: &str) -> Option<String> {
    let code = iso2.trim();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    code.bytes()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b.to_ascii_uppercase() - b'A')))
        .collect()
}

/// ISO alpha-2 code of a feature, skipping placeholders such as `-99`.
pub fn feature_iso2<'f>(keys: &'f PropertyKeys, feature: &'f GeoFeature) -> Option<&'f str> {
    keys.values(feature).find(|v| flag_emoji(v).is_some())
}

/// Flag for `country`, looked up among `features` by name.
///
/// When several features match, the one with the smallest code wins so the
/// answer does not depend on feature order.
pub fn flag_for_country(
    matcher: &NameMatcher<'_>,
    country: &str,
    features: &[GeoFeature],
) -> Option<String> {
    let names = PropertyKeys::country_names();
    let iso = PropertyKeys::iso_alpha2();
    features
        .iter()
        .filter(|f| {
            names
                .first_non_empty(f)
                .is_some_and(|name| matcher.matches(country, name))
        })
        .filter_map(|f| feature_iso2(&iso, f))
        .map(|code| code.trim().to_ascii_uppercase())
        .min()
        .and_then(|code| flag_emoji(&code))
}
