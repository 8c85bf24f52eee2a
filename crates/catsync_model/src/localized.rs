//! Locale-keyed text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from locale code to text.
///
/// Equality for diffing purposes is structural over the *normalized* view:
/// two localized strings match iff they carry the same locales with equal,
/// non-empty text per locale. An entry whose text is empty is equivalent to
/// the locale being absent, so `{"en": ""}` and `{}` do not differ.
///
/// The raw `PartialEq` derive compares entries verbatim; diffing code must go
/// through [`LocalizedString::eq_normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(BTreeMap<String, String>);

impl LocalizedString {
    /// Creates an empty localized string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a localized string with a single locale entry.
    pub fn of(locale: impl Into<String>, text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(locale.into(), text.into());
        Self(map)
    }

    /// Sets the text for a locale, returning self for chaining.
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Returns the text for a locale, if present.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Returns the number of raw entries, including empty-text ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no raw entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if every entry has empty text (or there are none).
    ///
    /// A localized string that is empty under normalization is treated as
    /// absent by the differs.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|text| text.is_empty())
    }

    /// Iterates the normalized entries: locales with non-empty text, in
    /// locale order.
    pub fn normalized(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(locale, text)| (locale.as_str(), text.as_str()))
    }

    /// Structural equality over the normalized view.
    pub fn eq_normalized(&self, other: &LocalizedString) -> bool {
        self.normalized().eq(other.normalized())
    }
}

impl FromIterator<(String, String)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Normalized equality over optional localized strings.
///
/// `None` is equivalent to an empty (or all-blank) localized string.
pub fn opt_eq_normalized(a: Option<&LocalizedString>, b: Option<&LocalizedString>) -> bool {
    static EMPTY: LocalizedString = LocalizedString(BTreeMap::new());
    let a = a.unwrap_or(&EMPTY);
    let b = b.unwrap_or(&EMPTY);
    a.eq_normalized(b)
}
