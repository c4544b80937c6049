//! Option model for the picker.
//!
//! The host supplies raw option strings; [`OptionSet`] canonicalizes them
//! into the ordered sequence the rest of the engine works against. An
//! option's only identity is its index in that sequence.

/// Normalize a single value the way options are normalized: surrounding
/// whitespace trimmed, then lowercased.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Format normalized option text for display: only the first character is
/// uppercased. Multi-word options keep later words lowercase.
pub fn display_text(normalized: &str) -> String {
    let mut chars = normalized.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The canonical, ordered set of selectable options.
///
/// Built from a raw host-supplied list by trimming and lowercasing each
/// entry, then sorting ascending. Ordering is deterministic for a given
/// raw input. Duplicates are kept: two options with the same normalized
/// text are independently selectable and are told apart only by index.
///
/// The raw input is memoized so [`rebuild_if_changed`](Self::rebuild_if_changed)
/// can skip re-normalization when the host re-supplies identical content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    /// Normalized entries, sorted ascending.
    entries: Vec<String>,
    /// The raw input the entries were derived from.
    raw: Vec<String>,
}

impl OptionSet {
    /// Create an option set from raw host-supplied values.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = raw.into_iter().map(Into::into).collect();
        let entries = Self::normalize_all(&raw);
        Self { entries, raw }
    }

    /// Create an empty option set.
    pub fn empty() -> Self {
        Self::default()
    }

    fn normalize_all(raw: &[String]) -> Vec<String> {
        let mut entries: Vec<String> = raw.iter().map(|v| normalize(v)).collect();
        // Entries are already lowercase, so a plain sort is the
        // case-insensitive lexicographic order the widget presents.
        entries.sort();
        entries
    }

    /// Rebuild from new raw values if they differ from the memoized input.
    ///
    /// Returns `true` if a rebuild happened.
    pub fn rebuild_if_changed(&mut self, raw: &[String]) -> bool {
        if self.raw == raw {
            return false;
        }
        self.raw = raw.to_vec();
        self.entries = Self::normalize_all(&self.raw);
        true
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set is empty.
    ///
    /// An empty set is a valid state, not an error: the widget still opens
    /// and closes, it just has nothing to select.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The normalized text at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// The last valid index, or `None` for an empty set.
    pub fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// Iterate over the normalized entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Find the option exactly matching an external value.
    ///
    /// An absent or empty value never matches. Otherwise the value is
    /// normalized (trim + lowercase) and compared for exact equality;
    /// the first matching index wins.
    pub fn find_exact(&self, value: &str) -> Option<usize> {
        if value.is_empty() {
            return None;
        }
        let needle = normalize(value);
        self.entries.iter().position(|entry| *entry == needle)
    }

    /// Find the first option whose normalized text starts with `ch`
    /// (case-insensitive). Used for typeahead.
    pub fn find_prefix(&self, ch: char) -> Option<usize> {
        let needle = ch.to_ascii_lowercase();
        self.entries
            .iter()
            .position(|entry| entry.starts_with(needle))
    }

    /// The display text for the option at `index`.
    pub fn display_text(&self, index: usize) -> Option<String> {
        self.get(index).map(display_text)
    }
}

impl From<Vec<String>> for OptionSet {
    fn from(raw: Vec<String>) -> Self {
        Self::new(raw)
    }
}

impl From<Vec<&str>> for OptionSet {
    fn from(raw: Vec<&str>) -> Self {
        Self::new(raw)
    }
}

impl<const N: usize> From<[&str; N]> for OptionSet {
    fn from(raw: [&str; N]) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_and_sorted() {
        let set = OptionSet::from(["  Kiwi ", "APPLE", "banana"]);
        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, vec!["apple", "banana", "kiwi"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let set = OptionSet::from(["Apple", " apple ", "banana"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0), Some("apple"));
        assert_eq!(set.get(1), Some("apple"));
        // The first duplicate wins exact lookup.
        assert_eq!(set.find_exact("APPLE"), Some(0));
    }

    #[test]
    fn test_find_exact_normalizes_the_needle() {
        let set = OptionSet::from(["apple", "banana", "kiwi"]);
        assert_eq!(set.find_exact("  BaNaNa  "), Some(1));
        assert_eq!(set.find_exact("cherry"), None);
        assert_eq!(set.find_exact(""), None);
    }

    #[test]
    fn test_whitespace_only_value_matches_empty_option() {
        // A whitespace-only value is non-empty, trims to "", and can match
        // an option that normalized to the empty string.
        let set = OptionSet::from(["   ", "apple"]);
        assert_eq!(set.get(0), Some(""));
        assert_eq!(set.find_exact("  "), Some(0));
    }

    #[test]
    fn test_find_prefix() {
        let set = OptionSet::from(["apple", "banana", "kiwi"]);
        assert_eq!(set.find_prefix('b'), Some(1));
        assert_eq!(set.find_prefix('B'), Some(1));
        assert_eq!(set.find_prefix('z'), None);
    }

    #[test]
    fn test_display_text_capitalizes_first_char_only() {
        assert_eq!(display_text("kiwi"), "Kiwi");
        assert_eq!(display_text("passion fruit"), "Passion fruit");
        assert_eq!(display_text(""), "");
    }

    #[test]
    fn test_rebuild_memoization() {
        let raw = vec!["b".to_string(), "a".to_string()];
        let mut set = OptionSet::new(raw.clone());
        assert!(!set.rebuild_if_changed(&raw));

        let changed = vec!["c".to_string(), "a".to_string()];
        assert!(set.rebuild_if_changed(&changed));
        let entries: Vec<&str> = set.iter().collect();
        assert_eq!(entries, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_set_is_valid() {
        let set = OptionSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.last_index(), None);
        assert_eq!(set.find_exact("anything"), None);
        assert_eq!(set.find_prefix('a'), None);
    }
}
