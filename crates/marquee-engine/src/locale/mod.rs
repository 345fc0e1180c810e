//! Language selection for localized creatives.
//!
//! Creatives ship a fixed set of localized copy; the host reports the user's
//! preferred languages. Selection is lenient: case-insensitive, falls back
//! from a regional tag to its primary subtag, and finally to English.

pub const FALLBACK_LANGUAGE: &str = "en";

/// Picks the language to render with.
///
/// The candidate is the first non-empty entry of `preferred`, lowercased.
/// If `available` lacks it, the bare primary subtag is tried (`pt-br` → `pt`)
/// before falling back to [`FALLBACK_LANGUAGE`].
pub fn select_language(preferred: &[&str], available: &[&str]) -> String {
    let Some(candidate) = preferred
        .iter()
        .find(|lang| !lang.is_empty())
        .map(|lang| lang.to_ascii_lowercase())
    else {
        return FALLBACK_LANGUAGE.to_string();
    };

    if available.contains(&candidate.as_str()) {
        return candidate;
    }

    if let Some((primary, _)) = candidate.split_once('-') {
        if available.contains(&primary) {
            return primary.to_string();
        }
    }

    FALLBACK_LANGUAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(select_language(&["de", "en"], &["en", "de"]), "de");
    }

    #[test]
    fn regional_tag_falls_back_to_primary_subtag() {
        assert_eq!(select_language(&["pt-BR"], &["pt", "en"]), "pt");
    }

    #[test]
    fn unavailable_language_falls_back_to_english() {
        assert_eq!(select_language(&["ja"], &["en", "de"]), "en");
    }

    #[test]
    fn empty_entries_are_skipped() {
        assert_eq!(select_language(&["", "FR"], &["fr", "en"]), "fr");
        assert_eq!(select_language(&[], &["en"]), "en");
    }
}
