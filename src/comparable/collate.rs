//! Locale-aware text collation.
//!
//! Text is compared in up to three passes, each one only consulted when the
//! previous pass found the strings equal:
//!
//! 1. **Primary**: base letters. Case and diacritics are ignored, so `"a"`,
//!    `"A"` and `"á"` are all equal. Whitespace sorts before punctuation,
//!    punctuation before digits, digits before letters.
//! 2. **Secondary**: diacritics. Unaccented letters come before accented ones.
//! 3. **Tertiary**: case. Lowercase comes before uppercase.
//!
//! This yields the familiar dictionary order `a < A < á < b`, rather than
//! the code point order `A < a < b < á`.
//!
//! Diacritic folding covers the Latin-1 Supplement and Latin Extended-A
//! blocks, the ligatures `ß`, `æ` and `œ`, and combining marks
//! (`U+0300..=U+036F`). Other scripts are ordered by code point at the
//! primary level.
//!
//! # Examples
//!
//! ```rust
//! use sortkit::comparable::collate::{compare, compare_text, Strength};
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("a", "á", Strength::Primary), Ordering::Equal);
//! assert_eq!(compare("a", "á", Strength::Secondary), Ordering::Less);
//! assert_eq!(compare("a", "A", Strength::Tertiary), Ordering::Less);
//!
//! let mut words = vec!["b", "á", "A", "a"];
//! words.sort_by(|left, right| compare_text(left, right));
//! assert_eq!(words, vec!["a", "A", "á", "b"]);
//! ```

use smallvec::SmallVec;
use std::cmp::Ordering;

/// Which differences between two strings a comparison takes into account.
///
/// Strengths are cumulative: `Secondary` also considers everything
/// `Primary` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Strength {
    /// Base letters only; ignores diacritics and case.
    Primary,
    /// Base letters and diacritics; ignores case.
    Secondary,
    /// Base letters, diacritics and case.
    #[default]
    Tertiary,
}

/// Character class at the primary level, in collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharacterClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
}

type PrimaryWeight = (CharacterClass, char);

#[derive(Debug, Clone, Copy)]
struct CollationKey {
    /// `None` for combining marks, which carry no base letter.
    primary: Option<PrimaryWeight>,
    secondary: u8,
    tertiary: u8,
}

const NO_ACCENT: u8 = 0;
const ACUTE: u8 = 1;
const GRAVE: u8 = 2;
const CIRCUMFLEX: u8 = 3;
const DIAERESIS: u8 = 4;
const TILDE: u8 = 5;
const RING: u8 = 6;
const CEDILLA: u8 = 7;
const CARON: u8 = 8;
const MACRON: u8 = 9;
const BREVE: u8 = 10;
const OGONEK: u8 = 11;
const DOT: u8 = 12;
const STROKE: u8 = 13;
const DOUBLE_ACUTE: u8 = 14;
const LIGATURE: u8 = 15;
const COMBINING_BASE: u8 = 32;

/// Compares two strings at the given strength.
///
/// Strings that differ only in ways the strength ignores compare as
/// [`Ordering::Equal`].
///
/// # Examples
///
/// ```rust
/// use sortkit::comparable::collate::{compare, Strength};
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("Résumé", "resume", Strength::Primary), Ordering::Equal);
/// assert_eq!(compare("resume", "Résumé", Strength::Secondary), Ordering::Less);
/// ```
#[must_use]
pub fn compare(left: &str, right: &str, strength: Strength) -> Ordering {
    let left_keys: SmallVec<[CollationKey; 16]> = collation_keys(left).collect();
    let right_keys: SmallVec<[CollationKey; 16]> = collation_keys(right).collect();

    let primary = left_keys
        .iter()
        .filter_map(|key| key.primary)
        .cmp(right_keys.iter().filter_map(|key| key.primary));
    if primary != Ordering::Equal || strength == Strength::Primary {
        return primary;
    }

    let secondary = left_keys
        .iter()
        .map(|key| key.secondary)
        .cmp(right_keys.iter().map(|key| key.secondary));
    if secondary != Ordering::Equal || strength == Strength::Secondary {
        return secondary;
    }

    left_keys
        .iter()
        .map(|key| key.tertiary)
        .cmp(right_keys.iter().map(|key| key.tertiary))
}

/// Compares two strings as text, the ordering used by the text adapters of
/// [`Comparable`](super::Comparable).
///
/// This is a [`Strength::Tertiary`] comparison with a final tie-break on
/// code points, so only identical strings compare as equal.
#[must_use]
pub fn compare_text(left: &str, right: &str) -> Ordering {
    compare(left, right, Strength::Tertiary).then_with(|| left.cmp(right))
}

/// Returns `true` if the two strings are equal at the given strength.
#[must_use]
pub fn equivalent(left: &str, right: &str, strength: Strength) -> bool {
    compare(left, right, strength) == Ordering::Equal
}

fn collation_keys(text: &str) -> impl Iterator<Item = CollationKey> + '_ {
    text.chars().flat_map(character_keys)
}

fn character_keys(character: char) -> SmallVec<[CollationKey; 2]> {
    let tertiary = u8::from(character.is_uppercase());
    let mut keys = SmallVec::new();

    for lowered in character.to_lowercase() {
        if let Some(weight) = combining_weight(lowered) {
            keys.push(CollationKey {
                primary: None,
                secondary: weight,
                tertiary: 0,
            });
            continue;
        }

        if let Some((first, second)) = expansion(lowered) {
            keys.push(base_key(first, LIGATURE, tertiary));
            keys.push(base_key(second, LIGATURE, tertiary));
            continue;
        }

        let (base, accent) = fold(lowered);
        keys.push(base_key(base, accent, tertiary));
    }

    keys
}

fn base_key(base: char, secondary: u8, tertiary: u8) -> CollationKey {
    CollationKey {
        primary: Some((classify(base), base)),
        secondary,
        tertiary,
    }
}

fn classify(character: char) -> CharacterClass {
    if character.is_whitespace() {
        CharacterClass::Whitespace
    } else if character.is_numeric() {
        CharacterClass::Digit
    } else if character.is_alphabetic() {
        CharacterClass::Letter
    } else {
        CharacterClass::Symbol
    }
}

fn combining_weight(character: char) -> Option<u8> {
    let offset = u32::from(character).checked_sub(0x0300)?;
    if offset > 0x6F {
        return None;
    }
    // offset <= 0x6F, fits in u8 with the base added
    u8::try_from(offset).ok().map(|offset| COMBINING_BASE + offset)
}

const fn expansion(character: char) -> Option<(char, char)> {
    match character {
        'ß' => Some(('s', 's')),
        'æ' => Some(('a', 'e')),
        'œ' => Some(('o', 'e')),
        _ => None,
    }
}

/// Splits a lowercase Latin letter into its base letter and accent weight.
#[allow(clippy::too_many_lines, clippy::match_same_arms)]
const fn fold(character: char) -> (char, u8) {
    match character {
        // Latin-1 Supplement
        'à' => ('a', GRAVE),
        'á' => ('a', ACUTE),
        'â' => ('a', CIRCUMFLEX),
        'ã' => ('a', TILDE),
        'ä' => ('a', DIAERESIS),
        'å' => ('a', RING),
        'ç' => ('c', CEDILLA),
        'è' => ('e', GRAVE),
        'é' => ('e', ACUTE),
        'ê' => ('e', CIRCUMFLEX),
        'ë' => ('e', DIAERESIS),
        'ì' => ('i', GRAVE),
        'í' => ('i', ACUTE),
        'î' => ('i', CIRCUMFLEX),
        'ï' => ('i', DIAERESIS),
        'ñ' => ('n', TILDE),
        'ò' => ('o', GRAVE),
        'ó' => ('o', ACUTE),
        'ô' => ('o', CIRCUMFLEX),
        'õ' => ('o', TILDE),
        'ö' => ('o', DIAERESIS),
        'ø' => ('o', STROKE),
        'ù' => ('u', GRAVE),
        'ú' => ('u', ACUTE),
        'û' => ('u', CIRCUMFLEX),
        'ü' => ('u', DIAERESIS),
        'ý' => ('y', ACUTE),
        'ÿ' => ('y', DIAERESIS),
        // Latin Extended-A
        'ā' => ('a', MACRON),
        'ă' => ('a', BREVE),
        'ą' => ('a', OGONEK),
        'ć' => ('c', ACUTE),
        'ĉ' => ('c', CIRCUMFLEX),
        'ċ' => ('c', DOT),
        'č' => ('c', CARON),
        'ď' => ('d', CARON),
        'đ' => ('d', STROKE),
        'ē' => ('e', MACRON),
        'ĕ' => ('e', BREVE),
        'ė' => ('e', DOT),
        'ę' => ('e', OGONEK),
        'ě' => ('e', CARON),
        'ĝ' => ('g', CIRCUMFLEX),
        'ğ' => ('g', BREVE),
        'ġ' => ('g', DOT),
        'ģ' => ('g', CEDILLA),
        'ĥ' => ('h', CIRCUMFLEX),
        'ħ' => ('h', STROKE),
        'ĩ' => ('i', TILDE),
        'ī' => ('i', MACRON),
        'ĭ' => ('i', BREVE),
        'į' => ('i', OGONEK),
        'ĵ' => ('j', CIRCUMFLEX),
        'ķ' => ('k', CEDILLA),
        'ĺ' => ('l', ACUTE),
        'ļ' => ('l', CEDILLA),
        'ľ' => ('l', CARON),
        'ł' => ('l', STROKE),
        'ń' => ('n', ACUTE),
        'ņ' => ('n', CEDILLA),
        'ň' => ('n', CARON),
        'ō' => ('o', MACRON),
        'ŏ' => ('o', BREVE),
        'ő' => ('o', DOUBLE_ACUTE),
        'ŕ' => ('r', ACUTE),
        'ŗ' => ('r', CEDILLA),
        'ř' => ('r', CARON),
        'ś' => ('s', ACUTE),
        'ŝ' => ('s', CIRCUMFLEX),
        'ş' => ('s', CEDILLA),
        'š' => ('s', CARON),
        'ţ' => ('t', CEDILLA),
        'ť' => ('t', CARON),
        'ŧ' => ('t', STROKE),
        'ũ' => ('u', TILDE),
        'ū' => ('u', MACRON),
        'ŭ' => ('u', BREVE),
        'ů' => ('u', RING),
        'ű' => ('u', DOUBLE_ACUTE),
        'ų' => ('u', OGONEK),
        'ŵ' => ('w', CIRCUMFLEX),
        'ŷ' => ('y', CIRCUMFLEX),
        'ź' => ('z', ACUTE),
        'ż' => ('z', DOT),
        'ž' => ('z', CARON),
        other => (other, NO_ACCENT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", "b", Ordering::Less)]
    #[case("a", "A", Ordering::Equal)]
    #[case("a", "á", Ordering::Equal)]
    #[case("Straße", "strasse", Ordering::Equal)]
    #[case("Æsir", "aesir", Ordering::Equal)]
    #[case("e\u{301}", "é", Ordering::Equal)]
    #[case("zebra", "Zürich", Ordering::Less)]
    #[case("", "a", Ordering::Less)]
    fn test_primary_strength(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare(left, right, Strength::Primary), expected);
    }

    #[rstest]
    #[case("a", "á", Ordering::Less)]
    #[case("á", "à", Ordering::Less)]
    #[case("a", "A", Ordering::Equal)]
    #[case("cote", "côte", Ordering::Less)]
    fn test_secondary_strength(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare(left, right, Strength::Secondary), expected);
    }

    #[rstest]
    #[case("a", "A", Ordering::Less)]
    #[case("A", "á", Ordering::Less)]
    #[case("foo", "Foo", Ordering::Less)]
    fn test_tertiary_strength(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare(left, right, Strength::Tertiary), expected);
    }

    #[rstest]
    fn test_character_classes_order() {
        assert_eq!(compare(" ", "-", Strength::Primary), Ordering::Less);
        assert_eq!(compare("-", "1", Strength::Primary), Ordering::Less);
        assert_eq!(compare("9", "a", Strength::Primary), Ordering::Less);
    }

    #[rstest]
    fn test_compare_text_is_equal_only_for_identical_strings() {
        assert_eq!(compare_text("foo", "foo"), Ordering::Equal);
        // Precomposed and decomposed forms differ at the code point tie-break
        assert_ne!(compare_text("é", "e\u{301}"), Ordering::Equal);
    }

    #[rstest]
    fn test_compare_text_sorts_dictionary_order() {
        let mut words = vec!["qux", "Bar", "baz", "éclair", "eclair", "foo"];
        words.sort_by(|left, right| compare_text(left, right));
        assert_eq!(words, vec!["Bar", "baz", "eclair", "éclair", "foo", "qux"]);
    }

    #[rstest]
    fn test_equivalent() {
        assert!(equivalent("ÉCOLE", "ecole", Strength::Primary));
        assert!(!equivalent("ÉCOLE", "ecole", Strength::Secondary));
    }

    #[rstest]
    fn test_default_strength_is_tertiary() {
        assert_eq!(Strength::default(), Strength::Tertiary);
    }

    #[rstest]
    #[case("α", "β", Ordering::Less)]
    #[case("Ω", "ω", Ordering::Equal)]
    #[case("я", "а", Ordering::Greater)]
    #[case("z", "α", Ordering::Less)]
    fn test_other_scripts_use_code_points_at_primary_strength(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare(left, right, Strength::Primary), expected);
    }
}
