use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two names the way a dictionary would: spaces, punctuation and
/// symbols sort before digits, digits before letters, accents and case only
/// break ties between otherwise equal names, and at a case tie the lowercase
/// letter sorts first. The ordering is total; only identical strings compare
/// equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| folded(a).cmp(&folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// Decomposed, accent-stripped, lowercased form, each character tagged with
/// its class so every non-letter ranks below every letter.
fn base_letters(s: &str) -> Vec<(u8, char)> {
    s.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .map(|ch| (char_class(ch), ch))
        .collect()
}

fn char_class(ch: char) -> u8 {
    if ch.is_whitespace() {
        0
    } else if ch.is_numeric() {
        2
    } else if ch.is_alphabetic() {
        3
    } else {
        1
    }
}

/// Decomposed and lowercased, accents kept.
fn folded(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_at_primary_level() {
        assert_eq!(compare_names("abu", "Hari"), Ordering::Less);
        assert_eq!(compare_names("Zed", "alpha"), Ordering::Greater);
    }

    #[test]
    fn lowercase_first_on_case_tie() {
        assert_eq!(compare_names("mani", "Mani"), Ordering::Less);
        assert_eq!(compare_names("Mani", "mani"), Ordering::Greater);
    }

    #[test]
    fn accents_break_ties_only() {
        assert_eq!(compare_names("Élan", "Emma"), Ordering::Less);
        assert_eq!(compare_names("Elan", "Élan"), Ordering::Less);
    }

    #[test]
    fn symbols_and_digits_sort_before_letters() {
        assert_eq!(compare_names("Mani~", "Mania"), Ordering::Less);
        assert_eq!(compare_names("Mani{", "Mani1"), Ordering::Less);
        assert_eq!(compare_names("Mani1", "Mania"), Ordering::Less);
        assert_eq!(compare_names("Mani Raj", "Mani-Raj"), Ordering::Less);
        assert_eq!(compare_names("Mani", "Mani~"), Ordering::Less);
    }

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(compare_names("Manoj", "Manoj"), Ordering::Equal);
    }
}
