//! Heuristic syllable counting.

const VOWELS: &str = "aeiouy";

/// Approximate the number of syllables in `word`.
///
/// Each maximal run of vowels (`a e i o u y`, any case) counts once. A
/// trailing `e` is treated as silent, except in a trailing `le`. The result
/// is never less than one.
pub fn syllable_count(word: &str) -> usize {
    let mut count = 0usize;
    let mut last_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(c.to_ascii_lowercase());
        if is_vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = is_vowel;
    }

    // A word ending in `e` has at least one vowel run, so this cannot underflow.
    if word.ends_with('e') {
        count -= 1;
    }
    if word.ends_with("le") {
        count += 1;
    }
    count.max(1)
}

/// Whether `word` counts as complex for readability scoring.
pub fn is_complex(word: &str) -> bool {
    syllable_count(word) > 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_e() {
        assert_eq!(syllable_count("the"), 1);
        // runs "ea" and "e" give 2, the trailing e takes one away
        assert_eq!(syllable_count("create"), 1);
        assert_eq!(syllable_count("make"), 1);
    }

    #[test]
    fn test_trailing_le() {
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("le"), 1);
        assert_eq!(syllable_count("possible"), 3);
    }

    #[test]
    fn test_vowel_runs() {
        assert_eq!(syllable_count("queue"), 1);
        assert_eq!(syllable_count("beautiful"), 3);
        assert_eq!(syllable_count("rhythm"), 1);
        assert_eq!(syllable_count("Yesterday"), 3);
    }

    #[test]
    fn test_minimum_one() {
        assert_eq!(syllable_count("e"), 1);
        assert_eq!(syllable_count("hmm"), 1);
        assert_eq!(syllable_count(""), 1);
        assert_eq!(syllable_count("2024"), 1);
    }

    #[test]
    fn test_is_complex() {
        assert!(is_complex("beautiful"));
        assert!(is_complex("investigation"));
        assert!(!is_complex("table"));
        assert!(!is_complex("market"));
    }
}
