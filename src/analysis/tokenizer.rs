//! Word and sentence segmentation.
//!
//! Word tokens are produced by stripping ASCII punctuation, lower-casing,
//! splitting on Unicode word boundaries (UAX #29) and dropping stop words.
//! Sentences are split on Unicode sentence boundaries, with a best-effort
//! pass that rejoins splits made after common abbreviations.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::Lexicon;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A segment ending in a title abbreviation always runs into the next one.
static TITLE_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[\s(])(?:mr|mrs|ms|dr|prof|rev|capt|lt|col|sgt|mt|gen|gov|sen|rep|vs)\.\s*$")
        .expect("valid regex")
});

/// Abbreviations and initials that may also close a sentence.
static ABBREVIATION_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s(])(?:sr|jr|st|etc|inc|ltd|co|corp|no|fig|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec|[a-z]|(?:[a-z]\.)+[a-z])\.\s*$",
    )
    .expect("valid regex")
});

/// Split `text` into lower-cased word tokens, dropping punctuation and stop words.
///
/// Duplicates and source order are preserved.
pub fn tokenize(text: &str, stop_words: &Lexicon) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect::<String>()
        .to_lowercase();

    cleaned
        .unicode_words()
        .filter(|word| !stop_words.contains(word))
        .map(str::to_string)
        .collect()
}

/// Split `text` into sentences.
///
/// Line breaks do not end a sentence on their own: whitespace runs are
/// collapsed first, so a title without terminal punctuation runs into the
/// first sentence of the body.
pub fn sentences(text: &str) -> Vec<String> {
    let normalized = WHITESPACE.replace_all(text.trim(), " ");

    let mut merged: Vec<String> = Vec::new();
    let mut pending = String::new();
    let mut segments = normalized.unicode_sentences().peekable();
    while let Some(segment) = segments.next() {
        pending.push_str(segment);
        let joins = segments
            .peek()
            .is_some_and(|next| continues_sentence(&pending, next));
        if !joins {
            merged.push(pending.trim_end().to_string());
            pending.clear();
        }
    }
    if !pending.trim().is_empty() {
        merged.push(pending.trim_end().to_string());
    }
    merged
}

/// Whether the boundary between `pending` and `next` sits after an abbreviation.
///
/// Titles such as `Dr.` always continue. Other abbreviations and single
/// letters only continue when `next` starts with a lowercase letter or a digit,
/// so "She got an A. He got a B." still splits.
fn continues_sentence(pending: &str, next: &str) -> bool {
    if TITLE_TAIL.is_match(pending) {
        return true;
    }
    ABBREVIATION_TAIL.is_match(pending)
        && next
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit())
}
