//! Sentiment, readability and word-level metrics for one article.
//!
//! [`analyze`] is a pure function of the raw text and the run's
//! [`Lexicons`]; it never fails. Denominators that can be zero are either
//! offset by [`EPSILON`] (sentiment ratios) or checked (averages), so every
//! field of the result is finite.

use crate::analysis::syllables::{is_complex, syllable_count};
use crate::analysis::tokenizer::{sentences, tokenize};
use crate::lexicon::{Lexicon, Lexicons};
use crate::models::ArticleMetrics;

/// Offset added to sentiment denominators.
pub const EPSILON: f64 = 0.000001;

/// Tokens counted as personal pronouns. Matched as whole tokens only.
pub const PERSONAL_PRONOUNS: [&str; 5] = ["i", "we", "my", "ours", "us"];

/// Sentiment scores derived from positive and negative word counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub positive: usize,
    pub negative: usize,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Readability indices derived from sentence and complex-word counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readability {
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
}

/// Compute the full metric set for `raw_text`.
pub fn analyze(raw_text: &str, lexicons: &Lexicons) -> ArticleMetrics {
    let tokens = tokenize(raw_text, &lexicons.stop_words);
    let sentence_count = sentences(raw_text).len();

    let sentiment = sentiment(&tokens, &lexicons.positive, &lexicons.negative);
    let readability = readability(&tokens, sentence_count);

    let word_count = tokens.len();
    let total_syllables: usize = tokens.iter().map(|t| syllable_count(t)).sum();
    let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();

    ArticleMetrics {
        positive_score: sentiment.positive,
        negative_score: sentiment.negative,
        polarity_score: sentiment.polarity,
        subjectivity_score: sentiment.subjectivity,
        avg_sentence_length: readability.avg_sentence_length,
        percentage_complex_words: readability.percentage_complex_words,
        fog_index: readability.fog_index,
        avg_words_per_sentence: readability.avg_words_per_sentence,
        complex_word_count: readability.complex_word_count,
        word_count,
        syllables_per_word: ratio(total_syllables, word_count),
        personal_pronouns: personal_pronoun_count(&tokens),
        avg_word_length: ratio(total_chars, word_count),
    }
}

/// Count sentiment words among `tokens` and derive polarity and subjectivity.
///
/// # Returns
///
/// Polarity in `[-1, 1]` and, for disjoint word lists, subjectivity in
/// `[0, 1]`. Both are zero when no token matches.
pub fn sentiment(tokens: &[String], positive: &Lexicon, negative: &Lexicon) -> Sentiment {
    let pos = tokens.iter().filter(|t| positive.contains(t)).count();
    let neg = tokens.iter().filter(|t| negative.contains(t)).count();
    let (p, n) = (pos as f64, neg as f64);

    Sentiment {
        positive: pos,
        negative: neg,
        polarity: (p - n) / (p + n + EPSILON),
        subjectivity: (p + n) / (tokens.len() as f64 + EPSILON),
    }
}

/// Average sentence length, complex-word share and Fog index.
///
/// # Arguments
///
/// * `tokens` - Filtered word tokens of the article
/// * `sentence_count` - Number of sentences in the raw text
pub fn readability(tokens: &[String], sentence_count: usize) -> Readability {
    let complex_word_count = tokens.iter().filter(|t| is_complex(t)).count();
    let avg_sentence_length = ratio(tokens.len(), sentence_count);
    let percentage_complex_words = 100.0 * ratio(complex_word_count, tokens.len());

    Readability {
        avg_sentence_length,
        percentage_complex_words,
        fog_index: 0.4 * (avg_sentence_length + percentage_complex_words),
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
    }
}

/// Count tokens equal to one of [`PERSONAL_PRONOUNS`], ignoring ASCII case.
pub fn personal_pronoun_count(tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| {
            PERSONAL_PRONOUNS
                .iter()
                .any(|p| t.eq_ignore_ascii_case(p))
        })
        .count()
}

/// `num / den`, or zero when `den` is zero.
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
