//! Data models for articles and their computed metrics.
//!
//! - [`InputRecord`]: one row of the input table (`URL_ID`, `URL`)
//! - [`ExtractedArticle`]: title and body scraped from a web page
//! - [`Article`]: the stored plain text of an article, keyed by identifier
//! - [`ArticleMetrics`]: the fixed metric set computed for one article
//! - [`MetricsRow`]: metrics plus identifier, one row of the output report
//!
//! The serialized field names of [`InputRecord`] and [`MetricsRow`] are the
//! column headers consumed and produced by downstream spreadsheets, hence
//! the explicit `#[serde(rename)]` on every field.

use serde::{Deserialize, Serialize};

/// Output report columns, in the order downstream consumers expect.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "URL_ID",
    "Positive Score",
    "Negative Score",
    "Polarity Score",
    "Subjectivity Score",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// One row of the input table. Extra columns are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InputRecord {
    /// Opaque identifier used to key the stored article text.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// Where the article is fetched from.
    #[serde(rename = "URL")]
    pub url: String,
}

/// Title and body text scraped from an article page.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedArticle {
    pub title: String,
    pub body: String,
}

impl ExtractedArticle {
    /// The stored plain-text form: title, a blank line, then the body.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }
}

/// A stored article loaded back for analysis.
#[derive(Debug, Clone)]
pub struct Article {
    /// The identifier the text was stored under.
    pub id: String,
    /// Title and body, newline-separated.
    pub text: String,
}

/// The fixed set of lexical, readability and sentiment metrics for one text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    /// Always equal to `avg_sentence_length`; kept as its own report column.
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

impl ArticleMetrics {
    /// Attach an identifier to produce one report row.
    pub fn into_row(self, url_id: impl Into<String>) -> MetricsRow {
        MetricsRow {
            url_id: url_id.into(),
            positive_score: self.positive_score,
            negative_score: self.negative_score,
            polarity_score: self.polarity_score,
            subjectivity_score: self.subjectivity_score,
            avg_sentence_length: self.avg_sentence_length,
            percentage_complex_words: self.percentage_complex_words,
            fog_index: self.fog_index,
            avg_words_per_sentence: self.avg_words_per_sentence,
            complex_word_count: self.complex_word_count,
            word_count: self.word_count,
            syllables_per_word: self.syllables_per_word,
            personal_pronouns: self.personal_pronouns,
            avg_word_length: self.avg_word_length,
        }
    }
}

/// One row of the output report.
///
/// Field order matches [`OUTPUT_COLUMNS`]; serializers emit fields in
/// declaration order, so do not reorder them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsRow {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "Positive Score")]
    pub positive_score: usize,
    #[serde(rename = "Negative Score")]
    pub negative_score: usize,
    #[serde(rename = "Polarity Score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity Score")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}
