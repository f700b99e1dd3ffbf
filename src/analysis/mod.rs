//! Text analysis: tokenization, syllable counting and the metric set.
//!
//! The pipeline for one article is
//! [`tokenizer::tokenize`] → [`metrics::analyze`], with
//! [`tokenizer::sentences`] supplying the sentence count for readability.

pub mod metrics;
pub mod syllables;
pub mod tokenizer;

pub use metrics::analyze;
