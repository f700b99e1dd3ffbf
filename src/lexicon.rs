//! Word lists used to filter and score article text.
//!
//! A run loads three [`Lexicon`]s once, before any article is touched:
//!
//! - **stop words**: every file in a directory, whitespace-separated,
//!   optionally merged with the standard English list ([`english_stop_words`])
//! - **positive** and **negative** sentiment words: one word per line
//!
//! All words are stored lower-cased. A missing or unreadable list is
//! reported as [`Error::MissingLexicon`] and aborts the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use stop_words::{get, LANGUAGE};
use tracing::{debug, info, instrument, warn};

use crate::error::{Error, Result};

/// The standard English stop-word list (NLTK), as shipped by `stop-words`.
pub fn english_stop_words() -> Lexicon {
    Lexicon::from_words(get(LANGUAGE::English).iter())
}

/// An immutable set of lower-cased words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any word iterator, lower-casing each entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether `word` is in the set. `word` must already be lower-cased.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }
}

/// Where the word lists for a run come from.
#[derive(Debug, Clone)]
pub struct LexiconSources {
    /// Directory whose files are all merged into the stop-word set.
    pub stop_words_dir: PathBuf,
    /// One positive sentiment word per line.
    pub positive_words: PathBuf,
    /// One negative sentiment word per line.
    pub negative_words: PathBuf,
    /// Merge [`english_stop_words`] into the stop-word set.
    pub builtin_stop_words: bool,
}

/// The word lists shared read-only by every article analysis in a run.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub stop_words: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    /// Load all three lexicons, failing on the first missing file.
    #[instrument(level = "info", skip_all, fields(stop_words_dir = %sources.stop_words_dir.display()))]
    pub fn load(sources: &LexiconSources) -> Result<Self> {
        let mut stop_words = load_stop_words_dir(&sources.stop_words_dir)?;
        if sources.builtin_stop_words {
            stop_words.extend(get(LANGUAGE::English).iter());
        }
        let positive = load_word_per_line(&sources.positive_words)?;
        let negative = load_word_per_line(&sources.negative_words)?;

        info!(
            stop_words = stop_words.len(),
            positive = positive.len(),
            negative = negative.len(),
            "Loaded lexicons"
        );

        for (name, lexicon) in [("positive", &positive), ("negative", &negative)] {
            if lexicon.is_empty() {
                warn!(lexicon = name, "Sentiment word list is empty");
            }
        }

        Ok(Self {
            stop_words,
            positive,
            negative,
        })
    }
}

fn missing(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::MissingLexicon {
        path: path.to_path_buf(),
        source,
    }
}

/// Merge every regular file in `dir` into one stop-word lexicon.
///
/// Stop-word files are decoded as Latin-1 so that stray bytes in
/// hand-maintained lists never fail the run.
fn load_stop_words_dir(dir: &Path) -> Result<Lexicon> {
    let mut lexicon = Lexicon::default();
    for entry in fs::read_dir(dir).map_err(missing(dir))? {
        let path = entry.map_err(missing(dir))?.path();
        if !path.is_file() {
            continue;
        }
        let bytes = fs::read(&path).map_err(missing(&path))?;
        let text = decode_latin1(&bytes);
        let before = lexicon.len();
        lexicon.extend(text.split_whitespace());
        debug!(path = %path.display(), added = lexicon.len() - before, "Merged stop-word file");
    }
    Ok(lexicon)
}

fn load_word_per_line(path: &Path) -> Result<Lexicon> {
    let bytes = fs::read(path).map_err(missing(path))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(Lexicon::from_words(
        text.lines().map(str::trim).filter(|line| !line.is_empty()),
    ))
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn sources(root: &TempDir, builtin: bool) -> LexiconSources {
        let stop_dir = root.path().join("StopWords");
        fs::create_dir_all(&stop_dir).unwrap();
        write(&stop_dir, "StopWords_Generic.txt", b"ABOUT\nAcross  after\n");
        write(&stop_dir, "StopWords_Names.txt", b"SMITH | Surnames\nJOHNSON\n");
        let positive = write(root.path(), "positive-words.txt", b"good\n  Great \n\n");
        let negative = write(root.path(), "negative-words.txt", b"bad\n");
        LexiconSources {
            stop_words_dir: stop_dir,
            positive_words: positive,
            negative_words: negative,
            builtin_stop_words: builtin,
        }
    }

    #[test]
    fn test_english_stop_words_contents() {
        let english = english_stop_words();
        for word in ["i", "we", "my", "ours", "us", "the", "and", "not"] {
            assert!(english.contains(word), "missing {word}");
        }
        assert!(!english.contains("market"));
    }

    #[test]
    fn test_load_merges_stop_word_files() {
        let root = TempDir::new().unwrap();
        let lexicons = Lexicons::load(&sources(&root, false)).unwrap();

        for word in ["about", "across", "after", "smith", "johnson", "surnames", "|"] {
            assert!(lexicons.stop_words.contains(word), "missing {word}");
        }
        assert_eq!(lexicons.stop_words.len(), 7);
    }

    #[test]
    fn test_load_adds_builtin_stop_words() {
        let root = TempDir::new().unwrap();
        let lexicons = Lexicons::load(&sources(&root, true)).unwrap();
        assert!(lexicons.stop_words.contains("the"));
        assert!(lexicons.stop_words.contains("smith"));
    }

    #[test]
    fn test_sentiment_words_trimmed_and_lowercased() {
        let root = TempDir::new().unwrap();
        let lexicons = Lexicons::load(&sources(&root, false)).unwrap();
        assert!(lexicons.positive.contains("good"));
        assert!(lexicons.positive.contains("great"));
        assert_eq!(lexicons.positive.len(), 2);
        assert!(lexicons.negative.contains("bad"));
    }

    #[test]
    fn test_latin1_stop_words() {
        let root = TempDir::new().unwrap();
        let src = sources(&root, false);
        // 0xE9 is 'é' in Latin-1 and invalid as a lone UTF-8 byte.
        write(&src.stop_words_dir, "StopWords_Currencies.txt", b"caf\xE9\n");
        let lexicons = Lexicons::load(&src).unwrap();
        assert!(lexicons.stop_words.contains("café"));
    }

    #[test]
    fn test_missing_stop_word_dir() {
        let root = TempDir::new().unwrap();
        let mut src = sources(&root, false);
        src.stop_words_dir = root.path().join("nope");
        let err = Lexicons::load(&src).unwrap_err();
        assert!(matches!(err, Error::MissingLexicon { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_missing_sentiment_file() {
        let root = TempDir::new().unwrap();
        let mut src = sources(&root, false);
        src.negative_words = root.path().join("missing.txt");
        match Lexicons::load(&src) {
            Err(Error::MissingLexicon { path, .. }) => assert_eq!(path, src.negative_words),
            other => panic!("expected MissingLexicon, got {other:?}"),
        }
    }
}
