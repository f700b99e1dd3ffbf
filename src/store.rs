//! Plain-text article storage keyed by identifier.
//!
//! Each article lives at `{dir}/{id}.txt` and holds the title, a blank line,
//! and the body text. The extraction job writes these files; the analysis job
//! reads them back.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::models::{Article, ExtractedArticle};

/// Directory of stored article texts.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    /// Create a store rooted at `dir`. Nothing is touched on disk until [`save`](Self::save).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store's root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the stored text for `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.txt"))
    }

    /// Persist an extracted article, creating the store directory if needed.
    #[instrument(level = "debug", skip(self, article))]
    pub async fn save(&self, id: &str, article: &ExtractedArticle) -> Result<PathBuf> {
        let path = self.path_for(id);
        let output_err = |source| Error::Output {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).await.map_err(output_err)?;
        fs::write(&path, article.to_text())
            .await
            .map_err(output_err)?;
        debug!(path = %path.display(), "Stored article text");
        Ok(path)
    }

    /// Load the stored text for `id`.
    ///
    /// Any read failure is reported as [`Error::MissingInput`].
    pub async fn load(&self, id: &str) -> Result<Article> {
        let path = self.path_for(id);
        match fs::read_to_string(&path).await {
            Ok(text) => Ok(Article {
                id: id.to_string(),
                text,
            }),
            Err(source) => Err(Error::MissingInput {
                id: id.to_string(),
                path,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let store = ArticleStore::new(tmp.path().join("articles"));
        let article = ExtractedArticle {
            title: "Title".to_string(),
            body: "Body text.".to_string(),
        };

        let path = store.save("blackassign0001", &article).await.unwrap();
        assert_eq!(path, tmp.path().join("articles/blackassign0001.txt"));

        let loaded = store.load("blackassign0001").await.unwrap();
        assert_eq!(loaded.id, "blackassign0001");
        assert_eq!(loaded.text, "Title\n\nBody text.");
    }

    #[tokio::test]
    async fn test_load_missing_is_missing_input() {
        let tmp = TempDir::new().unwrap();
        let store = ArticleStore::new(tmp.path());
        match store.load("404").await {
            Err(Error::MissingInput { id, path, .. }) => {
                assert_eq!(id, "404");
                assert_eq!(path, tmp.path().join("404.txt"));
            }
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }
}
