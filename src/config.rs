//! Recommender settings, loaded from an optional TOML file.
//!
//! ```toml
//! top-k = 5
//! display-column = "full_text"
//! normalized-column = "clean_text"
//! extra-stopwords = ["garam", "gula"]
//! min-df = 1
//! max-df = 1.0
//! sublinear-tf = false
//!
//! [thresholds]
//! very-good = 0.30
//! similar = 0.15
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::{
    error::{RecommendError, Result},
    vectorizer::{evaluate::scoring::MatchThresholds, stopwords::StopWords, VectorizerOptions},
};

/// Csv columns the corpus is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// shown to the user, required
    pub display: String,
    /// pre-normalized text, optional; derived from `display` when absent
    pub normalized: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            display: "full_text".to_string(),
            normalized: "clean_text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RecommenderConfig {
    /// recommendations per query
    pub top_k: usize,
    pub display_column: String,
    pub normalized_column: String,
    /// replaces the built-in stopword list when set
    pub stopwords: Option<Vec<String>>,
    /// appended to the stopword list
    pub extra_stopwords: Vec<String>,
    pub min_df: u64,
    pub max_df: f64,
    pub min_token_len: usize,
    /// use `1 + ln(count)` instead of raw counts
    pub sublinear_tf: bool,
    pub thresholds: MatchThresholds,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        let columns = ColumnNames::default();
        let options = VectorizerOptions::default();
        Self {
            top_k: 5,
            display_column: columns.display,
            normalized_column: columns.normalized,
            stopwords: None,
            extra_stopwords: Vec::new(),
            min_df: options.min_df,
            max_df: options.max_df,
            min_token_len: options.min_token_len,
            sublinear_tf: false,
            thresholds: MatchThresholds::default(),
        }
    }
}

impl RecommenderConfig {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| RecommendError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| RecommendError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(RecommendError::InvalidConfig("top-k must be at least 1".into()));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(RecommendError::InvalidConfig(format!(
                "max-df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        if self.min_token_len == 0 {
            return Err(RecommendError::InvalidConfig("min-token-len must be at least 1".into()));
        }
        if self.display_column.trim().is_empty() {
            return Err(RecommendError::InvalidConfig("display-column must not be empty".into()));
        }
        self.thresholds.validate()
    }

    pub fn columns(&self) -> ColumnNames {
        ColumnNames {
            display: self.display_column.clone(),
            normalized: self.normalized_column.clone(),
        }
    }

    pub fn stopwords(&self) -> StopWords {
        let mut stop = match &self.stopwords {
            Some(words) => StopWords::new(words),
            None => StopWords::recipe_default(),
        };
        stop.extend(&self.extra_stopwords);
        stop
    }

    pub fn vectorizer_options(&self) -> VectorizerOptions {
        VectorizerOptions {
            min_df: self.min_df,
            max_df: self.max_df,
            min_token_len: self.min_token_len,
        }
    }
}
