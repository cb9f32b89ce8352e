use std::{fs::File, io::Read, path::Path, time::Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::ColumnNames,
    error::{RecommendError, Result},
    utils::normalizer::normalize_text,
};

/// One recipe row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// 0-based row index
    pub id: usize,
    /// text shown to the user
    pub raw_text: String,
    /// lowercase, whitespace-collapsed text used for matching and weighting
    pub normalized_text: String,
}

impl Document {
    pub fn new(id: usize, raw_text: impl Into<String>, normalized: &str) -> Self {
        Self {
            id,
            raw_text: raw_text.into(),
            normalized_text: normalize_text(normalized),
        }
    }
}

/// Ordered recipe collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCorpus {
    documents: Vec<Document>,
}

impl RecipeCorpus {
    /// Load from a csv file with a header row.
    pub fn load_csv(path: impl AsRef<Path>, columns: &ColumnNames) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::open(path).map_err(|source| RecommendError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(file, columns)?;
        info!(
            path = %path.display(),
            docs = corpus.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Parse csv from any reader.
    ///
    /// The display column is required. When the normalized column is missing
    /// it is derived from the display text. Missing or empty cells become `""`.
    pub fn from_reader<R: Read>(reader: R, columns: &ColumnNames) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let display_idx = position(&columns.display).ok_or_else(|| RecommendError::MissingColumn {
            column: columns.display.clone(),
        })?;
        let normalized_idx = position(&columns.normalized);
        if normalized_idx.is_none() {
            warn!(
                column = %columns.normalized,
                fallback = %columns.display,
                "normalized column missing, deriving it from display text"
            );
        }

        let mut documents = Vec::new();
        for (id, record) in rdr.records().enumerate() {
            let record = record?;
            let raw = record.get(display_idx).unwrap_or("");
            let normalized = match normalized_idx {
                Some(idx) => record.get(idx).unwrap_or(""),
                None => raw,
            };
            documents.push(Document::new(id, raw, normalized));
        }
        Ok(Self { documents })
    }

    /// Build from plain texts; each text is both display and normalized source.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(id, t)| Document::new(id, t.as_ref(), t.as_ref()))
            .collect();
        Self { documents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// normalized texts in document order
    pub fn normalized_texts(&self) -> Vec<&str> {
        self.documents
            .iter()
            .map(|d| d.normalized_text.as_str())
            .collect()
    }
}
