use serde::Serialize;
use tracing::debug;

use crate::utils::normalizer::{is_blank, normalize_text};

/// Outcome of resolving a free-text query to an anchor document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Resolution {
    /// first document containing the query
    Anchor {
        index: usize,
        /// how many documents contain the query in total
        match_count: usize,
    },
    NoMatch,
    EmptyQuery,
}

impl Resolution {
    #[inline]
    pub fn anchor(&self) -> Option<usize> {
        match self {
            Resolution::Anchor { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Substring resolver.
///
/// The query is normalized like the documents, then matched as a plain
/// substring against each normalized document in order. The first hit wins,
/// even when later documents match better.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryResolver;

impl QueryResolver {
    /// `documents` must already be normalized with
    /// [`normalize_text`](crate::utils::normalizer::normalize_text).
    pub fn resolve<S>(query: &str, documents: &[S]) -> Resolution
    where
        S: AsRef<str>,
    {
        if is_blank(query) {
            debug!("empty query");
            return Resolution::EmptyQuery;
        }
        let needle = normalize_text(query);

        let mut matches = documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| doc.as_ref().contains(needle.as_str()))
            .map(|(idx, _)| idx);

        let Some(index) = matches.next() else {
            debug!(query = %needle, "no document matched");
            return Resolution::NoMatch;
        };
        let match_count = 1 + matches.count();
        debug!(query = %needle, anchor = index, match_count, "query resolved");
        Resolution::Anchor { index, match_count }
    }
}
