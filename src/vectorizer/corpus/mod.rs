use indexmap::IndexMap;

/// keep document count and per-term document frequency
///
/// Filled once while the vectorizer walks the documents, then frozen into a
/// [`Vocabulary`]. Terms keep first-appearance order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added (empty ones included)
    doc_num: u64,
    /// term -> number of documents containing it
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add one document's distinct terms.
    /// `terms` must not repeat a term, every entry counts as one document hit.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// document frequency of `term`, 0 if never seen
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// number of distinct terms seen, before any cut-off
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Freeze into a vocabulary.
    ///
    /// A term is kept when `df >= min_df` and `df <= max_df * doc_num`.
    /// `max_df >= 1.0` disables the upper cut-off.
    pub fn into_vocabulary(self, min_df: u64, max_df: f64) -> Vocabulary {
        let doc_num = self.doc_num;
        let max_count = if max_df >= 1.0 {
            u64::MAX
        } else {
            (max_df * doc_num as f64).floor() as u64
        };
        let terms = self
            .term_counts
            .into_iter()
            .filter(|(_, df)| *df >= min_df.max(1) && *df <= max_count)
            .collect();
        Vocabulary { terms, doc_num }
    }
}

/// Vocabulary
/// Immutable term dimension table. The position of a term is its vector index.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// term -> document frequency, position == dimension
    terms: IndexMap<Box<str>, u64>,
    doc_num: u64,
}

impl Vocabulary {
    /// dimension of `term`
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// term at dimension `index`
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|(t, _)| t.as_ref())
    }

    /// document frequency at dimension `index`
    #[inline]
    pub fn doc_freq(&self, index: usize) -> Option<u64> {
        self.terms.get_index(index).map(|(_, df)| *df)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// number of documents the frequencies were counted over
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// `(term, df)` in dimension order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.terms.iter().map(|(t, df)| (t.as_ref(), *df))
    }
}
