use indexmap::IndexMap;

use crate::vectorizer::stopwords::StopWords;

/// Tokenizer
/// Splits text on every non-alphanumeric character and lowercases the pieces.
/// Tokens shorter than `min_len` chars are dropped.
///
/// # Examples
/// ```
/// use recipe_recommender::vectorizer::token::Tokenizer;
/// let tokenizer = Tokenizer::new(2);
/// let tokens: Vec<String> = tokenizer.tokens("Ayam-goreng, kecap & 2x sambal!").collect();
/// assert_eq!(tokens, vec!["ayam", "goreng", "kecap", "2x", "sambal"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_len: usize,
}

impl Default for Tokenizer {
    /// two chars minimum
    fn default() -> Self {
        Self { min_len: 2 }
    }
}

impl Tokenizer {
    pub fn new(min_len: usize) -> Self {
        Self { min_len: min_len.max(1) }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Iterate over the tokens of `text`
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        let min_len = self.min_len;
        text.split(|c: char| !c.is_alphanumeric())
            .filter(move |tok| tok.chars().count() >= min_len)
            .map(|tok| tok.to_lowercase())
    }
}

/// TermFrequency
/// Counts how often every term occurs in one document.
/// Keeps first-appearance order of terms so that everything built from it
/// is deterministic for a given input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// add terms
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Tokenize `text`, drop stopwords, count the rest.
    pub fn analyze(text: &str, tokenizer: &Tokenizer, stopwords: &StopWords) -> Self {
        let mut freq = TermFrequency::new();
        for token in tokenizer.tokens(text) {
            if !stopwords.contains(&token) {
                freq.add_term(&token);
            }
        }
        freq
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// statistics
impl TermFrequency {
    /// occurrences of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// total number of counted occurrences
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// distinct terms in first-appearance order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// `(term, count)` in first-appearance order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_splits_on_punctuation_and_lowercases() {
        let tokenizer = Tokenizer::new(1);
        let toks: Vec<String> = tokenizer.tokens("Nasi-Goreng,PEDAS!!  telur").collect();
        assert_eq!(toks, vec!["nasi", "goreng", "pedas", "telur"]);
    }

    #[test]
    fn tokenizer_drops_short_tokens() {
        let toks: Vec<String> = Tokenizer::default().tokens("a bb c ddd").collect();
        assert_eq!(toks, vec!["bb", "ddd"]);
        // min_len 0 behaves like 1, empty pieces never survive
        let toks: Vec<String> = Tokenizer::new(0).tokens(",,a,,").collect();
        assert_eq!(toks, vec!["a"]);
    }

    #[test]
    fn analyze_counts_and_skips_stopwords() {
        let stop = StopWords::new(["dan", "yang"]);
        let freq = TermFrequency::analyze("ayam dan ayam yang kecap", &Tokenizer::default(), &stop);
        assert_eq!(freq.term_count("ayam"), 2);
        assert_eq!(freq.term_count("kecap"), 1);
        assert_eq!(freq.term_count("dan"), 0);
        assert_eq!(freq.term_sum(), 3);
        assert_eq!(freq.term_set_ref_str(), vec!["ayam", "kecap"]);
    }
}
