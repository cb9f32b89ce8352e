//! Stopword set used by the term weighter.
//!
//! The default list is tuned for Indonesian home-cooking posts: everyday filler
//! words plus generic cooking verbs and praise ("resep", "enak", "bumbu", ...),
//! so that the vocabulary is left with ingredients and dish names
//! (ayam, santan, kunyit, rendang, ...).

use std::collections::HashSet;

/// Indonesian filler words
const FILLER_WORDS: &[&str] = &[
    "dan", "yang", "di", "itu", "ini", "ke", "dari", "ada", "buat", "yg", "mau",
    "ga", "gak", "aku", "sama", "kalo", "lagi", "bisa", "karena", "jadi", "apa",
    "tapi", "suka", "udah", "banget", "ya", "dia", "kita", "untuk", "dengan",
    "pada", "atau", "adalah", "saya", "mereka", "kan", "juga", "aja",
    "kalau", "langsung", "banyak", "tp", "dr", "bgt", "sdh", "udh", "nih", "sih",
    "kok", "deh", "masih", "biar", "tetap", "pun", "doang", "nya",
];

/// generic cooking verbs / praise
const COOKING_WORDS: &[&str] = &[
    "resep", "cara", "membuat", "bikin", "masak", "enak", "lezat", "mantap", "praktis",
    "simple", "mudah", "ala", "khas", "menu", "makan", "siang", "malam", "pagi",
    "video", "tutorial", "bumbu", "dapur", "sendiri", "mari", "yuk", "cobain",
];

/// Stopword set.
/// Words are stored lowercase; lookups expect already-lowercased tokens
/// (the tokenizer guarantees that).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// empty set, nothing is excluded
    pub fn none() -> Self {
        Self::default()
    }

    /// default recipe-domain list (filler words + cooking verbs)
    pub fn recipe_default() -> Self {
        Self::new(FILLER_WORDS.iter().chain(COOKING_WORDS.iter()))
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_covers_filler_and_cooking_words() {
        let stop = StopWords::recipe_default();
        for w in ["dan", "yang", "di", "itu", "resep", "bumbu", "enak"] {
            assert!(stop.contains(w), "{w} should be a stopword");
        }
        for w in ["ayam", "santan", "kunyit", "rendang"] {
            assert!(!stop.contains(w), "{w} must stay in the vocabulary");
        }
        // the two lists are disjoint
        assert_eq!(stop.len(), FILLER_WORDS.len() + COOKING_WORDS.len());
    }

    #[test]
    fn custom_words_are_lowercased_and_trimmed() {
        let mut stop = StopWords::new([" Garam ", ""]);
        assert!(stop.contains("garam"));
        assert_eq!(stop.len(), 1);
        stop.extend(["GULA"]);
        assert!(stop.contains("gula"));
        assert!(StopWords::none().is_empty());
    }
}
