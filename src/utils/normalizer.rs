//! Text normalization shared by the corpus loader, the vectorizer and the
//! query resolver. Documents and queries must go through the same function,
//! otherwise substring matching silently drifts.

/// Lowercase, trim and collapse every whitespace run into a single space.
///
/// # Examples
/// ```
/// use recipe_recommender::utils::normalizer::normalize_text;
/// assert_eq!(normalize_text("  Ayam\tKecap \n Manis "), "ayam kecap manis");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}

/// true when the text is empty after normalization
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_lowercases() {
        assert_eq!(normalize_text("Sop  BUNTUT\r\nSapi"), "sop buntut sapi");
    }

    #[test]
    fn blank_inputs_normalize_to_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   \t "), "");
        assert!(is_blank(" \n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn keeps_non_ascii_letters() {
        assert_eq!(normalize_text("Crème BRÛLÉE"), "crème brûlée");
    }
}
