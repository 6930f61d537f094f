//! # Token estimation
//!
//! Word-count based approximation of LLM token usage. The estimate can
//! diverge from the real model tokenizer, so every chunk-size and cost
//! decision built on top of it is a heuristic, not an exact bound.

/// Empirical tokens-per-word ratio, expressed as a fraction to keep the
/// floor exact (1.3 = 13 / 10).
const TOKENS_PER_WORD_NUM: usize = 13;
const TOKENS_PER_WORD_DEN: usize = 10;

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Approximate token count: `floor(words * 1.3)`.
pub fn estimate_tokens(text: &str) -> usize {
    word_count(text) * TOKENS_PER_WORD_NUM / TOKENS_PER_WORD_DEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("   \n\t "), 0);
    }

    #[test]
    fn estimate_floors_the_scaled_word_count() {
        assert_eq!(estimate_tokens("one"), 1);
        assert_eq!(estimate_tokens("one two three"), 3);
        assert_eq!(estimate_tokens(&"word ".repeat(10)), 13);
        assert_eq!(estimate_tokens(&"word ".repeat(3077)), 4000);
    }

    #[test]
    fn whitespace_runs_count_as_one_separator() {
        assert_eq!(word_count("alpha \n\n  beta\tgamma"), 3);
        assert_eq!(
            estimate_tokens("alpha \n\n  beta\tgamma"),
            estimate_tokens("alpha beta gamma")
        );
    }
}
