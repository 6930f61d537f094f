//! # Text chunker
//!
//! Splits long input into token-bounded segments, greedily packing paragraphs
//! and falling back to sentences when the text has no paragraph breaks.
//!
//! Budgets are soft ceilings: a single paragraph (or sentence) that alone
//! exceeds the budget is kept whole in its own chunk rather than cut mid-way.

use std::sync::LazyLock;

use regex::Regex;

use crate::tokens::estimate_tokens;

/// A blank line, optionally carrying stray spaces or carriage returns.
static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").unwrap());

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

const PARAGRAPH_SEPARATOR: &str = "\n\n";
const SENTENCE_SEPARATOR: &str = ". ";

#[derive(Debug, Default)]
struct Group<'a> {
    parts: Vec<&'a str>,
    tokens: usize,
}

/// Splits `text` into ordered chunks of at most `max_tokens` estimated
/// tokens each.
///
/// Paragraphs are packed first and joined with a blank line. If that yields a
/// single chunk that is still over budget, the text is re-packed at sentence
/// granularity: fragments are trimmed, joined with `". "` and closed with a
/// period, so sentence punctuation is normalized to `.` in that mode.
///
/// Returns an empty vector only when `text` has no content.
pub fn chunk_text(text: &str, max_tokens: usize) -> Vec<String> {
    let paragraphs = PARAGRAPH_BREAK_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>();

    let groups = accumulate(&paragraphs, max_tokens);

    if let [only] = groups.as_slice() {
        if only.tokens > max_tokens {
            tracing::debug!(
                tokens = only.tokens,
                max_tokens,
                "No usable paragraph breaks, splitting by sentence"
            );

            let sentences = SENTENCE_END_RE
                .split(text)
                .map(str::trim)
                // consecutive or stray punctuation leaves fragments without any words
                .filter(|s| s.chars().any(char::is_alphanumeric))
                .collect::<Vec<_>>();

            let sentence_groups = accumulate(&sentences, max_tokens);
            if !sentence_groups.is_empty() {
                return sentence_groups
                    .into_iter()
                    .map(|g| format!("{}.", g.parts.join(SENTENCE_SEPARATOR)))
                    .collect();
            }
        }
    }

    groups
        .into_iter()
        .map(|g| g.parts.join(PARAGRAPH_SEPARATOR))
        .collect()
}

/// Greedy packing: a unit opens a new group when it would push the running
/// group over budget and that group already holds something.
fn accumulate<'a>(units: &[&'a str], max_tokens: usize) -> Vec<Group<'a>> {
    let mut groups = Vec::new();
    let mut current = Group::default();

    for unit in units {
        let tokens = estimate_tokens(unit);

        if current.tokens + tokens > max_tokens && !current.parts.is_empty() {
            groups.push(std::mem::take(&mut current));
        }

        current.parts.push(unit);
        current.tokens += tokens;
    }

    if !current.parts.is_empty() {
        groups.push(current);
    }

    groups
}
