use serde::{Deserialize, Serialize};

use crate::tokens::estimate_tokens;

/// Running sum of estimated tokens across every model call in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTally {
    pub input_tokens: usize,
    pub output_tokens: usize,
}

impl TokenTally {
    /// Adds the estimates for one model invocation.
    pub fn record(&mut self, prompt: &str, output: &str) {
        self.input_tokens += estimate_tokens(prompt);
        self.output_tokens += estimate_tokens(output);
    }
}

/// Cost breakdown in USD, rounded to six decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub input_cost_usd: f64,
    pub output_cost_usd: f64,
    pub total_cost_usd: f64,
}

/// Per-1K-token rates for the deployed model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            input_per_1k: 0.002,
            output_per_1k: 0.006,
        }
    }
}

impl Pricing {
    /// Tokens-per-word ratio used when only a word count is known.
    const TOKENS_PER_WORD: f64 = 1.3;
    /// Expected output size relative to input for a pre-run projection.
    const PROJECTED_OUTPUT_RATIO: f64 = 0.2;

    pub fn cost(&self, tally: &TokenTally) -> CostReport {
        let input_cost = tally.input_tokens as f64 / 1000.0 * self.input_per_1k;
        let output_cost = tally.output_tokens as f64 / 1000.0 * self.output_per_1k;

        CostReport {
            input_tokens: tally.input_tokens,
            output_tokens: tally.output_tokens,
            input_cost_usd: round6(input_cost),
            output_cost_usd: round6(output_cost),
            total_cost_usd: round6(input_cost + output_cost),
        }
    }

    /// Rough cost of summarizing `word_count` words before any model call,
    /// assuming the output is a fifth of the input.
    pub fn project(&self, word_count: usize) -> CostReport {
        let input_tokens = (word_count as f64 * Self::TOKENS_PER_WORD).ceil() as usize;
        let output_tokens = (input_tokens as f64 * Self::PROJECTED_OUTPUT_RATIO).ceil() as usize;

        self.cost(&TokenTally {
            input_tokens,
            output_tokens,
        })
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
