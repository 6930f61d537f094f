//! # Summarization pipeline
//!
//! Map-then-reduce over token-bounded chunks. Short input is summarized in a
//! single model call; long input is chunked, each chunk is summarized in
//! source order, and the chunk summaries are reduced by one final call.
//!
//! The pipeline holds no per-run state, so one instance can serve concurrent
//! requests. Every run owns its own chunk list and [`TokenTally`].

use crate::{
    chunker::chunk_text,
    cost::TokenTally,
    error::Error,
    language::{detect_language, normalize_language},
    llm::invoker::ModelInvoker,
    prompt::{build_custom_prompt, build_prompt, SummaryLength},
    tokens::estimate_tokens,
};

/// Caller-owned input to one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummarizationRequest {
    pub text: String,
    pub length: SummaryLength,
    pub bullet_points: bool,
    /// Explicit language code; detected from the text when absent.
    pub language: Option<String>,
    /// Replaces the generated instructions when present.
    pub custom_prompt: Option<String>,
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn length(mut self, length: SummaryLength) -> Self {
        self.length = length;
        self
    }

    pub fn bullet_points(mut self, bullet_points: bool) -> Self {
        self.bullet_points = bullet_points;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn custom_prompt(mut self, custom_prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(custom_prompt.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationResult {
    pub summary: String,
    pub chunks_processed: usize,
    /// Language the summary was requested in, explicit or detected.
    pub language: String,
    pub tally: TokenTally,
}

#[derive(Debug, Clone)]
pub struct SummarizationPipeline<M> {
    model: M,
}

impl<M> SummarizationPipeline<M>
where
    M: ModelInvoker + Send + Sync,
{
    /// Minimum trimmed input length, in characters.
    pub const MIN_TEXT_CHARS: usize = 100;
    /// Inputs estimated at or above this are chunked; also the per-chunk budget.
    pub const CHUNKING_THRESHOLD_TOKENS: usize = 6000;
    pub const FINAL_OUTPUT_TOKENS: u32 = 4000;
    pub const CHUNK_OUTPUT_TOKENS: u32 = 2000;

    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Runs the whole pipeline. Any model failure aborts the run and the
    /// work done on earlier chunks is discarded.
    #[tracing::instrument(skip_all, fields(model_id = %self.model.model_id()))]
    pub async fn summarize(
        &self,
        request: &SummarizationRequest,
    ) -> Result<SummarizationResult, Error> {
        let text = request.text.trim();
        if text.chars().count() < Self::MIN_TEXT_CHARS {
            return Err(Error::validation(format!(
                "Text is too short (minimum {} characters)",
                Self::MIN_TEXT_CHARS
            )));
        }

        let language = match normalize_language(request.language.as_deref())? {
            Some(language) => language,
            None => detect_language(text).to_string(),
        };
        let custom_prompt = request
            .custom_prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let total_tokens = estimate_tokens(text);
        tracing::info!(total_tokens, %language, "Estimated input size");

        let mut tally = TokenTally::default();

        if total_tokens < Self::CHUNKING_THRESHOLD_TOKENS {
            let prompt = match custom_prompt {
                Some(custom) => build_custom_prompt(custom, text),
                None => build_prompt(text, request.length, request.bullet_points, &language),
            };
            let summary = self
                .invoke(&prompt, Self::FINAL_OUTPUT_TOKENS, &mut tally)
                .await?;

            return Ok(SummarizationResult {
                summary,
                chunks_processed: 1,
                language,
                tally,
            });
        }

        let chunks = chunk_text(text, Self::CHUNKING_THRESHOLD_TOKENS);
        tracing::info!(chunks = chunks.len(), "Text is long, summarizing in chunks");

        let mut chunk_summaries = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            tracing::info!(chunk = idx + 1, of = chunks.len(), "Summarizing chunk");

            // chunk summaries are intermediate: fixed length, no bullets
            let prompt = match custom_prompt {
                Some(custom) => build_custom_prompt(custom, chunk),
                None => build_prompt(chunk, SummaryLength::Medium, false, &language),
            };
            let chunk_summary = self
                .invoke(&prompt, Self::CHUNK_OUTPUT_TOKENS, &mut tally)
                .await
                .inspect_err(|e| tracing::error!(error = %e, chunk = idx + 1, "Chunk summary failed"))?;

            chunk_summaries.push(chunk_summary);
        }

        let combined = chunk_summaries.join("\n\n");
        tracing::info!(
            chunk_summaries = chunk_summaries.len(),
            "Reducing chunk summaries into final summary"
        );

        let prompt = build_prompt(&combined, request.length, request.bullet_points, &language);
        let summary = self
            .invoke(&prompt, Self::FINAL_OUTPUT_TOKENS, &mut tally)
            .await?;

        Ok(SummarizationResult {
            summary,
            chunks_processed: chunks.len(),
            language,
            tally,
        })
    }

    async fn invoke(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        tally: &mut TokenTally,
    ) -> Result<String, Error> {
        let output = self
            .model
            .invoke(prompt, max_output_tokens)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Model invocation failed"))?;

        tally.record(prompt, &output);
        Ok(output)
    }
}
