pub mod builder;

use std::time::Instant;

use crate::{
    cost::{CostReport, Pricing},
    error::Error,
    llm::invoker::ModelInvoker,
    parser::VideoRef,
    pipeline::{SummarizationPipeline, SummarizationRequest},
    tokens::word_count,
    types::{ServiceInfo, SummarizeRequest, SummarizeResponse, VideoSummarizeRequest},
    yt::TranscriptFetcher,
};

/// Request-level entry point: validates wire requests, runs the pipeline,
/// and reports timing and cost.
pub struct SummaryProcessor<M, T>
where
    M: ModelInvoker + Send + Sync,
    T: TranscriptFetcher + Send + Sync,
{
    pipeline: SummarizationPipeline<M>,
    transcripts: T,
    pricing: Pricing,
}

impl<M, T> SummaryProcessor<M, T>
where
    M: ModelInvoker + Send + Sync,
    T: TranscriptFetcher + Send + Sync,
{
    pub const SERVICE_NAME: &str = "Sumwise Text Summarization";

    #[tracing::instrument(skip_all)]
    pub async fn summarize_text(
        &self,
        request: SummarizeRequest,
    ) -> Result<SummarizeResponse, Error> {
        self.run(request, Instant::now()).await
    }

    /// Fetches the video's transcript and summarizes it like direct text.
    ///
    /// The request's language wins over the one reported by the transcript
    /// service; detection is the last resort.
    #[tracing::instrument(skip_all, fields(url = %request.url))]
    pub async fn summarize_video(
        &self,
        request: VideoSummarizeRequest,
    ) -> Result<SummarizeResponse, Error> {
        let started = Instant::now();
        let video = VideoRef::parse(&request.url)?;

        let transcript = self
            .transcripts
            .fetch_transcript(&video)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))?;
        tracing::info!(
            video_id = %transcript.video_id,
            language = %transcript.language,
            "Fetched transcript"
        );

        let mut options = request.options;
        let has_language = options
            .language
            .as_deref()
            .is_some_and(|l| !l.trim().is_empty());
        if !has_language && !transcript.language.trim().is_empty() {
            options.language = Some(transcript.language);
        }

        let request = SummarizeRequest {
            text: transcript.transcript_text,
            options,
        };

        self.run(request, started).await
    }

    /// Pre-run cost projection for `text`.
    pub fn estimate_cost(&self, text: &str) -> CostReport {
        self.pricing.project(word_count(text))
    }

    pub fn service_info(&self) -> ServiceInfo {
        let model = self.pipeline.model();

        ServiceInfo {
            status: "healthy".into(),
            service: Self::SERVICE_NAME.into(),
            model_id: model.model_id().into(),
            region: model.region().map(String::from),
            model_configured: model.is_available(),
        }
    }

    async fn run(
        &self,
        request: SummarizeRequest,
        started: Instant,
    ) -> Result<SummarizeResponse, Error> {
        let request = SummarizationRequest::try_from(request)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected summarization request"))?;

        let result = self.pipeline.summarize(&request).await?;

        let processing_time = (started.elapsed().as_secs_f64() * 100.0).round() / 100.0;
        let cost_estimate = self.pricing.cost(&result.tally);
        tracing::info!(
            processing_time,
            chunks_processed = result.chunks_processed,
            input_tokens = cost_estimate.input_tokens,
            output_tokens = cost_estimate.output_tokens,
            total_cost_usd = cost_estimate.total_cost_usd,
            "Summarization completed"
        );

        Ok(SummarizeResponse {
            original_length: word_count(&request.text),
            summary_length: word_count(&result.summary),
            detected_language: result.language,
            processing_time,
            model_used: self.pipeline.model().model_id().to_string(),
            chunks_processed: result.chunks_processed,
            cost_estimate,
            summary: result.summary,
        })
    }
}
