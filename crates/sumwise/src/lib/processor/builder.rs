use crate::{
    cost::Pricing, llm::invoker::ModelInvoker, pipeline::SummarizationPipeline,
    yt::TranscriptFetcher, SummaryProcessor,
};

pub struct SummaryProcessorBuilder<M = (), T = ()> {
    model: M,
    transcripts: T,
    pricing: Pricing,
}

impl SummaryProcessorBuilder {
    pub fn new() -> Self {
        Self {
            model: (),
            transcripts: (),
            pricing: Pricing::default(),
        }
    }
}

impl Default for SummaryProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, T> SummaryProcessorBuilder<M, T> {
    pub fn model<M2: ModelInvoker + Send + Sync>(self, model: M2) -> SummaryProcessorBuilder<M2, T> {
        SummaryProcessorBuilder {
            model,
            transcripts: self.transcripts,
            pricing: self.pricing,
        }
    }

    pub fn transcripts<T2: TranscriptFetcher + Send + Sync>(
        self,
        transcripts: T2,
    ) -> SummaryProcessorBuilder<M, T2> {
        SummaryProcessorBuilder {
            model: self.model,
            transcripts,
            pricing: self.pricing,
        }
    }

    pub fn pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }
}

impl<M, T> SummaryProcessorBuilder<M, T>
where
    M: ModelInvoker + Send + Sync,
    T: TranscriptFetcher + Send + Sync,
{
    pub fn build(self) -> SummaryProcessor<M, T> {
        SummaryProcessor {
            pipeline: SummarizationPipeline::new(self.model),
            transcripts: self.transcripts,
            pricing: self.pricing,
        }
    }
}
