pub mod chunker;
pub mod config;
pub mod cost;
mod error;
pub mod language;
mod llm;
pub mod parser;
pub mod pipeline;
mod processor;
pub mod prompt;
pub mod tokens;
pub mod tracing;
pub mod types;
pub mod yt;

pub use error::{Error, ModelError, TranscriptError};
pub use llm::{bedrock, invoker::ModelInvoker};
pub use pipeline::{SummarizationPipeline, SummarizationRequest, SummarizationResult};
pub use processor::{builder::SummaryProcessorBuilder, SummaryProcessor};
