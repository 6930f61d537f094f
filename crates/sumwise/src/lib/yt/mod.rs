pub mod transcript;

pub use transcript::TranscriptClient;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{error::TranscriptError, parser::VideoRef};

/// Plain-text transcript of one video, as returned by the transcript service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub transcript_text: String,
    pub language: String,
    pub video_id: String,
}

pub trait TranscriptFetcher {
    fn fetch_transcript(
        &self,
        video: &VideoRef,
    ) -> impl Future<Output = Result<Transcript, TranscriptError>> + Send;
}

/// Stand-in for deployments without a transcript service.
impl TranscriptFetcher for () {
    async fn fetch_transcript(&self, _video: &VideoRef) -> Result<Transcript, TranscriptError> {
        Err(TranscriptError::NotConfigured)
    }
}

impl<T: TranscriptFetcher + Sync> TranscriptFetcher for Option<T> {
    async fn fetch_transcript(&self, video: &VideoRef) -> Result<Transcript, TranscriptError> {
        match self {
            Some(fetcher) => fetcher.fetch_transcript(video).await,
            None => Err(TranscriptError::NotConfigured),
        }
    }
}
