use crate::{
    error::TranscriptError,
    parser::VideoRef,
    yt::{Transcript, TranscriptFetcher},
};

/// HTTP client for the transcript service (`GET {base}/transcript?video_id=`).
#[derive(Debug, Clone)]
pub struct TranscriptClient {
    client: reqwest::Client,
    base_url: String,
}

impl TranscriptClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl TranscriptFetcher for TranscriptClient {
    #[tracing::instrument(skip_all, fields(video_id = %video))]
    async fn fetch_transcript(&self, video: &VideoRef) -> Result<Transcript, TranscriptError> {
        let resp = self
            .client
            .get(format!("{}/transcript", self.base_url))
            .query(&[("video_id", &**video)])
            .header("Accept", "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptError::Api { status, message });
        }

        let transcript = resp.json::<Transcript>().await?;

        if transcript.transcript_text.trim().is_empty() {
            tracing::warn!("Transcript service returned an empty transcript");
            return Err(TranscriptError::Empty {
                video_id: video.to_string(),
            });
        }

        Ok(transcript)
    }
}
