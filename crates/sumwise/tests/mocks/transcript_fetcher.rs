use std::sync::{Arc, Mutex};
use sumwise::{parser::VideoRef, yt::Transcript, yt::TranscriptFetcher, TranscriptError};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub transcript: Transcript,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(text: &str, language: &str) -> Self {
        Self {
            transcript: Transcript {
                transcript_text: text.to_string(),
                language: language.to_string(),
                video_id: String::new(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("", "")
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch_transcript(&self, video: &VideoRef) -> Result<Transcript, TranscriptError> {
        self.calls.lock().unwrap().push(video.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TranscriptError::Api {
                status: 502,
                message: msg.clone(),
            });
        }
        Ok(Transcript {
            video_id: video.to_string(),
            ..self.transcript.clone()
        })
    }
}
