/// Top-level failure of a summarization run.
///
/// Validation failures are caller-fixable and never retried. Model and
/// transcript failures come from upstream services and abort the run as a
/// unit; no partial result is returned alongside them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Whether the caller can fix this by changing the request.
    pub fn is_caller_fixable(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("HTTP error: {0}")]
    Body(#[from] reqwest::Error),
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response format: {0}")]
    MalformedResponse(String),
    #[error("Response exceeded the output budget of {max_output_tokens} tokens")]
    OutputBudgetExceeded { max_output_tokens: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Transcript for video {video_id} is empty")]
    Empty { video_id: String },
    #[error("No transcript service configured")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_is_caller_fixable() {
        assert!(Error::validation("too short").is_caller_fixable());
        assert!(!Error::from(ModelError::MalformedResponse("no choices".into())).is_caller_fixable());
        assert!(!Error::from(TranscriptError::NotConfigured).is_caller_fixable());
    }

    #[test]
    fn messages_distinguish_origin() {
        let err = Error::from(ModelError::Api {
            status: 503,
            message: "unavailable".into(),
        });
        assert_eq!(err.to_string(), "Model error: API error: 503 - unavailable");

        let err = Error::validation("Text is too short");
        assert_eq!(err.to_string(), "Validation error: Text is too short");
    }
}
