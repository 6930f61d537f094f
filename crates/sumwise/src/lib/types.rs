use serde::{Deserialize, Serialize};

use crate::{
    cost::CostReport,
    error::Error,
    language::normalize_language,
    pipeline::SummarizationRequest,
    prompt::SummaryLength,
};

/// Options shared by text and video requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// `short`, `medium` or `long`; medium when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_points: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub options: SummaryOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSummarizeRequest {
    /// Video URL or bare video id.
    pub url: String,
    #[serde(flatten)]
    pub options: SummaryOptions,
}

impl TryFrom<SummarizeRequest> for SummarizationRequest {
    type Error = Error;

    fn try_from(
        SummarizeRequest {
            text,
            options:
                SummaryOptions {
                    language,
                    summary_length,
                    bullet_points,
                    custom_prompt,
                },
        }: SummarizeRequest,
    ) -> Result<Self, Self::Error> {
        let length = summary_length
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .map(str::parse::<SummaryLength>)
            .transpose()?
            .unwrap_or_default();

        Ok(SummarizationRequest {
            text: text.trim().to_string(),
            length,
            bullet_points: bullet_points.unwrap_or(false),
            language: normalize_language(language.as_deref())?,
            custom_prompt: custom_prompt.filter(|p| !p.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    /// Word count of the input.
    pub original_length: usize,
    /// Word count of the summary.
    pub summary_length: usize,
    pub detected_language: String,
    /// Seconds, rounded to two decimals.
    pub processing_time: f64,
    pub model_used: String,
    pub chunks_processed: usize,
    pub cost_estimate: CostReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub model_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_request() {
        let json = r#"{
            "text": "Some text",
            "language": "tr",
            "summary_length": "short",
            "bullet_points": true,
            "custom_prompt": "Be brief."
        }"#;

        let request = serde_json::from_str::<SummarizeRequest>(json).unwrap();
        assert_eq!(request.text, "Some text");
        assert_eq!(request.options.language.as_deref(), Some("tr"));
        assert_eq!(request.options.summary_length.as_deref(), Some("short"));
        assert_eq!(request.options.bullet_points, Some(true));
        assert_eq!(request.options.custom_prompt.as_deref(), Some("Be brief."));
    }

    #[test]
    fn defaults_apply_when_options_are_absent() {
        let request = serde_json::from_str::<SummarizeRequest>(r#"{"text": "  body  "}"#).unwrap();
        let request = SummarizationRequest::try_from(request).unwrap();

        assert_eq!(request.text, "body");
        assert_eq!(request.length, SummaryLength::Medium);
        assert!(!request.bullet_points);
        assert_eq!(request.language, None);
        assert_eq!(request.custom_prompt, None);
    }

    #[test]
    fn blank_custom_prompt_and_language_are_ignored() {
        let request = SummarizeRequest {
            text: "body".into(),
            options: SummaryOptions {
                language: Some("".into()),
                custom_prompt: Some("   ".into()),
                ..Default::default()
            },
        };
        let request = SummarizationRequest::try_from(request).unwrap();

        assert_eq!(request.language, None);
        assert_eq!(request.custom_prompt, None);
    }

    #[test]
    fn invalid_length_is_rejected() {
        let request = SummarizeRequest {
            text: "body".into(),
            options: SummaryOptions {
                summary_length: Some("enormous".into()),
                ..Default::default()
            },
        };
        let result = SummarizationRequest::try_from(request);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn response_serializes_wire_names() {
        let response = SummarizeResponse {
            summary: "Short.".into(),
            original_length: 120,
            summary_length: 1,
            detected_language: "en".into(),
            processing_time: 1.25,
            model_used: "model".into(),
            chunks_processed: 1,
            cost_estimate: CostReport {
                input_tokens: 10,
                output_tokens: 2,
                input_cost_usd: 0.00002,
                output_cost_usd: 0.000012,
                total_cost_usd: 0.000032,
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["detected_language"], "en");
        assert_eq!(value["chunks_processed"], 1);
        assert_eq!(value["cost_estimate"]["total_cost_usd"], 0.000032);
        assert_eq!(value["cost_estimate"]["input_tokens"], 10);
    }
}
