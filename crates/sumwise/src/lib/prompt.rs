use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    language::{ENGLISH, TURKISH},
};

/// Requested size of the final summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    fn instruction(&self) -> &'static str {
        match self {
            SummaryLength::Short => "a very short summary (2-3 paragraphs)",
            SummaryLength::Medium => "a detailed summary of medium length (4-6 paragraphs)",
            SummaryLength::Long => "a comprehensive, detailed summary that misses none of the main points",
        }
    }
}

impl FromStr for SummaryLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            other => Err(Error::validation(format!(
                "Invalid summary length {other:?}, expected one of: short, medium, long"
            ))),
        }
    }
}

fn format_instruction(bullet_points: bool) -> &'static str {
    if bullet_points {
        "Present the summary as bullet points."
    } else {
        "Present the summary as flowing paragraphs."
    }
}

fn language_instruction(language: &str) -> String {
    match language {
        TURKISH => "Write the summary in Turkish.".to_string(),
        ENGLISH => "Write the summary in English.".to_string(),
        other => format!("Write the summary in the same language as the text ({other})."),
    }
}

/// Builds the instruction block for one model call. The model is expected to
/// answer with the summary alone, after the closing `SUMMARY:` marker.
pub fn build_prompt(text: &str, length: SummaryLength, bullet_points: bool, language: &str) -> String {
    format!(
        "Summarize the following text.\n\
         \n\
         REQUIREMENTS:\n\
         - Prepare {length}\n\
         - {format}\n\
         - {language}\n\
         - Keep the main ideas and important details\n\
         - Avoid unnecessary repetition\n\
         - Use professional, clear language\n\
         \n\
         TEXT:\n\
         {text}\n\
         \n\
         SUMMARY:",
        length = length.instruction(),
        format = format_instruction(bullet_points),
        language = language_instruction(language),
    )
}

/// A caller-supplied prompt replaces the generated instructions entirely.
pub fn build_custom_prompt(custom_prompt: &str, text: &str) -> String {
    format!("{custom_prompt}\n\nTEXT:\n{text}")
}
