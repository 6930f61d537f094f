//! # Video reference parser
//!
//! Turns whatever the caller pasted (a bare id, a watch link, a short link)
//! into a YouTube video id the transcript service understands.

use std::{fmt, ops::Deref, sync::LazyLock};

use regex::Regex;

use crate::error::Error;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:(?:www|m)\.)?(?:youtube\.com/(?:watch\?(?:[^#]*&)?v=|shorts/|embed/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/].*)?$",
    )
    .unwrap()
});

/// A validated YouTube video id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef(String);

impl VideoRef {
    /// Parses a bare video id or a YouTube URL.
    ///
    /// # Returns
    /// * `Ok(VideoRef)` holding the 11-character video id.
    /// * `Err(Error::Validation)` if no video id can be extracted.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let input = input.trim();

        if VIDEO_ID_RE.is_match(input) {
            return Ok(VideoRef(input.to_string()));
        }

        VIDEO_URL_RE
            .captures(input)
            .and_then(|cap| cap.get(1))
            .map(|m| VideoRef(m.as_str().to_string()))
            .ok_or_else(|| Error::validation(format!("Not a YouTube video reference: {input:?}")))
    }
}

impl Deref for VideoRef {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
