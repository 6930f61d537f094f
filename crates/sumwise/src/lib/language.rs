use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

pub const TURKISH: &str = "tr";
pub const ENGLISH: &str = "en";

const TURKISH_DIACRITICS: &[char] = &['ç', 'ğ', 'ı', 'ö', 'ş', 'ü', 'Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü'];

/// More matches than this flips detection to Turkish.
const DIACRITIC_THRESHOLD: usize = 5;

static LANGUAGE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap()
});

/// Two-outcome heuristic: Turkish when the text carries more than a handful
/// of Turkish-specific letters, English otherwise. Callers that know the
/// language should pass it explicitly instead.
pub fn detect_language(text: &str) -> &'static str {
    let matches = text
        .chars()
        .filter(|c| TURKISH_DIACRITICS.contains(c))
        .count();

    if matches > DIACRITIC_THRESHOLD {
        TURKISH
    } else {
        ENGLISH
    }
}

/// Validates a caller-supplied language code.
///
/// Blank input means "not supplied" and yields `Ok(None)`. Anything that
/// doesn't look like a BCP-47 style tag (`tr`, `en`, `pt-BR`) is rejected.
pub fn normalize_language(code: Option<&str>) -> Result<Option<String>, Error> {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    if !LANGUAGE_CODE_RE.is_match(code) {
        return Err(Error::validation(format!(
            "Invalid language code: {code:?}"
        )));
    }

    Ok(Some(code.to_string()))
}
