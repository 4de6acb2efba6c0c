//! Language/region tag handling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel tag the annotation service reports when it could not determine
/// a language.
const UNDETERMINED_TAG: &str = "und";

/// An opaque language/region tag (e.g. "en", "de-DE").
///
/// The pipeline only constructs tags from strings and passes them through;
/// no BCP 47 validation beyond non-emptiness is performed here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag, rejecting empty tags.
    pub fn new(tag: impl Into<String>) -> Result<Self, LocaleParseError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(LocaleParseError::Empty);
        }
        Ok(Self(tag))
    }

    /// Map a per-annotation locale tag to an optional locale.
    ///
    /// The annotation service reports an empty string or `"und"` when the
    /// language is undetermined; both map to `None`. Any other tag is
    /// carried through unchanged.
    pub fn from_annotation_tag(tag: &str) -> Option<Self> {
        if tag.is_empty() || tag == UNDETERMINED_TAG {
            None
        } else {
            Some(Self(tag.to_string()))
        }
    }

    /// The English tag.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// The raw tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Error)]
pub enum LocaleParseError {
    #[error("Locale tag cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap().as_str(), "en");
        assert_eq!("de-DE".parse::<Locale>().unwrap().as_str(), "de-DE");
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_annotation_tag_undetermined() {
        assert_eq!(Locale::from_annotation_tag(""), None);
        assert_eq!(Locale::from_annotation_tag("und"), None);
    }

    #[test]
    fn test_annotation_tag_carried_through() {
        let locale = Locale::from_annotation_tag("fr").unwrap();
        assert_eq!(locale.as_str(), "fr");
    }

    #[test]
    fn test_locale_display() {
        assert_eq!("en-US".parse::<Locale>().unwrap().to_string(), "en-US");
    }

    #[test]
    fn test_locale_serde_transparent() {
        let locale: Locale = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(locale.as_str(), "nl");
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"nl\"");
    }
}
