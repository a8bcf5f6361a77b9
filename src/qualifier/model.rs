use crate::error::{QualifierError, Result};
use crate::transform::{self, char_len, TransformWarning, MAX_QUOTE_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which transformation a quote goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Uwu,
    PigLatin,
}

impl Mode {
    /// Resolves an optional command tag. Anything unrecognised means `Normal`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Mode::Normal;
        };

        match tag.to_ascii_lowercase().as_str() {
            "uwu" => Mode::Uwu,
            "piglatin" => Mode::PigLatin,
            _ => Mode::Normal,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Uwu => "uwu",
            Mode::PigLatin => "piglatin",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A validated quote together with its rendered form.
///
/// Built once through [`Quote::new`] or [`Quote::with_limit`]; there are no
/// setters, so `rendered` always matches `mode` applied to `raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    raw: String,
    mode: Mode,
    rendered: String,
    warning: Option<TransformWarning>,
}

impl Quote {
    pub fn new(raw: impl Into<String>, mode: Mode) -> Result<Self> {
        Self::with_limit(raw, mode, MAX_QUOTE_LENGTH)
    }

    pub fn with_limit(raw: impl Into<String>, mode: Mode, limit: usize) -> Result<Self> {
        let raw = raw.into();
        if char_len(&raw) > limit {
            return Err(QualifierError::TooLong { limit });
        }

        let transformed = transform::apply(mode, &raw, limit)?;
        Ok(Self {
            raw,
            mode,
            rendered: transformed.text,
            warning: transformed.warning,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn warning(&self) -> Option<TransformWarning> {
        self.warning
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_known_tags() {
        assert_eq!(Mode::from_tag(Some("uwu")), Mode::Uwu);
        assert_eq!(Mode::from_tag(Some("piglatin")), Mode::PigLatin);
        assert_eq!(Mode::from_tag(Some("PigLatin")), Mode::PigLatin);
        assert_eq!(Mode::from_tag(Some("normal")), Mode::Normal);
    }

    #[test]
    fn mode_falls_back_to_normal() {
        assert_eq!(Mode::from_tag(None), Mode::Normal);
        assert_eq!(Mode::from_tag(Some("banana")), Mode::Normal);
        assert_eq!(Mode::from_tag(Some("")), Mode::Normal);
    }

    #[test]
    fn mode_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Mode::PigLatin).unwrap(), "\"piglatin\"");
        assert_eq!(Mode::Uwu.to_string(), "uwu");
    }

    #[test]
    fn quote_renders_through_mode() {
        let quote = Quote::new("the quick", Mode::PigLatin).unwrap();
        assert_eq!(quote.raw(), "the quick");
        assert_eq!(quote.mode(), Mode::PigLatin);
        assert_eq!(quote.rendered(), "Ethay ickquay");
        assert_eq!(quote.to_string(), "Ethay ickquay");
        assert_eq!(quote.warning(), None);
    }

    #[test]
    fn quote_of_fifty_chars_is_accepted() {
        let raw = "a".repeat(50);
        let quote = Quote::new(raw.clone(), Mode::Normal).unwrap();
        assert_eq!(quote.rendered(), raw);
    }

    #[test]
    fn quote_over_limit_fails_in_every_mode() {
        let raw = "l".repeat(51);
        for mode in [Mode::Normal, Mode::Uwu, Mode::PigLatin] {
            let err = Quote::new(raw.clone(), mode).unwrap_err();
            assert!(matches!(err, QualifierError::TooLong { limit: 50 }));
        }
    }

    #[test]
    fn quote_counts_characters_not_bytes() {
        let raw = "é".repeat(50);
        assert!(Quote::new(raw, Mode::Normal).is_ok());
    }

    #[test]
    fn quote_propagates_noop() {
        let err = Quote::new("abc", Mode::Uwu).unwrap_err();
        assert!(matches!(err, QualifierError::NoOp));
    }

    #[test]
    fn quote_carries_truncation_warning() {
        let raw = format!("{} up", "r".repeat(46));
        let quote = Quote::new(raw, Mode::Uwu).unwrap();
        assert_eq!(quote.warning(), Some(TransformWarning::Truncated));
        assert_eq!(quote.rendered(), format!("{} up", "w".repeat(46)));
    }

    #[test]
    fn quote_respects_custom_limit() {
        assert!(matches!(
            Quote::with_limit("hello", Mode::Normal, 4),
            Err(QualifierError::TooLong { limit: 4 })
        ));
        assert!(Quote::with_limit("hello", Mode::Normal, 5).is_ok());
    }
}
