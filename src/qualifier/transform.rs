//! # Transform Engine
//!
//! Pure text transformations applied to a quote according to its [`Mode`].
//!
//! Every transform takes the character limit it must respect and returns a
//! [`Transformed`] value. Hard failures (nothing to transform, output too long)
//! are errors; the one soft failure, uwu falling back to letter substitution
//! when the stutter would overflow the limit, travels as a
//! [`TransformWarning`] next to the text so callers can report it and carry on.
//!
//! Lengths are counted in `char`s, not bytes.

use crate::error::{QualifierError, Result};
use crate::model::Mode;
use std::fmt;

/// Default maximum length, in characters, of both the raw and the rendered quote.
pub const MAX_QUOTE_LENGTH: usize = 50;

/// Non-fatal advisories raised while transforming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformWarning {
    /// The uwu stutter would have exceeded the limit, so only letters were substituted.
    Truncated,
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformWarning::Truncated => {
                write!(f, "Quote too long, only partially transformed")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    pub warning: Option<TransformWarning>,
}

impl Transformed {
    fn clean(text: String) -> Self {
        Self {
            text,
            warning: None,
        }
    }
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Applies the transform selected by `mode`.
pub fn apply(mode: Mode, text: &str, limit: usize) -> Result<Transformed> {
    match mode {
        Mode::Normal => Ok(normal(text)),
        Mode::Uwu => uwu(text, limit),
        Mode::PigLatin => pig_latin(text, limit),
    }
}

pub fn normal(text: &str) -> Transformed {
    Transformed::clean(text.to_string())
}

/// `L`/`R` become `W` (case kept per letter), then every word-initial `u`
/// stutters (`up` -> `u-up`).
pub fn uwu(text: &str, limit: usize) -> Result<Transformed> {
    let substituted = substitute_liquids(text);
    let stuttered = stutter(&substituted);

    if stuttered == text {
        return Err(QualifierError::NoOp);
    }

    if char_len(&stuttered) > limit {
        tracing::debug!(
            limit,
            "uwu stutter exceeds limit, falling back to substitution only"
        );
        return Ok(Transformed {
            text: substituted,
            warning: Some(TransformWarning::Truncated),
        });
    }

    Ok(Transformed::clean(stuttered))
}

fn substitute_liquids(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'L' | 'R' => 'W',
            'l' | 'r' => 'w',
            other => other,
        })
        .collect()
}

fn stutter(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if matches!(c, 'u' | 'U') && !prev.is_some_and(is_word_char) {
            out.push(c);
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Moves each word's leading consonant cluster to its end and appends `ay`
/// (or `way` for words starting with a vowel), then sentence-cases the result.
pub fn pig_latin(text: &str, limit: usize) -> Result<Transformed> {
    let mut words = text.split_whitespace().map(pig_latin_word);

    let sentence = match words.next() {
        Some(first) => std::iter::once(sentence_case(&first))
            .chain(words)
            .collect::<Vec<_>>()
            .join(" "),
        None => String::new(),
    };

    if char_len(&sentence) > limit {
        return Err(QualifierError::TooLong { limit });
    }

    Ok(Transformed::clean(sentence))
}

fn pig_latin_word(word: &str) -> String {
    match consonant_prefix_len(word) {
        0 => format!("{word}way"),
        split => {
            let (head, tail) = word.split_at(split);
            format!("{tail}{head}ay")
        }
    }
}

/// Byte length of the leading non-vowel run. A `u` right after a `q` sticks
/// to the run, so `quick` splits as `qu` + `ick`.
fn consonant_prefix_len(word: &str) -> usize {
    let mut end = 0;
    let mut last = None;

    for (i, c) in word.char_indices() {
        if is_vowel(c) {
            if matches!(c, 'u' | 'U') && matches!(last, Some('q' | 'Q')) {
                end = i + c.len_utf8();
            }
            break;
        }
        end = i + c.len_utf8();
        last = Some(c);
    }

    end
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn sentence_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
