//! # Command Parser
//!
//! Turns one input line into a [`Command`]. The grammar is small enough to
//! walk by hand:
//!
//! ```text
//! command := "quote list"
//!          | "quote " [tag [" "]] open text close
//! tag     := any run of characters without whitespace or quote marks
//! open    := '"' | '“'
//! close   := '"' | '”'        (must be the last character of the line)
//! ```
//!
//! Opening and closing marks may come from different styles, so `“hi"` and
//! `"hi”` both parse. Unknown tags are not an error; they resolve to
//! [`Mode::Normal`].

use crate::error::{QualifierError, Result};
use crate::model::Mode;

const KEYWORD: &str = "quote";
const LIST: &str = "quote list";
const OPENING_QUOTES: [char; 2] = ['"', '“'];
const CLOSING_QUOTES: [char; 2] = ['"', '”'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { mode: Mode, text: String },
    List,
}

pub fn parse(line: &str) -> Result<Command> {
    if line == LIST {
        return Ok(Command::List);
    }

    parse_add(line).ok_or_else(|| QualifierError::InvalidCommand(line.to_string()))
}

fn parse_add(line: &str) -> Option<Command> {
    let rest = line.strip_prefix(KEYWORD)?.strip_prefix(' ')?;

    let open_at = rest.find(OPENING_QUOTES)?;
    let (prefix, quoted) = rest.split_at(open_at);
    let tag = parse_tag(prefix)?;

    let mut body = quoted.chars();
    body.next()?;
    let close = body.next_back()?;
    if !CLOSING_QUOTES.contains(&close) {
        return None;
    }

    let text = body.as_str();
    if text.contains('\n') {
        return None;
    }

    Some(Command::Add {
        mode: Mode::from_tag(tag),
        text: text.to_string(),
    })
}

/// `prefix` is everything between `quote ` and the opening mark.
/// `Some(None)` means no tag, `None` means the prefix is malformed.
fn parse_tag(prefix: &str) -> Option<Option<&str>> {
    let tag = prefix.strip_suffix(' ').unwrap_or(prefix);
    if tag.is_empty() {
        return Some(None);
    }
    if tag.contains(char::is_whitespace) || tag.contains(CLOSING_QUOTES) {
        return None;
    }
    Some(Some(tag))
}
