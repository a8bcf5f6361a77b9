use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QualifierError, Result};
use crate::model::{Mode, Quote};
use crate::store::QuoteStore;

/// Builds a quote and stores it.
///
/// A duplicate is reported as an info message, not an error. Length and
/// no-op failures propagate and leave the store untouched.
pub fn run<S: QuoteStore>(
    store: &mut S,
    raw: &str,
    mode: Mode,
    limit: usize,
) -> Result<CmdResult> {
    let quote = Quote::with_limit(raw, mode, limit)?;
    let mut result = CmdResult::default();

    if let Some(warning) = quote.warning() {
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    match store.add_quote(quote.clone()) {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!(
                "Quote added: {}",
                quote.rendered()
            )));
            Ok(result.with_added_quote(quote))
        }
        Err(err @ QualifierError::Duplicate(_)) => {
            result.add_message(CmdMessage::info(err.to_string()));
            Ok(result)
        }
        Err(err) => Err(err),
    }
}
