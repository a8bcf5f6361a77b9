use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::QuoteStore;

const BULLET: &str = "- ";

pub fn run<S: QuoteStore>(store: &S) -> Result<CmdResult> {
    let quotes = store.list_quotes()?;
    let rendered = to_markdown(&quotes);
    Ok(CmdResult::default()
        .with_listed_quotes(quotes)
        .with_rendered(rendered))
}

/// One `- ` bullet per quote, newline separated. Empty input gives an empty string.
pub fn to_markdown<I: AsRef<str>>(quotes: &[I]) -> String {
    quotes
        .iter()
        .map(|q| format!("{BULLET}{}", q.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
