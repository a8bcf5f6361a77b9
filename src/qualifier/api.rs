//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! UI. It owns the store it was given and the length limit to enforce.
//!
//! The API:
//! - **Parses** raw command lines (see [`crate::parser`])
//! - **Dispatches** to `commands::add` or `commands::list`
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `QualifierApi<S: QuoteStore>` is generic over the backend so tests and
//! embedders can bring their own store.

use crate::commands;
use crate::config::QualifierConfig;
use crate::error::Result;
use crate::model::Mode;
use crate::parser::{self, Command};
use crate::store::QuoteStore;
use crate::transform::MAX_QUOTE_LENGTH;

pub struct QualifierApi<S: QuoteStore> {
    store: S,
    limit: usize,
}

impl<S: QuoteStore> QualifierApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            limit: MAX_QUOTE_LENGTH,
        }
    }

    pub fn with_config(store: S, config: &QualifierConfig) -> Self {
        Self {
            store,
            limit: config.max_length,
        }
    }

    /// Parses and executes one command line.
    pub fn run_command(&mut self, line: &str) -> Result<commands::CmdResult> {
        let command = parser::parse(line)?;
        tracing::debug!(?command, "dispatching command");

        match command {
            Command::Add { mode, text } => self.add_quote(&text, mode),
            Command::List => self.list_quotes(),
        }
    }

    pub fn add_quote(&mut self, raw: &str, mode: Mode) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, raw, mode, self.limit)
    }

    pub fn list_quotes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
