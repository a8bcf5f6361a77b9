//! # Qualifier Architecture
//!
//! Qualifier collects quotes typed as one-line commands and keeps a
//! deduplicated, ordered list of them. A quote can be stored as typed,
//! uwu-ified, or turned into pig latin. It is a library first; the binary is
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints output, sets up logging      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line (parser.rs) and dispatches it              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds quotes (model.rs -> transform.rs)                 │
//! │  - Turns duplicates and warnings into messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - QuoteStore trait, InMemoryStore                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Command Language
//!
//! ```text
//! quote "text"            store as typed
//! quote uwu "text"        l/r -> w, stutter word-initial u
//! quote piglatin "text"   pig latin, sentence cased
//! quote list              markdown bullet list of everything stored
//! ```
//!
//! Quotes are limited to 50 characters before and after transforming.
//!
//! ## Errors and Advisories
//!
//! Everything fallible returns [`error::Result`]. A duplicate quote is not a
//! failure at the command level: `commands::add` reports it as an info
//! message. Likewise an uwu quote that only fits without the stutter is stored
//! with a warning message attached.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`parser`]: Command line grammar
//! - [`commands`]: Business logic for `add` and `list`
//! - [`model`]: `Mode` and `Quote`
//! - [`transform`]: The text transforms
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
pub mod transform;
