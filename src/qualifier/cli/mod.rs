//! # CLI Layer
//!
//! This is **one possible UI client** for qualifier. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! - `setup.rs`: clap arguments and tracing subscriber
//! - `commands.rs`: context wiring and the per-line loop
//! - `print.rs`: turning a `CmdResult` into terminal output

mod commands;
mod print;
mod setup;

pub use commands::run;
