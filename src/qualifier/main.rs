//! # Qualifier CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and turns its outcome into an exit code.
//!
//! Each positional argument is one command line (`quote uwu "hello"`,
//! `quote list`, ...). Without arguments, command lines are read from stdin
//! until EOF, so a whole session shares one in-memory store:
//!
//! ```text
//! $ qualifier 'quote "Hello"' 'quote piglatin "the quick"' 'quote list'
//! - Hello
//! - Ethay ickquay
//! ```
//!
//! A failing command is reported on stderr and the remaining commands still
//! run. The exit code is 1 when any command failed.

mod cli;

fn main() {
    match cli::run() {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
