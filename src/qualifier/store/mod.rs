//! # Storage Layer
//!
//! The [`QuoteStore`] trait is the only thing the command layer knows about
//! where quotes live. Stores are ordered and deduplicated on the rendered
//! text; there is no removal.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: process-lifetime storage. Nothing survives a
//!   restart.
//!
//! Stores are owned by whoever drives them (normally [`crate::api::QualifierApi`]).
//! Adding needs `&mut self`, so the check-then-append in `add_quote` cannot
//! interleave with another caller. Sharing a store across threads means
//! wrapping the owner in a `Mutex`.

use crate::error::Result;
use crate::model::Quote;

pub mod memory;

pub trait QuoteStore {
    /// Append a quote. Fails with `Duplicate` if its rendered text is already stored.
    fn add_quote(&mut self, quote: Quote) -> Result<()>;

    /// Rendered texts in insertion order
    fn list_quotes(&self) -> Result<Vec<String>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
