use super::QuoteStore;
use crate::error::{QualifierError, Result};
use crate::model::Quote;

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    quotes: Vec<Quote>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains_rendered(&self, rendered: &str) -> bool {
        self.quotes.iter().any(|q| q.rendered() == rendered)
    }
}

impl QuoteStore for InMemoryStore {
    fn add_quote(&mut self, quote: Quote) -> Result<()> {
        if self.contains_rendered(quote.rendered()) {
            tracing::debug!(rendered = quote.rendered(), "rejecting duplicate quote");
            return Err(QualifierError::Duplicate(quote.rendered().to_string()));
        }

        tracing::debug!(
            rendered = quote.rendered(),
            mode = %quote.mode(),
            "storing quote"
        );
        self.quotes.push(quote);
        Ok(())
    }

    fn list_quotes(&self) -> Result<Vec<String>> {
        Ok(self
            .quotes
            .iter()
            .map(|q| q.rendered().to_string())
            .collect())
    }

    fn len(&self) -> usize {
        self.quotes.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Mode;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_quotes(mut self, count: usize) -> Self {
            for i in 0..count {
                let quote = Quote::new(format!("Test quote {}", i + 1), Mode::Normal).unwrap();
                self.store.add_quote(quote).unwrap();
            }
            self
        }

        pub fn with_quote(mut self, raw: &str, mode: Mode) -> Self {
            let quote = Quote::new(raw, mode).unwrap();
            self.store.add_quote(quote).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Mode;

    #[test]
    fn starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list_quotes().unwrap().is_empty());
    }

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new()
            .with_quote("Hello", Mode::Normal)
            .with_quote("World", Mode::Normal)
            .with_quote("apple", Mode::PigLatin)
            .store;

        assert_eq!(
            store.list_quotes().unwrap(),
            vec!["Hello", "World", "Appleway"]
        );
    }

    #[test]
    fn rejects_duplicate_rendered_text() {
        let mut store = StoreFixture::new().with_quote("Hello", Mode::Normal).store;

        let err = store
            .add_quote(Quote::new("Hello", Mode::Normal).unwrap())
            .unwrap_err();
        assert!(matches!(err, QualifierError::Duplicate(ref s) if s == "Hello"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_check_uses_rendered_text() {
        // Different raw text, same rendering
        let mut store = StoreFixture::new().with_quote("Hewwo", Mode::Normal).store;
        let err = store
            .add_quote(Quote::new("Hello", Mode::Uwu).unwrap())
            .unwrap_err();
        assert!(matches!(err, QualifierError::Duplicate(_)));

        // Same raw text, different rendering
        store
            .add_quote(Quote::new("Hello", Mode::Normal).unwrap())
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut store = StoreFixture::new().with_quote("hello", Mode::Normal).store;
        store
            .add_quote(Quote::new("Hello", Mode::Normal).unwrap())
            .unwrap();
        assert_eq!(store.list_quotes().unwrap(), vec!["hello", "Hello"]);
    }

    #[test]
    fn fixture_with_quotes() {
        let store = StoreFixture::new().with_quotes(3).store;
        assert_eq!(store.len(), 3);
        assert_eq!(store.list_quotes().unwrap()[2], "Test quote 3");
    }
}
