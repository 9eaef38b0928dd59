use super::{decode_lines, encode_all, report, DataStore};
use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::error::Result;
use crate::model::Product;
use std::path::PathBuf;

const MEMORY_PATH: &str = "<memory>";

/// In-memory storage for testing.
///
/// Holds the encoded text rather than the products, so reads and writes take the
/// same codec path as the file store. `None` stands for a file that does not exist.
pub struct InMemoryStore {
    contents: Option<String>,
    sink: Box<dyn DiagnosticSink>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            contents: None,
            sink: Box::new(NullSink),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw file contents, malformed lines and all.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn ensure_exists(&mut self) -> Result<()> {
        if self.contents.is_none() {
            self.contents = Some(String::new());
            report(
                self.sink.as_ref(),
                Diagnostic::FileCreated(PathBuf::from(MEMORY_PATH)),
            );
        }
        Ok(())
    }

    fn load_all(&self) -> Vec<Product> {
        match &self.contents {
            Some(text) => {
                let lines = text.lines().map(|l| Ok(l.to_string()));
                decode_lines(lines, self.sink.as_ref())
            }
            None => {
                report(
                    self.sink.as_ref(),
                    Diagnostic::FileMissing(PathBuf::from(MEMORY_PATH)),
                );
                Vec::new()
            }
        }
    }

    fn save_all(&mut self, products: &[Product]) -> Result<()> {
        self.contents = Some(encode_all(products)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Store pre-populated with `products`, saved through the codec.
    pub fn store_with(products: &[Product]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store
            .save_all(products)
            .expect("fixture products must be encodable");
        store
    }

    /// `[(1,"A",1,1.0), (2,"B",2,2.0), (3,"C",3,3.0)]`
    pub fn abc() -> Vec<Product> {
        vec![
            Product::new(1, "A", 1, 1.0),
            Product::new(2, "B", 2, 2.0),
            Product::new(3, "C", 3, 3.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    #[test]
    fn starts_missing() {
        let store = InMemoryStore::new();
        assert!(store.contents().is_none());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn ensure_exists_creates_once() {
        let sink = MemorySink::new();
        let mut store = InMemoryStore::new().with_sink(sink.clone());
        store.ensure_exists().unwrap();
        store.ensure_exists().unwrap();
        assert_eq!(store.contents(), Some(""));
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn save_writes_encoded_lines() {
        let mut store = InMemoryStore::new();
        store.save_all(&[Product::new(1, "Pen", 10, 2.5)]).unwrap();
        assert_eq!(store.contents(), Some("1,Pen,10,2.5\n"));
    }
}
