//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend, PdfDocument};

/// What a [`MockBackend`] page returns when its text is requested.
#[derive(Clone, Debug)]
pub enum MockPage {
    /// Return this text (may be empty or whitespace).
    Text(String),
    /// Fail with an extraction error carrying this message.
    Fail(String),
}

/// A hand-rolled backend implementing [`PdfBackend`] for tests.
///
/// Every path opens to the same fixed page list, unless the backend was
/// built with [`unopenable`](MockBackend::unopenable). Page extraction calls
/// are counted across all opened documents.
pub struct MockBackend {
    pages: Vec<MockPage>,
    open_error: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Create a backend whose documents contain `pages`, in order.
    pub fn new(pages: Vec<MockPage>) -> Self {
        Self {
            pages,
            open_error: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a backend that refuses to open anything.
    pub fn unopenable(message: &str) -> Self {
        Self {
            pages: Vec::new(),
            open_error: Some(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of page extraction calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PdfBackend for MockBackend {
    fn open(&self, _path: &Path) -> Result<Box<dyn PdfDocument>, BackendError> {
        if let Some(ref msg) = self.open_error {
            return Err(BackendError::OpenError(msg.clone()));
        }
        Ok(Box::new(MockDocument {
            pages: self.pages.clone(),
            calls: Arc::clone(&self.calls),
        }))
    }
}

struct MockDocument {
    pages: Vec<MockPage>,
    calls: Arc<AtomicUsize>,
}

impl PdfDocument for MockDocument {
    fn page_count(&self) -> Result<usize, BackendError> {
        Ok(self.pages.len())
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(index) {
            Some(MockPage::Text(text)) => Ok(text.clone()),
            Some(MockPage::Fail(msg)) => Err(BackendError::ExtractionError(msg.clone())),
            None => Err(BackendError::ExtractionError(format!(
                "page index {index} out of range"
            ))),
        }
    }
}
