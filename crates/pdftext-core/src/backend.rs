use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    /// Displays the bare backend message; it is embedded verbatim in the
    /// per-page error marker.
    #[error("{0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF decoding backends.
///
/// Implementors own everything about the file format. The page loop, the
/// report layout and file discovery live in this crate and only ever see a
/// [`PdfDocument`].
pub trait PdfBackend: Send + Sync {
    /// Open the file at `path` as a page-indexed document.
    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, BackendError>;
}

/// An opened document. Pages are addressed by 0-based index.
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize, BackendError>;

    /// Extract the plain text of the page at `index`.
    fn page_text(&self, index: usize) -> Result<String, BackendError>;
}
