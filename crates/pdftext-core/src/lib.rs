use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod backend;
pub mod config_file;
pub mod discover;
pub mod extract;
pub mod mock;
pub mod report;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend, PdfDocument};
pub use discover::{Discovery, locate_pdf};
pub use extract::extract_document;
pub use report::{render_report, write_report};

/// File processed when no input is given explicitly.
pub const DEFAULT_TARGET: &str = "Anti-Bot TLS Fingerprint Task v3.pdf";

/// Report file written into the working directory by default.
pub const DEFAULT_OUTPUT: &str = "pdf_extracted_text.txt";

/// The line recorded in place of a page's text when extraction fails.
pub fn page_error_message(number: usize, message: &str) -> String {
    format!("Error extracting page {number}: {message}")
}

/// What happened when extracting the text of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Text with at least one non-whitespace character, kept as extracted.
    Text(String),
    /// The backend returned nothing, or only whitespace.
    Empty,
    /// The backend failed on this page.
    Error(String),
}

impl PageOutcome {
    /// Map a raw backend result onto an outcome.
    pub fn classify<E: fmt::Display>(raw: Result<String, E>) -> Self {
        match raw {
            Ok(text) if text.trim().is_empty() => PageOutcome::Empty,
            Ok(text) => PageOutcome::Text(text),
            Err(e) => PageOutcome::Error(e.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageOutcome::Error(_))
    }
}

/// One entry of an [`ExtractionResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number.
    pub number: usize,
    pub outcome: PageOutcome,
}

impl PageText {
    /// The error line recorded for a failed page.
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            PageOutcome::Error(msg) => Some(page_error_message(self.number, msg)),
            _ => None,
        }
    }
}

/// Ordered per-page outcomes of one run. One entry per page, numbered
/// `1..=N` without gaps.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub source: PathBuf,
    pub pages: Vec<PageText>,
}

impl ExtractionResult {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            pages: Vec::new(),
        }
    }

    pub fn failed_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.outcome.is_error()).count()
    }

    pub fn empty_pages(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| p.outcome == PageOutcome::Empty)
            .count()
    }
}

/// Progress events emitted while a document is processed.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// About to open the document.
    Opening { path: PathBuf },
    /// The document is open and its page count is known.
    Opened { path: PathBuf, total_pages: usize },
    /// A page has been processed.
    Page {
        number: usize,
        total: usize,
        outcome: PageOutcome,
    },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extract every page of `input` and write the report to `output`.
///
/// Page failures are recorded in the report; only document-level failures
/// (open, page count, write) come back as errors.
pub fn run<F>(
    backend: &dyn PdfBackend,
    input: &Path,
    output: &Path,
    progress: F,
) -> Result<ExtractionResult, ExtractError>
where
    F: FnMut(ProgressEvent),
{
    let result = extract_document(backend, input, progress)?;
    write_report(output, &result)?;
    Ok(result)
}
