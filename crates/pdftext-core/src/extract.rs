use std::path::Path;

use crate::{BackendError, ExtractionResult, PageOutcome, PageText, PdfBackend, ProgressEvent};

/// Open `path` with `backend` and extract every page in order.
///
/// A page that fails to extract is recorded as [`PageOutcome::Error`] and the
/// loop moves on. Failing to open the document or read its page count aborts
/// the whole run.
pub fn extract_document<F>(
    backend: &dyn PdfBackend,
    path: &Path,
    mut progress: F,
) -> Result<ExtractionResult, BackendError>
where
    F: FnMut(ProgressEvent),
{
    progress(ProgressEvent::Opening {
        path: path.to_path_buf(),
    });

    let document = backend.open(path)?;
    let total = document.page_count()?;
    tracing::info!(path = %path.display(), pages = total, "opened document");

    progress(ProgressEvent::Opened {
        path: path.to_path_buf(),
        total_pages: total,
    });

    let mut result = ExtractionResult::new(path);
    result.pages.reserve(total);

    for index in 0..total {
        let number = index + 1;
        let outcome = PageOutcome::classify(document.page_text(index));

        match &outcome {
            PageOutcome::Text(text) => {
                tracing::debug!(page = number, chars = text.chars().count(), "page extracted")
            }
            PageOutcome::Empty => tracing::debug!(page = number, "no text on page"),
            PageOutcome::Error(msg) => {
                tracing::warn!(page = number, error = %msg, "page extraction failed")
            }
        }

        progress(ProgressEvent::Page {
            number,
            total,
            outcome: outcome.clone(),
        });
        result.pages.push(PageText { number, outcome });
    }

    Ok(result)
}
