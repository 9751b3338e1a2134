use std::path::Path;

use crate::{ExtractError, ExtractionResult, PageOutcome, PageText};

/// First line of every report.
pub const REPORT_TITLE: &str = "PDF TEXT EXTRACTION RESULTS";

/// Body written for a page with no text.
pub const NO_TEXT_MARKER: &str = "(No text)";

fn page_block(page: &PageText) -> String {
    let body = match &page.outcome {
        PageOutcome::Text(text) => text.clone(),
        PageOutcome::Empty => NO_TEXT_MARKER.to_string(),
        PageOutcome::Error(_) => page.error_message().unwrap_or_default(),
    };
    format!("--- PAGE {} ---\n{}", page.number, body)
}

/// Render the full report: banner, then one block per page separated by a
/// blank line.
pub fn render_report(result: &ExtractionResult) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    let blocks: Vec<String> = result.pages.iter().map(page_block).collect();
    out.push_str(&blocks.join("\n\n"));
    out
}

/// Write the rendered report to `path` as UTF-8, replacing any existing file.
pub fn write_report(path: &Path, result: &ExtractionResult) -> Result<(), ExtractError> {
    let content = render_report(result);
    std::fs::write(path, &content).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        pages = result.pages.len(),
        bytes = content.len(),
        "report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(pages: Vec<PageOutcome>) -> ExtractionResult {
        let mut result = ExtractionResult::new("doc.pdf");
        result.pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, outcome)| PageText {
                number: i + 1,
                outcome,
            })
            .collect();
        result
    }

    #[test]
    fn text_and_error_blocks() {
        let result = result_with(vec![
            PageOutcome::Text("Hello".into()),
            PageOutcome::Error("bad font".into()),
        ]);
        assert_eq!(
            render_report(&result),
            "PDF TEXT EXTRACTION RESULTS\n\
             ==================================================\n\n\
             --- PAGE 1 ---\nHello\n\n\
             --- PAGE 2 ---\nError extracting page 2: bad font"
        );
    }

    #[test]
    fn empty_page_uses_marker() {
        let result = result_with(vec![PageOutcome::Empty]);
        assert!(render_report(&result).ends_with("--- PAGE 1 ---\n(No text)"));
    }

    #[test]
    fn zero_pages_is_banner_only() {
        let result = result_with(Vec::new());
        assert_eq!(
            render_report(&result),
            format!("{}\n{}\n\n", REPORT_TITLE, "=".repeat(50))
        );
    }

    #[test]
    fn text_is_written_as_extracted() {
        let result = result_with(vec![PageOutcome::Text("line one\nline two\n".into())]);
        assert!(render_report(&result).ends_with("--- PAGE 1 ---\nline one\nline two\n"));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content that is much longer than the report").unwrap();

        let result = result_with(vec![PageOutcome::Text("fresh".into())]);
        write_report(&path, &result).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        write_report(&path, &result).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, render_report(&result));
        assert_eq!(first, second);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_report(&path, &result_with(Vec::new())).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
        assert!(err.to_string().contains("out.txt"));
    }
}
