use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use pdftext_core::{PageOutcome, ProgressEvent, page_error_message};

/// Console marker for a page with no text. The report file uses the shorter
/// `(No text)`.
pub const NO_TEXT_CONSOLE: &str = "(No text found on this page)";

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a real-time progress event.
pub fn print_progress(
    w: &mut dyn Write,
    event: &ProgressEvent,
    color: ColorMode,
) -> std::io::Result<()> {
    match event {
        ProgressEvent::Opening { path } => {
            writeln!(w, "📄 Extracting text from: {}", path.display())?;
        }
        ProgressEvent::Opened { total_pages, .. } => {
            writeln!(w, "📃 Total pages: {}", total_pages)?;
            writeln!(w, "{}", "=".repeat(80))?;
        }
        ProgressEvent::Page {
            number, outcome, ..
        } => {
            writeln!(w)?;
            if color.enabled() {
                writeln!(w, "📖 {}", format!("PAGE {}", number).bold().cyan())?;
            } else {
                writeln!(w, "📖 PAGE {}", number)?;
            }
            writeln!(w, "{}", "-".repeat(50))?;
            match outcome {
                PageOutcome::Text(text) => writeln!(w, "{}", text)?,
                PageOutcome::Empty => {
                    if color.enabled() {
                        writeln!(w, "{}", NO_TEXT_CONSOLE.dimmed())?;
                    } else {
                        writeln!(w, "{}", NO_TEXT_CONSOLE)?;
                    }
                }
                PageOutcome::Error(msg) => {
                    let line = page_error_message(*number, msg);
                    if color.enabled() {
                        writeln!(w, "{}", line.red())?;
                    } else {
                        writeln!(w, "{}", line)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Print where the report went.
pub fn print_saved(w: &mut dyn Write, output: &Path, color: ColorMode) -> std::io::Result<()> {
    writeln!(w)?;
    if color.enabled() {
        writeln!(
            w,
            "💾 All text saved to: {}",
            output.display().to_string().green()
        )
    } else {
        writeln!(w, "💾 All text saved to: {}", output.display())
    }
}

/// Print a document-level failure. The run ends after this.
pub fn print_error(
    w: &mut dyn Write,
    err: &dyn std::fmt::Display,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "❌ {}", format!("Error: {}", err).red())
    } else {
        writeln!(w, "❌ Error: {}", err)
    }
}

pub fn print_not_found(w: &mut dyn Write, target: &Path, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "❌ {}",
            format!("PDF file not found: {}", target.display()).red()
        )
    } else {
        writeln!(w, "❌ PDF file not found: {}", target.display())
    }
}

pub fn print_scanning(w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "📁 Looking for PDF files...")
}

pub fn print_found(w: &mut dyn Write, path: &Path, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "   Found: {}", path.display().to_string().green())
    } else {
        writeln!(w, "   Found: {}", path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const PLAIN: ColorMode = ColorMode(false);

    fn render(event: ProgressEvent) -> String {
        let mut buf = Vec::new();
        print_progress(&mut buf, &event, PLAIN).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn opened_prints_count_and_rule() {
        let out = render(ProgressEvent::Opened {
            path: PathBuf::from("a.pdf"),
            total_pages: 3,
        });
        assert_eq!(out, format!("📃 Total pages: 3\n{}\n", "=".repeat(80)));
    }

    #[test]
    fn text_page_block() {
        let out = render(ProgressEvent::Page {
            number: 1,
            total: 2,
            outcome: PageOutcome::Text("Hello".into()),
        });
        assert_eq!(out, format!("\n📖 PAGE 1\n{}\nHello\n", "-".repeat(50)));
    }

    #[test]
    fn empty_page_uses_console_marker() {
        let out = render(ProgressEvent::Page {
            number: 4,
            total: 4,
            outcome: PageOutcome::Empty,
        });
        assert!(out.ends_with("(No text found on this page)\n"));
    }

    #[test]
    fn failed_page_shows_number_and_message() {
        let out = render(ProgressEvent::Page {
            number: 2,
            total: 2,
            outcome: PageOutcome::Error("bad font".into()),
        });
        assert!(out.ends_with("Error extracting page 2: bad font\n"));
    }

    #[test]
    fn not_found_and_scan_messages() {
        let mut buf = Vec::new();
        print_not_found(&mut buf, Path::new("x.pdf"), PLAIN).unwrap();
        print_scanning(&mut buf).unwrap();
        print_found(&mut buf, Path::new("y.pdf"), PLAIN).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "❌ PDF file not found: x.pdf\n📁 Looking for PDF files...\n   Found: y.pdf\n"
        );
    }

    #[test]
    fn error_line() {
        let mut buf = Vec::new();
        print_error(&mut buf, &"file is damaged", PLAIN).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "❌ Error: file is damaged\n");
    }
}
