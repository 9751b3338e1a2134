use std::io;
use std::path::{Path, PathBuf};

/// How the input file was located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The requested target exists.
    Found(PathBuf),
    /// The target was missing; this is the first `.pdf` seen in the directory.
    Fallback(PathBuf),
    /// Neither the target nor any `.pdf` file exists.
    NotFound,
}

impl Discovery {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Discovery::Found(p) | Discovery::Fallback(p) => Some(p),
            Discovery::NotFound => None,
        }
    }
}

/// Case-sensitive `.pdf` suffix check, matching `report.pdf` but not
/// `REPORT.PDF`.
pub fn has_pdf_suffix(name: &str) -> bool {
    name.ends_with(".pdf")
}

/// First regular file in `dir` whose name ends in `.pdf`.
///
/// Order is whatever `read_dir` yields, which is platform-defined and not
/// stable across runs.
pub fn find_first_pdf(dir: &Path) -> io::Result<Option<PathBuf>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !has_pdf_suffix(name) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            continue;
        }
        return Ok(Some(PathBuf::from(name)));
    }
    Ok(None)
}

/// Resolve `target` inside `dir`, falling back to the first `.pdf` file.
///
/// Returned paths are relative to `dir`, the way they would be typed at a
/// shell opened there.
pub fn locate_pdf(dir: &Path, target: &str) -> io::Result<Discovery> {
    if dir.join(target).exists() {
        return Ok(Discovery::Found(PathBuf::from(target)));
    }
    tracing::debug!(wanted = target, dir = %dir.display(), "target missing, scanning for PDFs");
    Ok(match find_first_pdf(dir)? {
        Some(path) => Discovery::Fallback(path),
        None => Discovery::NotFound,
    })
}
