use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use pdftext_core::{DEFAULT_OUTPUT, DEFAULT_TARGET, Discovery, config_file};
use pdftext_pdf_mupdf::MupdfBackend;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Extract the text of a PDF page by page into a plain-text file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// PDF to extract. Without it, the default target is used, falling back
    /// to the first .pdf file in the current directory
    input: Option<PathBuf>,

    /// Path of the text file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let config = config_file::load_config();
    let explicit_input = cli
        .input
        .or_else(|| std::env::var("PDFTEXT_INPUT").ok().map(PathBuf::from));
    let target = config.target().unwrap_or(DEFAULT_TARGET).to_string();
    let output_path = cli
        .output
        .or_else(|| std::env::var("PDFTEXT_OUTPUT").ok().map(PathBuf::from))
        .or_else(|| config.output_path().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let color = ColorMode(!cli.no_color && config.color().unwrap_or(true));

    let mut stdout = std::io::stdout().lock();

    let input = match explicit_input {
        Some(path) => {
            if !path.exists() {
                output::print_not_found(&mut stdout, &path, color)?;
                return Ok(());
            }
            path
        }
        None => match pdftext_core::locate_pdf(Path::new("."), &target)? {
            Discovery::Found(path) => path,
            Discovery::Fallback(path) => {
                output::print_not_found(&mut stdout, Path::new(&target), color)?;
                output::print_scanning(&mut stdout)?;
                output::print_found(&mut stdout, &path, color)?;
                path
            }
            Discovery::NotFound => {
                output::print_not_found(&mut stdout, Path::new(&target), color)?;
                output::print_scanning(&mut stdout)?;
                return Ok(());
            }
        },
    };

    extract(&input, &output_path, color, &mut stdout)?;
    Ok(())
}

/// Run the extraction and report any document-level failure on the console.
/// Such failures end the run but are not a process error.
fn extract(
    input: &Path,
    output_path: &Path,
    color: ColorMode,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    let backend = MupdfBackend::new();

    let result = pdftext_core::run(&backend, input, output_path, |event| {
        let _ = output::print_progress(&mut *w, &event, color);
        let _ = w.flush();
    });

    match result {
        Ok(extraction) => {
            tracing::info!(
                input = %extraction.source.display(),
                output = %output_path.display(),
                pages = extraction.pages.len(),
                empty = extraction.empty_pages(),
                failed = extraction.failed_pages(),
                "extraction finished"
            );
            output::print_saved(w, output_path, color)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "extraction aborted");
            output::print_error(w, &e, color)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
