use std::fs;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use tocline::toc::{self, payload};
use tocline::{format, read, replay, MemoryView, Result, TocConfig, TocError, TrackerSession};

/// Build tables of contents from markdown and replay scroll tracking.
#[derive(Parser, Debug)]
#[command(name = "tocline", version, about, long_about = None)]
struct Cli {
    /// TOML file overriding depth and observed-level settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the table of contents of one or more markdown files.
    Toc {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Emit the payload a page embeds instead of an outline.
        #[arg(long)]
        json: bool,
    },
    /// Replay visibility and click events against a document.
    Replay {
        file: PathBuf,
        /// JSON-lines event file. Reads stdin when omitted.
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Print shell completions.
    Completions { shell: Shell },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => TocConfig::load(path)?,
        None => TocConfig::default(),
    };

    match cli.command {
        Command::Toc { files, json } => {
            let rendered: Vec<Result<String>> = files
                .par_iter()
                .map(|path| render_toc(path, json, &config))
                .collect();
            let mut out = io::stdout().lock();
            for r in rendered {
                emit(&mut out, &r?)?;
            }
            Ok(())
        }
        Command::Replay { file, events } => {
            let sections = read::read_sections(&file)?;
            let tree = toc::from_sections(&sections, &config);
            // Round-trip through the embedded form, as a page load would.
            let raw = payload::encode(&tree)?;
            let mut session = TrackerSession::from_payload(Some(raw.as_str()), sections, config);
            if !session.is_tracking() {
                tracing::warn!(
                    file = %file.display(),
                    "no headings to track, replay will ignore every section"
                );
            }
            let mut view = MemoryView::default();

            let trace = match events {
                Some(path) => {
                    let f = fs::File::open(&path).map_err(|e| TocError::io(&path, e))?;
                    replay::run(&mut session, &mut view, BufReader::new(f))?
                }
                None => replay::run(&mut session, &mut view, io::stdin().lock())?,
            };

            let mut out = io::stdout().lock();
            for line in trace {
                emit(&mut out, &line)?;
            }
            Ok(())
        }
        Command::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tocline", &mut io::stdout());
            Ok(())
        }
    }
}

/// Write one line, surfacing failures such as a closed pipe.
fn emit(out: &mut impl Write, line: &str) -> Result<()> {
    writeln!(out, "{line}").map_err(TocError::Write)
}

fn render_toc(path: &Path, json: bool, config: &TocConfig) -> Result<String> {
    let sections = read::read_sections(path)?;
    let tree = toc::from_sections(&sections, config);
    if json {
        return Ok(payload::encode(&tree)?);
    }
    let header = format::toc_header(path, sections.len(), &tree);
    Ok(format!("{header}\n\n{}", format::outline(&tree)))
}
