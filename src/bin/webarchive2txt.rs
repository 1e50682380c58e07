//! Command-line converter: `.webarchive` in, plain text out.
//!
//! A single input is written to stdout (or `--output`). Several inputs, or
//! `--json`, produce a JSON array of `{filename, text}` / `{filename, error}`
//! records; with `--out-dir` each text is written next to the others under
//! its derived filename instead.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use webarchive_text::batch::{convert_batch, convert_item, BatchEntry, BatchItem};
use webarchive_text::{Options, DEFAULT_MAX_INPUT_SIZE};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about = "Convert .webarchive files to plain text")]
struct Cli {
    /// Input .webarchive files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the text of a single input to this file instead of stdout
    #[arg(short, long, conflicts_with_all = ["json", "out_dir"])]
    output: Option<PathBuf>,

    /// Write each converted text into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print a JSON array of per-file results
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Collapse whitespace inside <pre>/<code> like ordinary text
    #[arg(long, action = ArgAction::SetTrue)]
    collapse_preformatted: bool,

    /// Class/id token marking navigation or ads (repeatable; replaces the defaults)
    #[arg(long = "noise-token", value_name = "TOKEN")]
    noise_tokens: Vec<String>,

    /// Largest accepted input in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
    max_size: usize,
}

impl Cli {
    /// Flag combinations clap cannot express on its own.
    fn validate(&self) -> Result<(), &'static str> {
        if self.output.is_some() && self.inputs.len() > 1 {
            return Err("--output accepts a single input; use --out-dir or --json for several");
        }
        Ok(())
    }

    fn options(&self) -> Options {
        let mut options = Options {
            preserve_preformatted: !self.collapse_preformatted,
            max_input_size: self.max_size,
            ..Options::default()
        };
        if !self.noise_tokens.is_empty() {
            options.noise_tokens.clone_from(&self.noise_tokens);
        }
        options
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(message) = cli.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, message).exit();
    }
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("webarchive2txt: {err}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` if any input failed to convert.
fn run(cli: &Cli) -> io::Result<bool> {
    let options = cli.options();

    let mut items = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let bytes = fs::read(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
        let filename = path.file_name().map(|n| n.to_string_lossy().into_owned());
        items.push(BatchItem { filename, bytes });
    }

    if let [item] = items.as_slice() {
        if !cli.json && cli.out_dir.is_none() {
            return write_single(&convert_item(item, &options), cli.output.as_ref());
        }
    }

    let entries = convert_batch(&items, &options);
    let all_ok = entries.iter().all(BatchEntry::is_converted);

    if let Some(dir) = &cli.out_dir {
        fs::create_dir_all(dir)?;
        for entry in &entries {
            match entry {
                BatchEntry::Converted { filename, text } => fs::write(dir.join(filename), text)?,
                BatchEntry::Failed { filename, error } => eprintln!("{filename}: {error}"),
            }
        }
        if !cli.json {
            return Ok(all_ok);
        }
    }

    let json = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(all_ok)
}

fn write_single(entry: &BatchEntry, output: Option<&PathBuf>) -> io::Result<bool> {
    match entry {
        BatchEntry::Converted { text, .. } => {
            match output {
                Some(path) => fs::write(path, text)?,
                None => io::stdout().lock().write_all(text.as_bytes())?,
            }
            Ok(true)
        }
        BatchEntry::Failed { filename, error } => {
            eprintln!("{filename}: {error}");
            Ok(false)
        }
    }
}
