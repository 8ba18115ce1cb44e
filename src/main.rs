use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use gapseq::json::is_subsequence_value;
use gapseq::row::{diagnose_row, parse_row, render_row_padded, trailing_blanks};
use gapseq::{splice_with_limits, GapLimits};
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{report_line, summary_line};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            file,
            delimiter,
            json,
            limits,
        } => limits
            .resolve()
            .and_then(|limits| run_check(file.as_deref(), delimiter, json, &limits)),
        Commands::Splice {
            file,
            index,
            count,
            delimiter,
            limits,
        } => limits
            .resolve()
            .and_then(|limits| run_splice(file.as_deref(), index, count, delimiter, limits)),
        Commands::Contains {
            haystack,
            needle,
            ordered,
        } => run_contains(&haystack, &needle, ordered),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by `GAPSEQ_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GAPSEQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Open a file, or stdin for `-` / no path.
fn open_input(file: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match file {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) if path == Path::new("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => {
            let handle = fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(handle)))
        }
    }
}

fn run_check(file: Option<&Path>, delimiter: char, json: bool, limits: &GapLimits) -> Result<ExitCode> {
    let input = open_input(file)?;
    let mut stdout = io::stdout().lock();
    let mut total = 0;
    let mut invalid = 0;

    for (i, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let report = diagnose_row(i + 1, &parse_row(&line, delimiter), limits);
        total += 1;
        if !report.verdict.is_valid() {
            invalid += 1;
        }
        if json {
            serde_json::to_writer(&mut stdout, &report)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "{}", report_line(&report))?;
        }
    }

    if !json {
        writeln!(stdout, "{}", summary_line(total, invalid))?;
    }
    Ok(if invalid == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_splice(
    file: Option<&Path>,
    index: i64,
    count: i64,
    delimiter: char,
    limits: GapLimits,
) -> Result<ExitCode> {
    let input = open_input(file)?;
    let mut stdout = io::stdout().lock();
    let mut failed = 0;

    for (i, line) in input.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let mut row = parse_row(&line, delimiter);
        match splice_with_limits(&mut row, index, count, limits) {
            // parse_row only produces position keys, so rendering cannot fail
            Ok(_) => {
                let trailing = trailing_blanks(&line, delimiter);
                let rendered = render_row_padded(&row, delimiter, trailing);
                writeln!(stdout, "{}", rendered.unwrap_or(line))?
            }
            Err(e) => {
                warn!(line = i + 1, error = %e, "row left unchanged");
                eprintln!("row {}: {}", i + 1, e);
                failed += 1;
                writeln!(stdout, "{}", line)?;
            }
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_contains(haystack: &str, needle: &str, ordered: bool) -> Result<ExitCode> {
    let haystack = parse_json_arg(haystack, "haystack")?;
    let needle = parse_json_arg(needle, "needle")?;
    let found = is_subsequence_value(&haystack, &needle, ordered);
    println!("{}", found);
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Inline JSON, or `@path` to read it from a file.
fn parse_json_arg(raw: &str, what: &str) -> Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => {
            let path = PathBuf::from(path);
            let mut text = String::new();
            fs::File::open(&path)
                .and_then(|mut f| f.read_to_string(&mut text))
                .with_context(|| format!("Failed to read {} from {}", what, path.display()))?;
            text
        }
        None => raw.to_string(),
    };
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON for {}", what))
}
