//! Astromine - asteroid mining schedule calculator.
//!
//! Reads a batch of test cases (a count line, then `units expected_days`
//! pairs) and prints the computed total days next to the expectation.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod report;

use astromine_schedule::Scheduler;
use report::{parse_case_line, CaseReport};

/// Asteroid mining schedule calculator.
#[derive(Parser, Debug)]
#[command(name = "astromine")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with test cases (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emit each case as a JSON line instead of the comparison format
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    run(reader, args.json, &mut io::stdout().lock())
}

/// Process all test cases from `reader`, writing one line per case.
fn run(mut reader: impl BufRead, json: bool, out: &mut impl Write) -> Result<()> {
    let mut first = String::new();
    reader
        .read_line(&mut first)
        .context("Failed to read test case count")?;
    let count: usize = first
        .trim()
        .parse()
        .context("Invalid test case count")?;

    debug!(count, "Processing test cases");

    let scheduler = Scheduler::new();
    let mut line = String::new();
    for case in 1..=count {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read test case {}", case))?;
        if read == 0 {
            anyhow::bail!("Expected {} test cases, input ended after {}", count, case - 1);
        }

        let (units, expected) =
            parse_case_line(&line).with_context(|| format!("Test case {}", case))?;
        let plan = scheduler
            .plan(units)
            .with_context(|| format!("Test case {}", case))?;
        let report = CaseReport::new(plan, expected);

        if json {
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", report.comparison_line())?;
        }
    }

    Ok(())
}
