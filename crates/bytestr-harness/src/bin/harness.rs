//! CLI entrypoint for the bytestr conformance harness.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use bytestr_harness::exec::{execute_fixture_case, inputs_for_line};
use bytestr_harness::fixtures::fixture_paths;
use bytestr_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, now_utc, validate_log_file,
};
use bytestr_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};
use bytestr_membrane::{SafetyLevel, safety_level};

/// Conformance tooling for bytestr.
#[derive(Debug, Parser)]
#[command(name = "harness")]
#[command(about = "Conformance testing harness for bytestr")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VerifyMode {
    Strict,
    Hardened,
    Both,
}

impl VerifyMode {
    fn levels(self) -> &'static [SafetyLevel] {
        match self {
            Self::Strict => &[SafetyLevel::Strict],
            Self::Hardened => &[SafetyLevel::Hardened],
            Self::Both => &[SafetyLevel::Strict, SafetyLevel::Hardened],
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Hardened => "hardened",
            Self::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EvalMode {
    Strict,
    Hardened,
    Off,
}

impl From<EvalMode> for SafetyLevel {
    fn from(mode: EvalMode) -> Self {
        match mode {
            EvalMode::Strict => Self::Strict,
            EvalMode::Hardened => Self::Hardened,
            EvalMode::Off => Self::Off,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one operation on a line read from stdin.
    Eval {
        /// Operation name (`length`, `concat`, `find`, ...).
        #[arg(long)]
        op: String,
        /// Second string argument (`concat`, `starts_with`).
        #[arg(long)]
        arg: Option<String>,
        /// Byte to search for (`find`).
        #[arg(long)]
        byte: Option<String>,
        /// Destination size for `copy`; defaults to an exact fit.
        #[arg(long)]
        dst_len: Option<usize>,
        /// Safety level; defaults to `BYTESTR_MODE`.
        #[arg(long, value_enum)]
        mode: Option<EvalMode>,
    },
    /// Verify the implementation against fixture sets.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Modes to run.
        #[arg(long, value_enum, default_value = "both")]
        mode: VerifyMode,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output report path (JSON).
        #[arg(long)]
        json: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
    /// Write an artifact index with SHA-256 digests of a log and a report.
    ArtifactIndex {
        #[arg(long)]
        log: PathBuf,
        #[arg(long)]
        report: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval {
            op,
            arg,
            byte,
            dst_len,
            mode,
        } => {
            let level = mode.map_or_else(safety_level, SafetyLevel::from);
            let mut line = Vec::new();
            std::io::stdin().lock().read_until(b'\n', &mut line)?;
            let line = line.strip_suffix(b"\n").unwrap_or(&line);
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            let second = if op == "find" { byte.or(arg) } else { arg };
            let inputs = inputs_for_line(&op, line, second.as_deref(), dst_len)?;
            println!("{}", execute_fixture_case(&op, &inputs, level)?);
        }
        Command::Verify {
            fixture,
            mode,
            report,
            json,
            log,
        } => verify(&fixture, mode, report, json, log)?,
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            if !errors.is_empty() {
                return Err(format!(
                    "{} validation error(s) in {} line(s) of {}",
                    errors.len(),
                    lines,
                    log.display()
                )
                .into());
            }
            eprintln!("{}: {lines} valid line(s)", log.display());
        }
        Command::ArtifactIndex {
            log,
            report,
            output,
        } => {
            let mut index = ArtifactIndex::new(run_id());
            index.add_file(&log, "log")?.add_file(&report, "report")?;
            std::fs::write(&output, index.to_json()?)?;
            eprintln!("Artifact index written to {}", output.display());
        }
    }

    Ok(())
}

fn verify(
    fixture: &Path,
    mode: VerifyMode,
    report: Option<PathBuf>,
    json: Option<PathBuf>,
    log: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Verifying against fixtures in {}", fixture.display());
    let mut fixture_sets = Vec::new();
    for path in fixture_paths(fixture)? {
        match FixtureSet::from_file(&path) {
            Ok(set) => fixture_sets.push(set),
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }
    if fixture_sets.is_empty() {
        return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
    }

    let mut emitter = match &log {
        Some(path) => Some(LogEmitter::to_file(path, "harness", &run_id())?),
        None => None,
    };

    let mut results = Vec::new();
    for &level in mode.levels() {
        let runner = TestRunner::new("fixture-verify", level);
        for set in &fixture_sets {
            match emitter.as_mut() {
                Some(emitter) => results.extend(runner.run_logged(set, emitter)?),
                None => results.extend(runner.run(set)),
            }
        }
    }

    let summary = VerificationSummary::from_results(results);
    for failure in summary.failures() {
        eprintln!("FAIL {}", failure.case_name);
        if let Some(diff) = &failure.diff {
            eprint!("{diff}");
        }
    }
    eprintln!(
        "Total: {}, Passed: {}, Failed: {}",
        summary.total, summary.passed, summary.failed
    );

    let all_passed = summary.all_passed();
    let failed = summary.failed;
    let conformance = ConformanceReport {
        title: "bytestr Conformance Report".to_string(),
        mode: mode.as_str().to_string(),
        timestamp: now_utc(),
        summary,
    };
    let mut written = Vec::new();
    if let Some(path) = report {
        std::fs::write(&path, conformance.to_markdown())?;
        eprintln!("Report written to {}", path.display());
        written.push(path.display().to_string());
    }
    if let Some(path) = json {
        std::fs::write(&path, conformance.to_json())?;
        eprintln!("JSON report written to {}", path.display());
        written.push(path.display().to_string());
    }
    if let Some(emitter) = emitter.as_mut() {
        if !written.is_empty() {
            emitter.emit_entry(
                LogEntry::new("", LogLevel::Info, "reports_written")
                    .with_artifacts(written)
                    .with_details(serde_json::json!({ "verify_mode": mode.as_str() })),
            )?;
        }
        emitter.flush()?;
    }

    if !all_passed {
        return Err(format!("{failed} fixture case(s) failed").into());
    }
    Ok(())
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("run-{secs}-{}", std::process::id())
}
