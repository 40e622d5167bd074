//! Test execution engine.

use std::time::Instant;

use bytestr_membrane::{SafetyLevel, take_thread_last_action};

use crate::diff;
use crate::exec::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Mode being tested.
    pub mode: SafetyLevel,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, mode: SafetyLevel) -> Self {
        Self {
            campaign: campaign.into(),
            mode,
        }
    }

    /// Run all matching fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        self.selected(fixture_set)
            .map(|case| self.run_case(case).0)
            .collect()
    }

    /// Like [`run`](Self::run), logging run start/end and one
    /// `fixture_case` entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mode = self.mode.as_str();
        let started = Instant::now();
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "fixture_run_start")
                .with_mode(mode)
                .with_details(serde_json::json!({
                    "campaign": self.campaign,
                    "family": fixture_set.family,
                    "version": fixture_set.version,
                })),
        )?;

        let mut results = Vec::new();
        for case in self.selected(fixture_set) {
            let (result, entry) = self.run_case(case);
            log.emit_entry(entry.with_api(fixture_set.family.as_str(), case.function.as_str()))?;
            results.push(result);
        }

        let failed = results.iter().filter(|r| !r.passed).count();
        let (level, outcome) = if failed == 0 {
            (LogLevel::Info, Outcome::Pass)
        } else {
            (LogLevel::Error, Outcome::Fail)
        };
        log.emit_entry(
            LogEntry::new("", level, "fixture_run_end")
                .with_mode(mode)
                .with_outcome(outcome)
                .with_duration_ms(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX))
                .with_details(serde_json::json!({
                    "family": fixture_set.family,
                    "total": results.len(),
                    "failed": failed,
                })),
        )?;
        log.flush()?;
        Ok(results)
    }

    fn selected<'a>(&self, fixture_set: &'a FixtureSet) -> impl Iterator<Item = &'a FixtureCase> {
        let mode = self.mode;
        fixture_set
            .cases
            .iter()
            .filter(move |case| mode_matches(mode, &case.mode))
    }

    fn run_case(&self, case: &FixtureCase) -> (VerificationResult, LogEntry) {
        let mode = self.mode.as_str();
        let _ = take_thread_last_action();
        let started = Instant::now();
        let execution = execute_fixture_case(&case.function, &case.inputs, self.mode);
        let latency_ns = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        let healing = take_thread_last_action();

        let (actual, outcome) = match execution {
            Ok(output) => {
                let outcome = if output == case.expected_output {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                };
                (output, outcome)
            }
            Err(err) => (format!("harness_error:{err}"), Outcome::Error),
        };
        let passed = outcome == Outcome::Pass;
        let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));

        let case_name = if case.mode.eq_ignore_ascii_case("both") {
            format!("{} [{mode}]", case.name)
        } else {
            case.name.clone()
        };

        let mut entry = LogEntry::new(
            "",
            if passed { LogLevel::Info } else { LogLevel::Error },
            "fixture_case",
        )
        .with_mode(mode)
        .with_outcome(outcome)
        .with_latency_ns(latency_ns)
        .with_details(serde_json::json!({
            "case": case_name,
            "expected": case.expected_output,
            "actual": actual,
        }));
        if let Some(action) = healing {
            entry = entry.with_healing_action(action.label());
        }

        let result = VerificationResult {
            case_name,
            function: case.function.clone(),
            section: case.section.clone(),
            mode: mode.to_string(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        };
        (result, entry)
    }
}

fn mode_matches(active: SafetyLevel, case_mode: &str) -> bool {
    let case = case_mode.trim().to_ascii_lowercase();
    case == "both" || case == active.as_str()
}
