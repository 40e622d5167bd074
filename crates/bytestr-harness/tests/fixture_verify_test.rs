// Integration tests: the checked-in fixture sets pass in every mode.

use std::path::{Path, PathBuf};

use bytestr_harness::exec::FUNCTIONS;
use bytestr_harness::fixtures::fixture_paths;
use bytestr_harness::{FixtureSet, TestRunner, VerificationSummary};
use bytestr_membrane::SafetyLevel;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/conformance/fixtures")
}

fn load_sets() -> Vec<FixtureSet> {
    let paths = fixture_paths(&fixture_dir()).expect("fixture dir readable");
    assert!(!paths.is_empty(), "no fixtures in {}", fixture_dir().display());
    paths
        .iter()
        .map(|p| FixtureSet::from_file(p).unwrap_or_else(|e| panic!("{}: {e}", p.display())))
        .collect()
}

fn verify(level: SafetyLevel) -> VerificationSummary {
    let runner = TestRunner::new("fixture-verify", level);
    let results = load_sets().iter().flat_map(|set| runner.run(set)).collect();
    VerificationSummary::from_results(results)
}

fn assert_all_passed(summary: &VerificationSummary) {
    let failures: Vec<String> = summary
        .failures()
        .map(|r| format!("{}: expected {:?}, got {:?}", r.case_name, r.expected, r.actual))
        .collect();
    assert!(failures.is_empty(), "fixture failures:\n{}", failures.join("\n"));
}

#[test]
fn fixtures_pass_in_strict_mode() {
    let summary = verify(SafetyLevel::Strict);
    assert!(summary.total > 0);
    assert_all_passed(&summary);
}

#[test]
fn fixtures_pass_in_hardened_mode() {
    let summary = verify(SafetyLevel::Hardened);
    assert!(summary.total > 0);
    assert_all_passed(&summary);
}

#[test]
fn fixtures_cover_every_function() {
    let sets = load_sets();
    for function in FUNCTIONS {
        assert!(
            sets.iter()
                .flat_map(|set| &set.cases)
                .any(|case| case.function == *function),
            "no fixture case for {function}"
        );
    }
}

#[test]
fn fixture_modes_are_known_and_names_unique() {
    let mut names = std::collections::HashSet::new();
    for case in load_sets().iter().flat_map(|set| &set.cases) {
        assert!(
            ["strict", "hardened", "both"].contains(&case.mode.as_str()),
            "{}: bad mode {}",
            case.name,
            case.mode
        );
        assert!(names.insert(case.name.clone()), "duplicate case {}", case.name);
    }
}
