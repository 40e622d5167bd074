//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested (`length`, `concat`, ...).
    pub function: String,
    /// Behaviour this case pins down, free text.
    pub section: String,
    /// Input parameters. Strings are either JSON text (a terminator is
    /// appended) or an array of raw byte values (taken verbatim).
    pub inputs: serde_json::Value,
    /// Expected output, rendered as text.
    pub expected_output: String,
    /// `strict`, `hardened`, or `both`.
    pub mode: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

/// Sorted list of `*.json` files directly inside `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_set_round_trips_through_json() {
        let set = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string/length",
                "captured_at":"2026-10-17T00:00:00Z",
                "cases":[
                    {"name":"len","function":"length","section":"length counts content","inputs":{"s":"Hasan"},"expected_output":"5","mode":"both"}
                ]
            }"#,
        )
        .expect("valid fixture json");
        assert_eq!(set.cases.len(), 1);

        let again = FixtureSet::from_json(&set.to_json().unwrap()).unwrap();
        assert_eq!(again.family, "string/length");
        assert_eq!(again.cases[0].inputs["s"], "Hasan");
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = FixtureSet::from_json(r#"{"version":"v1","family":"x","cases":[]}"#);
        assert!(err.is_err());
    }
}
