// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::{Value, json};
use solvendo::domain::ApplicationRecord;
use tempfile::TempDir;

/// Helper to build an application record from inline JSON
pub fn record_from_json(value: Value) -> Result<ApplicationRecord> {
    Ok(serde_json::from_value(value)?)
}

/// Helper to write an application JSON file into a temporary directory
pub fn write_application(dir: &TempDir, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

/// Test fixture: the standard two-income, two-expense application
pub fn sample_application() -> Value {
    json!({
        "income": [
            { "frequency": "yearly", "salary": 120000.0 },
            { "frequency": "monthly", "bonus": 200.0 }
        ],
        "expenses": [
            { "rent": 1500.0 },
            { "utilities": 100.0 }
        ]
    })
}

/// Assert two floating-point amounts are equal within tolerance
pub fn assert_amount_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
