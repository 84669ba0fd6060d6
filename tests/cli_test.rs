mod common;

use anyhow::Result;
use assert_cmd::Command;
use common::{sample_application, write_application};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn solvendo() -> Command {
    Command::cargo_bin("solvendo").unwrap()
}

#[test]
fn test_assess_prints_table_report() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_application(&dir, "application.json", &sample_application())?;

    solvendo()
        .arg("assess")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Serviceability Report"))
        .stdout(predicate::str::contains("10200.00"))
        .stdout(predicate::str::contains("1600.00"))
        .stdout(predicate::str::contains("8600.00"))
        .stdout(predicate::str::contains("12900.00"));
    Ok(())
}

#[test]
fn test_assess_json_format() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_application(&dir, "application.json", &sample_application())?;

    let output = solvendo()
        .arg("assess")
        .arg(&path)
        .args(["--format", "json"])
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["total_monthly_income"], 10200.0);
    assert_eq!(report["total_monthly_expenses"], 1600.0);
    assert_eq!(report["surplus"], 8600.0);
    assert_eq!(report["serviceability"], 12900.0);
    Ok(())
}

#[test]
fn test_assess_csv_format() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_application(&dir, "application.json", &sample_application())?;

    solvendo()
        .arg("assess")
        .arg(&path)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("metric,value"))
        .stdout(predicate::str::contains("serviceability,12900"));
    Ok(())
}

#[test]
fn test_assess_factor_override() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_application(&dir, "application.json", &sample_application())?;

    let output = solvendo()
        .arg("assess")
        .arg(&path)
        .args(["--factor", "2", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["factor"], 2.0);
    assert_eq!(report["serviceability"], 17200.0);
    Ok(())
}

#[test]
fn test_invalid_factor_fails_before_loading() -> Result<()> {
    let dir = TempDir::new()?;
    // The input file does not even exist; the factor is rejected first.
    let path = dir.path().join("missing.json");

    solvendo()
        .arg("assess")
        .arg(&path)
        .args(["--factor", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scaling factor must be a number"));
    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing.json");

    solvendo()
        .arg("assess")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn test_skipped_entries_warn_on_stderr() -> Result<()> {
    let dir = TempDir::new()?;
    let application = json!({
        "income": [
            { "amount": 500.0 },
            { "frequency": "monthly", "salary": 3000.0 }
        ],
        "expenses": []
    });
    let path = write_application(&dir, "application.json", &application)?;

    solvendo()
        .arg("assess")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3000.00"))
        .stdout(predicate::str::contains("Skipped income entries: 1"))
        .stderr(predicate::str::contains("no frequency"));
    Ok(())
}

#[test]
fn test_assess_writes_output_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_application(&dir, "application.json", &sample_application())?;
    let out_path = dir.path().join("report.json");

    solvendo()
        .arg("assess")
        .arg(&path)
        .args(["--format", "json"])
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report: serde_json::Value = serde_json::from_slice(&std::fs::read(&out_path)?)?;
    assert_eq!(report["serviceability"], 12900.0);
    Ok(())
}

#[test]
fn test_check_reports_valid_record() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_application(&dir, "application.json", &sample_application())?;

    solvendo()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Application record is valid"))
        .stdout(predicate::str::contains("Income entries:  2"))
        .stdout(predicate::str::contains("Expense entries: 2"));
    Ok(())
}

#[test]
fn test_check_fails_on_malformed_expense() -> Result<()> {
    let dir = TempDir::new()?;
    let application = json!({
        "income": [],
        "expenses": [{ "rent": "one thousand" }]
    });
    let path = write_application(&dir, "application.json", &application)?;

    solvendo()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
    Ok(())
}
