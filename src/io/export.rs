use std::io::Write;

use anyhow::Result;

use crate::application::ServiceabilityReport;

/// Write a report as pretty-printed JSON.
pub fn write_report_json<W: Write>(mut writer: W, report: &ServiceabilityReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write a report as `metric,value` CSV rows, one row per computed figure.
pub fn write_report_csv<W: Write>(writer: W, report: &ServiceabilityReport) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["metric", "value"])?;

    let rows = [
        ("total_monthly_income", report.total_monthly_income),
        ("total_monthly_expenses", report.total_monthly_expenses),
        ("surplus", report.surplus),
        ("serviceability", report.serviceability),
    ];
    for (metric, value) in rows {
        csv_writer.write_record([metric.to_string(), value.to_string()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
