use std::fmt;

use serde::Serialize;

use crate::application::AppError;
use crate::domain::{ApplicationRecord, Factor, Frequency, IncomeEntry};

/// Outcome of assessing an application record.
///
/// All amounts are monthly. Warnings describe income entries that were
/// excluded from the totals; they never abort the computation.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub total_monthly_income: f64,
    pub total_monthly_expenses: f64,
    pub surplus: f64,
    pub serviceability: f64,
    pub warnings: Vec<EntryWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingFrequency,
    UnrecognizedFrequency,
}

/// An income entry excluded from the totals, identified by its position in
/// the record and its rendered field map.
#[derive(Debug, Clone, Serialize)]
pub struct EntryWarning {
    pub index: usize,
    pub kind: WarningKind,
    pub entry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl EntryWarning {
    fn missing_frequency(index: usize, entry: &IncomeEntry) -> Self {
        Self {
            index,
            kind: WarningKind::MissingFrequency,
            entry: entry.to_string(),
            frequency: None,
        }
    }

    fn unrecognized_frequency(index: usize, entry: &IncomeEntry, frequency: &str) -> Self {
        Self {
            index,
            kind: WarningKind::UnrecognizedFrequency,
            entry: entry.to_string(),
            frequency: Some(frequency.to_string()),
        }
    }
}

impl fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::MissingFrequency => write!(
                f,
                "Income entry {} has no frequency and will be ignored: {}",
                self.index, self.entry
            ),
            WarningKind::UnrecognizedFrequency => write!(
                f,
                "Income entry {} has unrecognized frequency '{}' and will be ignored: {}",
                self.index,
                self.frequency.as_deref().unwrap_or_default(),
                self.entry
            ),
        }
    }
}

/// Assess an application record against a scaling factor.
///
/// Income entries are normalized to monthly amounts according to their
/// frequency and summed; expense entries are summed as-is. An entry with a
/// missing or unrecognized frequency is skipped and recorded as a warning.
/// A non-numeric expense value aborts the whole assessment: no partial
/// totals are ever returned.
pub fn assess(record: &ApplicationRecord, factor: Factor) -> Result<Assessment, AppError> {
    let mut warnings = Vec::new();
    let mut total_monthly_income = 0.0;

    for (index, entry) in record.income.iter().enumerate() {
        let Some(raw_frequency) = entry.frequency.as_deref() else {
            warnings.push(EntryWarning::missing_frequency(index, entry));
            continue;
        };
        let Some(frequency) = Frequency::from_str(raw_frequency) else {
            warnings.push(EntryWarning::unrecognized_frequency(
                index,
                entry,
                raw_frequency,
            ));
            continue;
        };

        for amount in entry.amounts() {
            total_monthly_income += frequency.to_monthly(amount);
        }
    }

    let mut total_monthly_expenses = 0.0;
    for (index, entry) in record.expenses.iter().enumerate() {
        for (field, value) in &entry.fields {
            let amount = value.as_f64().ok_or_else(|| AppError::MalformedExpense {
                index,
                field: field.clone(),
                value: value.to_string(),
            })?;
            total_monthly_expenses += amount;
        }
    }

    let surplus = total_monthly_income - total_monthly_expenses;
    let serviceability = surplus * factor;

    Ok(Assessment {
        total_monthly_income,
        total_monthly_expenses,
        surplus,
        serviceability,
        warnings,
    })
}
