use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single income line of an application record.
///
/// Only `frequency` is a recognized field name; everything else is kept as-is
/// in a dynamic field map. Numeric values are reported amounts, non-numeric
/// values (labels, notes) carry no monetary meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl IncomeEntry {
    /// Iterate over the numeric field values of this entry.
    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.fields.values().filter_map(Value::as_f64)
    }
}

impl fmt::Display for IncomeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_fields(&self.fields))
    }
}

/// A single expense line of an application record. Every field value must be
/// a number representing a monthly expense amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_fields(&self.fields))
    }
}

fn render_fields(fields: &BTreeMap<String, Value>) -> String {
    serde_json::to_string(fields).unwrap_or_else(|_| "{}".to_string())
}
