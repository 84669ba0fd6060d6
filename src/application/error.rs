use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Application file not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported application format (expected a .json file): {0}")]
    UnsupportedFormat(String),

    #[error("Invalid application JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expense '{field}' in entry {index} is not a number: {value}")]
    MalformedExpense {
        index: usize,
        field: String,
        value: String,
    },

    #[error("Scaling factor must be a number: {0}")]
    InvalidFactor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
