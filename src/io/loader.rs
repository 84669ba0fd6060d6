use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::application::AppError;
use crate::domain::ApplicationRecord;

/// Parse an application record from any reader.
pub fn read_application<R: Read>(reader: R) -> Result<ApplicationRecord, AppError> {
    let record = serde_json::from_reader(reader)?;
    Ok(record)
}

/// Load an application record from a file.
///
/// The file must exist and carry a `.json` extension; either failure is
/// reported before the file is opened.
pub fn load_application(path: &Path) -> Result<ApplicationRecord, AppError> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {}
        _ => return Err(AppError::UnsupportedFormat(path.display().to_string())),
    }

    let file = File::open(path)?;
    read_application(file)
}
