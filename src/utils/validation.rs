use crate::adapters::input::InputFormat;
use crate::adapters::output::OutputFormat;
use crate::utils::error::{Result, SantaError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Accepts only inputs the parser can actually read. Spreadsheets are
/// recognised by extension but still rejected here.
pub fn validate_input_file(field_name: &str, file: &str) -> Result<()> {
    validate_path(field_name, file)?;

    let format = InputFormat::from_file_name(file).map_err(|_| SantaError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: file.to_string(),
        reason: "Unsupported file extension. Allowed extensions: csv, tsv".to_string(),
    })?;

    if !format.is_readable() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "Spreadsheet files are not read directly, export the sheet as CSV".to_string(),
        });
    }
    Ok(())
}

/// Uses the same name parsing as the renderer, so `CSV` and ` json` pass.
pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(SantaError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one output format is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for name in formats {
        let format = OutputFormat::parse(name).map_err(|_| SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.clone(),
            reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
        })?;
        if !seen.insert(format) {
            return Err(SantaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Format listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
