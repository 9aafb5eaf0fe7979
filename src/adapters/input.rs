//! Upload parsing. The format is picked from the file extension and the row
//! shape from what the caller asks for; the matcher only sees the parsed values.

use crate::domain::model::{Participant, PriorAssignment};
use crate::utils::error::{Result, SantaError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Tsv,
    Spreadsheet,
}

impl InputFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(InputFormat::Csv),
            Some("tsv") => Ok(InputFormat::Tsv),
            Some("xlsx") | Some("xls") => Ok(InputFormat::Spreadsheet),
            _ => Err(SantaError::UnsupportedFormat {
                file: file_name.to_string(),
                reason: "Please upload a CSV or TSV file".to_string(),
            }),
        }
    }

    /// Spreadsheets are recognised but cannot be read directly.
    pub fn is_readable(self) -> bool {
        self.delimiter().is_some()
    }

    fn delimiter(self) -> Option<u8> {
        match self {
            InputFormat::Csv => Some(b','),
            InputFormat::Tsv => Some(b'\t'),
            InputFormat::Spreadsheet => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// `name, email`
    Participant,
    /// `giver name, giver email, receiver name, receiver email`
    Assignment,
}

impl RowShape {
    pub fn min_columns(self) -> usize {
        match self {
            RowShape::Participant => 2,
            RowShape::Assignment => 4,
        }
    }

    pub fn column_names(self) -> &'static [&'static str] {
        match self {
            RowShape::Participant => &["name", "email"],
            RowShape::Assignment => &["giver name", "giver email", "receiver name", "receiver email"],
        }
    }
}

pub fn parse_participants(file_name: &str, data: &[u8]) -> Result<Vec<Participant>> {
    tracing::debug!("Parsing participant file: {}", file_name);
    let participants: Vec<Participant> = read_rows(file_name, data, RowShape::Participant)?
        .iter()
        .map(|row| Participant::new(&row[0], &row[1]))
        .collect();
    tracing::debug!("Successfully parsed {} participants", participants.len());
    Ok(participants)
}

/// Reads a previous round in the same layout this tool writes.
pub fn parse_prior_assignments(file_name: &str, data: &[u8]) -> Result<Vec<PriorAssignment>> {
    tracing::debug!("Parsing previous assignment file: {}", file_name);
    let prior: Vec<PriorAssignment> = read_rows(file_name, data, RowShape::Assignment)?
        .iter()
        .map(|row| PriorAssignment::new(&row[1], &row[3]))
        .collect();
    tracing::debug!("Successfully parsed {} previous assignments", prior.len());
    Ok(prior)
}

fn read_rows(file_name: &str, data: &[u8], shape: RowShape) -> Result<Vec<StringRecord>> {
    let format = InputFormat::from_file_name(file_name)?;
    let Some(delimiter) = format.delimiter() else {
        tracing::error!("Spreadsheet upload rejected: {}", file_name);
        return Err(SantaError::UnsupportedFormat {
            file: file_name.to_string(),
            reason: "Spreadsheet files are not read directly, export the sheet as CSV".to_string(),
        });
    };

    if data.iter().all(u8::is_ascii_whitespace) {
        tracing::error!("File is empty: {}", file_name);
        return Err(SantaError::MalformedInput {
            line: 0,
            message: format!("{} is empty", file_name),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() < shape.min_columns() {
            tracing::error!("Missing fields at line {} of {}", line, file_name);
            return Err(SantaError::MalformedInput {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    shape.min_columns(),
                    record.len()
                ),
            });
        }
        let blank = shape
            .column_names()
            .iter()
            .zip(record.iter())
            .find(|(_, field)| field.is_empty());
        if let Some((column, _)) = blank {
            tracing::error!("Blank {} at line {} of {}", column, line, file_name);
            return Err(SantaError::MalformedInput {
                line,
                message: format!("{} is blank", column),
            });
        }
        rows.push(record);
    }

    Ok(rows)
}
