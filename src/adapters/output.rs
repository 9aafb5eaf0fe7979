use crate::domain::model::{Assignment, AssignmentRun};
use crate::utils::error::{Result, SantaError};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(SantaError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: other.to_string(),
                reason: "Valid formats: csv, tsv, json".to_string(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    pub fn render(self, run: &AssignmentRun) -> Result<Vec<u8>> {
        match self {
            OutputFormat::Csv => render_delimited(&run.assignments, b','),
            OutputFormat::Tsv => render_delimited(&run.assignments, b'\t'),
            OutputFormat::Json => Ok(serde_json::to_vec_pretty(run)?),
        }
    }
}

/// Header row comes from the serde names on [`Assignment`].
fn render_delimited(assignments: &[Assignment], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    if assignments.is_empty() {
        writer.write_record([
            "Employee_Name",
            "Employee_EmailID",
            "Secret_Child_Name",
            "Secret_Child_EmailID",
        ])?;
    }
    for assignment in assignments {
        writer.serialize(assignment)?;
    }

    writer
        .into_inner()
        .map_err(|e| SantaError::IoError(e.into_error()))
}

/// Bundles rendered files into a single ZIP archive.
pub fn bundle_zip(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        zip.start_file(name.as_str(), SimpleFileOptions::default())?;
        zip.write_all(data)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Participant;
    use std::io::Read;

    fn sample_run() -> AssignmentRun {
        let alice = Participant::new("Alice", "a@x");
        let bob = Participant::new("Bob", "b@x");
        AssignmentRun {
            generated_at: chrono::Utc::now(),
            attempts: 1,
            assignments: vec![Assignment::new(&alice, &bob), Assignment::new(&bob, &alice)],
        }
    }

    #[test]
    fn test_csv_has_fixed_header() {
        let csv = String::from_utf8(OutputFormat::Csv.render(&sample_run()).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID"
        );
        assert_eq!(lines[1], "Alice,a@x,Bob,b@x");
        assert_eq!(lines[2], "Bob,b@x,Alice,a@x");
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let tsv = String::from_utf8(OutputFormat::Tsv.render(&sample_run()).unwrap()).unwrap();
        assert!(tsv.starts_with("Employee_Name\tEmployee_EmailID\t"));
        assert!(tsv.contains("Alice\ta@x\tBob\tb@x"));
    }

    #[test]
    fn test_json_report() {
        let json = OutputFormat::Json.render(&sample_run()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["attempts"], 1);
        assert_eq!(value["assignments"][0]["Secret_Child_EmailID"], "b@x");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_empty_csv_still_has_header() {
        let run = AssignmentRun {
            generated_at: chrono::Utc::now(),
            attempts: 1,
            assignments: vec![],
        };
        let csv = String::from_utf8(OutputFormat::Csv.render(&run).unwrap()).unwrap();
        assert!(csv.starts_with("Employee_Name,"));
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!(OutputFormat::parse("CSV").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("json").unwrap().extension(), "json");
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_bundle_zip() {
        let files = vec![
            ("secret_santa.csv".to_string(), b"a,b".to_vec()),
            ("secret_santa.json".to_string(), b"{}".to_vec()),
        ];
        let data = bundle_zip(&files).unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut content = String::new();
        archive
            .by_name("secret_santa.csv")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "a,b");
    }
}
