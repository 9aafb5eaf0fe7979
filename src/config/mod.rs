pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa pairs from a participant file")]
pub struct CliConfig {
    /// Participant file (name,email per row, header first)
    #[arg(short, long)]
    pub participants: String,

    /// Previous round in the output layout; its pairs are not repeated
    #[arg(long)]
    pub previous: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<String>,

    #[arg(long, default_value = "secret_santa")]
    pub file_stem: String,

    #[arg(long, help = "Bundle all output formats into one ZIP file")]
    pub compress: bool,

    #[arg(long, default_value = "1", help = "Reshuffle and retry up to N times")]
    pub max_attempts: usize,

    #[arg(long, help = "Fixed RNG seed for a reproducible draw")]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log memory and timing per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn participants_file(&self) -> &str {
        &self.participants
    }

    fn previous_file(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn file_stem(&self) -> &str {
        &self.file_stem
    }

    fn compress(&self) -> bool {
        self.compress
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_input_file("participants", &self.participants)?;
        if let Some(previous) = &self.previous {
            validation::validate_input_file("previous", previous)?;
        }
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats)?;
        validation::validate_non_empty_string("file_stem", &self.file_stem)?;
        validation::validate_positive_number("max_attempts", self.max_attempts, 1)?;
        Ok(())
    }
}
