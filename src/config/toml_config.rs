use crate::core::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: RunConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub participants: String,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
    #[serde(default)]
    pub compress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
            file_stem: default_file_stem(),
            compress: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn default_max_attempts() -> usize {
    1
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["csv".to_string()]
}

fn default_file_stem() -> String {
    "secret_santa".to_string()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` with environment values. Unset
    /// variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| SantaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().is_some_and(|m| m.enabled)
    }
}

impl ConfigProvider for TomlConfig {
    fn participants_file(&self) -> &str {
        &self.input.participants
    }

    fn previous_file(&self) -> Option<&str> {
        self.input.previous.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn file_stem(&self) -> &str {
        &self.output.file_stem
    }

    fn compress(&self) -> bool {
        self.output.compress
    }

    fn max_attempts(&self) -> usize {
        self.matching.max_attempts
    }

    fn seed(&self) -> Option<u64> {
        self.matching.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("run.name", &self.run.name)?;
        validation::validate_input_file("input.participants", &self.input.participants)?;
        if let Some(previous) = &self.input.previous {
            validation::validate_input_file("input.previous", previous)?;
        }
        validation::validate_positive_number("matching.max_attempts", self.matching.max_attempts, 1)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_output_formats("output.formats", &self.output.formats)?;
        validation::validate_non_empty_string("output.file_stem", &self.output.file_stem)?;
        Ok(())
    }
}
