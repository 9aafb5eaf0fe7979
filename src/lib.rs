pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::FilePipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    engine::AssignmentEngine,
    matcher::{assign, Matcher, MatchOutcome},
    validator::validate,
};
pub use domain::model::{Assignment, Participant, PriorAssignment};
pub use utils::error::{Result, SantaError};
