pub mod engine;
pub mod matcher;
pub mod validator;

pub use crate::domain::model::{Assignment, AssignmentRun, DrawInput, Participant, PriorAssignment};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
