use crate::adapters::input::{parse_participants, parse_prior_assignments};
use crate::adapters::output::{bundle_zip, OutputFormat};
use crate::core::matcher::Matcher;
use crate::core::{AssignmentRun, ConfigProvider, DrawInput, Participant, Pipeline, Storage};
use crate::utils::error::{Result, SantaError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::path::Path;

/// Reads participant and previous-round files from storage, draws, and writes
/// the result in every configured format.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

// 重複的 email 由呼叫端負責，匹配器本身不檢查
fn ensure_unique_ids(participants: &[Participant]) -> Result<()> {
    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant.id.as_str()) {
            tracing::error!("Duplicate participant identifier: {}", participant.id);
            return Err(SantaError::DuplicateParticipant {
                id: participant.id.clone(),
            });
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn extract(&self) -> Result<DrawInput> {
        let participants_file = self.config.participants_file();
        tracing::debug!("Reading participants from: {}", participants_file);
        let data = self.storage.read_file(participants_file).await?;
        let participants = parse_participants(participants_file, &data)?;
        ensure_unique_ids(&participants)?;

        let prior = match self.config.previous_file() {
            Some(previous_file) => {
                tracing::debug!("Reading previous assignments from: {}", previous_file);
                let data = self.storage.read_file(previous_file).await?;
                parse_prior_assignments(previous_file, &data)?
            }
            None => Vec::new(),
        };

        Ok(DrawInput {
            participants,
            prior,
        })
    }

    async fn transform(&self, input: DrawInput) -> Result<AssignmentRun> {
        let matcher = Matcher::with_max_attempts(self.config.max_attempts());
        let mut rng = self.rng();
        let outcome = matcher.run(&input.participants, &input.prior, &mut rng)?;

        Ok(AssignmentRun {
            generated_at: chrono::Utc::now(),
            attempts: outcome.attempts,
            assignments: outcome.assignments,
        })
    }

    async fn load(&self, run: AssignmentRun) -> Result<Vec<String>> {
        let stem = self.config.file_stem();
        let mut rendered = Vec::new();
        for name in self.config.output_formats() {
            let format = OutputFormat::parse(name)?;
            let file_name = format!("{}.{}", stem, format.extension());
            rendered.push((file_name, format.render(&run)?));
        }

        if self.config.compress() {
            tracing::debug!("Creating ZIP file with {} files", rendered.len());
            let zip_data = bundle_zip(&rendered)?;
            let path = self.output_file(&format!("{}.zip", stem));
            self.storage.write_file(&path, &zip_data).await?;
            return Ok(vec![path]);
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (file_name, data) in rendered {
            let path = self.output_file(&file_name);
            tracing::debug!("Writing {} ({} bytes)", path, data.len());
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }
        Ok(written)
    }
}
