use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct AssignmentEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AssignmentEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting Secret Santa run...");

        // Extract
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Parsed {} participants and {} previous assignments",
            input.participants.len(),
            input.prior.len()
        );
        self.monitor.log_stats("extract");

        // Transform
        let run = self.pipeline.transform(input).await?;
        tracing::info!(
            "Successfully assigned {} participants in {} attempt(s)",
            run.assignments.len(),
            run.attempts
        );
        self.monitor.log_stats("transform");

        // Load
        let written = self.pipeline.load(run).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(written)
    }
}
