//! The batch loop: one pass over the catalog, per-job failure isolation.

use crate::catalog::Catalog;
use crate::error::{AssetError, Result};
use crate::generator::ImageGenerator;
use crate::style::compose_prompt;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pacing policy applied between consecutive jobs.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Waits before the next job starts.
    async fn pause(&self);
}

/// Fixed inter-job delay, the production policy for staying under the
/// provider's rate limit.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Creates a fixed-delay pacer.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// No pacing. For tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

/// The result of one job.
#[derive(Debug)]
pub struct JobOutcome {
    /// Job name, as in the catalog.
    pub name: String,
    /// Written file path on success, failure reason otherwise.
    pub result: std::result::Result<PathBuf, AssetError>,
}

impl JobOutcome {
    /// True if the job produced an output file.
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Tally of a completed batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<JobOutcome>,
}

impl RunReport {
    /// Per-job outcomes, in catalog order.
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    /// Number of jobs attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of jobs that produced an output file.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Names of failed jobs, in catalog order.
    pub fn failed_names(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded())
            .map(|o| o.name.as_str())
            .collect()
    }

    /// True if every job succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.total()
    }
}

/// Runs the catalog once, in definition order.
///
/// The output directory is created (with parents) before the first job. Each
/// job gets a single generation attempt; a failed job is recorded and the
/// batch moves on. Output bytes are written to `<name>.png.tmp` and renamed
/// into place, so an interrupted run never leaves a truncated `.png`.
///
/// Errors returned from this function are pre-flight only (directory
/// creation); job failures live in the report.
pub async fn run_batch(
    generator: &dyn ImageGenerator,
    catalog: &Catalog,
    assets_dir: impl AsRef<Path>,
    pacer: &dyn Pacer,
) -> Result<RunReport> {
    let assets_dir = assets_dir.as_ref();
    tokio::fs::create_dir_all(assets_dir).await?;

    let mut outcomes = Vec::with_capacity(catalog.len());
    let total = catalog.len();

    for (index, job) in catalog.jobs().iter().enumerate() {
        tracing::info!(
            job = %job.name,
            aspect_ratio = %job.aspect_ratio,
            index = index + 1,
            total,
            "generating"
        );

        let result = generate_one(generator, &job.prompt, assets_dir, &job.name).await;
        match &result {
            Ok(path) => tracing::info!(job = %job.name, path = %path.display(), "saved"),
            Err(e) => tracing::warn!(job = %job.name, "generation failed: {e}"),
        }
        outcomes.push(JobOutcome {
            name: job.name.clone(),
            result,
        });

        if index + 1 < total {
            pacer.pause().await;
        }
    }

    Ok(RunReport { outcomes })
}

async fn generate_one(
    generator: &dyn ImageGenerator,
    raw_prompt: &str,
    assets_dir: &Path,
    name: &str,
) -> std::result::Result<PathBuf, AssetError> {
    let prompt = compose_prompt(raw_prompt);
    let image = generator.generate(&prompt).await?;

    let final_path = assets_dir.join(format!("{name}.png"));
    let tmp_path = assets_dir.join(format!("{name}.png.tmp"));
    if let Err(e) = write_then_publish(&tmp_path, &final_path, &image.data).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e.into());
    }
    Ok(final_path)
}

async fn write_then_publish(tmp: &Path, dest: &Path, data: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(tmp, data).await?;
    tokio::fs::rename(tmp, dest).await
}
