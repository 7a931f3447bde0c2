//! Batch-generates the landing-page image assets.
//!
//! Requires `GOOGLE_API_KEY` or `GEMINI_API_KEY`. Writes one PNG per catalog
//! job into `assets/images/`, overwriting existing files.

use lp_assets::{landing_page_catalog, run_batch, FixedDelay, GeminiClient};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ASSETS_DIR: &str = "assets/images";

/// Inter-job delay to stay under the provider's rate limit.
const JOB_DELAY: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lp_assets=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Pre-flight: missing credential aborts before any job runs
    let client = GeminiClient::builder().build()?;
    let catalog = landing_page_catalog()?;

    println!("Generating {} landing-page assets into {ASSETS_DIR}/", catalog.len());

    let pacer = FixedDelay::new(JOB_DELAY);
    let report = run_batch(&client, &catalog, ASSETS_DIR, &pacer).await?;

    println!("Done: {}/{} images generated", report.succeeded(), report.total());
    if !report.all_succeeded() {
        println!("Failed jobs: {}", report.failed_names().join(", "));
    }

    Ok(())
}
