#![warn(missing_docs)]
//! Batch generator for landing-page image assets.
//!
//! Iterates a fixed catalog of image jobs, composes each job's prompt with a
//! shared style prefix/suffix, asks the Gemini API for an image, and writes
//! the returned bytes to `<assets_dir>/<name>.png`. Jobs run strictly in
//! catalog order; one job failing never stops the rest of the batch.
//!
//! # Quick Start
//!
//! ```no_run
//! use lp_assets::{landing_page_catalog, FixedDelay, GeminiClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> lp_assets::Result<()> {
//!     let client = GeminiClient::builder().build()?;
//!     let catalog = landing_page_catalog()?;
//!     let pacer = FixedDelay::new(Duration::from_secs(3));
//!     let report = lp_assets::run_batch(&client, &catalog, "assets/images", &pacer).await?;
//!     println!("{} of {} generated", report.succeeded(), report.total());
//!     Ok(())
//! }
//! ```

mod catalog;
mod error;
mod gemini;
mod generator;
mod runner;
mod style;

pub use catalog::{landing_page_catalog, AspectRatio, Catalog, ImageJob};
pub use error::{AssetError, Result};
pub use gemini::{GeminiClient, GeminiClientBuilder};
pub use generator::{GeneratedImage, ImageGenerator};
pub use runner::{run_batch, FixedDelay, JobOutcome, NoDelay, Pacer, RunReport};
pub use style::{compose_prompt, STYLE_PREFIX, STYLE_SUFFIX};
