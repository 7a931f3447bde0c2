//! The seam between the batch runner and the remote image API.

use crate::error::Result;
use async_trait::async_trait;

/// A generated image: raw bytes as received, no re-encoding or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "generated image should be saved or processed"]
pub struct GeneratedImage {
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// MIME type reported by the service (e.g. "image/png").
    pub mime_type: String,
}

impl GeneratedImage {
    /// Creates a new generated image.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Turns a composed prompt into image bytes.
///
/// Exactly one remote call per invocation; callers decide pacing and retry
/// policy (this batch makes a single attempt per job). The runner takes this
/// as a trait object so tests can substitute an in-memory double.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generates an image from the composed prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage>;
}
