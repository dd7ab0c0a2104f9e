use std::time::Duration;

use async_trait::async_trait;
use pantrycam_shared::Ingredient;

use crate::Image;

/// Labels returned by [`MockAnalyzer`] whatever the picture shows.
pub const MOCK_INGREDIENTS: [&str; 6] = ["tomato", "onion", "lettuce", "egg", "rice", "beans"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis cancelled")]
    Cancelled,

    #[error("analysis failed: {0}")]
    Failed(String),

    #[error("analysis aborted: {0}")]
    Aborted(String),
}

/// Turns a picture into the ingredients it shows.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn detect(&self, image: &Image) -> Result<Vec<Ingredient>, AnalysisError>;
}

/// Stand-in for real recognition: waits `delay`, then answers with
/// [`MOCK_INGREDIENTS`].
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    pub delay: Duration,
}

impl MockAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    #[tracing::instrument(skip_all, fields(file = %image.file_name, bytes = image.data.len()))]
    async fn detect(&self, image: &Image) -> Result<Vec<Ingredient>, AnalysisError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::debug!("mock analysis finished");

        Ok(MOCK_INGREDIENTS.iter().map(|i| i.to_string()).collect())
    }
}
