use std::sync::Arc;

use pantrycam_shared::Ingredient;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::{AnalysisError, Analyzer, Image};

pub type AnalysisOutcome = Result<Vec<Ingredient>, AnalysisError>;

/// One analysis running in the background.
///
/// Resolves to exactly one outcome. Dropping the task before it resolves
/// cancels the analysis.
pub struct AnalysisTask {
    handle: JoinHandle<AnalysisOutcome>,
    token: CancellationToken,
    guard: DropGuard,
}

impl AnalysisTask {
    pub fn spawn(analyzer: Arc<dyn Analyzer>, image: Image) -> Self {
        let token = CancellationToken::new();
        let child = token.child_token();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = child.cancelled() => Err(AnalysisError::Cancelled),
                outcome = analyzer.detect(&image) => outcome,
            }
        });

        Self {
            handle,
            guard: token.clone().drop_guard(),
            token,
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn outcome(self) -> AnalysisOutcome {
        let Self { handle, guard, .. } = self;

        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => Err(AnalysisError::Cancelled),
            Err(err) => Err(AnalysisError::Aborted(err.to_string())),
        };

        guard.disarm();

        outcome
    }
}
