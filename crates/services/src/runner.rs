use std::sync::Arc;
use std::time::Duration;

use learner_core::model::{RunOutcome, RunTicket};
use learner_core::{Completion, InvalidReference, LearnerSession};
use tokio::time::{Instant, sleep_until};

use crate::gateway::ExecutionGateway;

/// Minimum time between pressing "Run" and seeing the output.
pub const MIN_RUN_LATENCY: Duration = Duration::from_millis(600);

/// Dispatches runs and explanations to a gateway.
///
/// No retries, no cancellation, no timeout beyond what the transport imposes.
#[derive(Clone)]
pub struct CodeRunner {
    gateway: Arc<dyn ExecutionGateway>,
    min_latency: Duration,
}

impl CodeRunner {
    #[must_use]
    pub fn new(gateway: Arc<dyn ExecutionGateway>) -> Self {
        Self {
            gateway,
            min_latency: MIN_RUN_LATENCY,
        }
    }

    #[must_use]
    pub fn with_min_latency(mut self, min_latency: Duration) -> Self {
        self.min_latency = min_latency;
        self
    }

    #[must_use]
    pub fn min_latency(&self) -> Duration {
        self.min_latency
    }

    /// Executes the ticket's source. Never resolves earlier than `min_latency`
    /// after the call.
    pub async fn run(&self, ticket: RunTicket) -> RunOutcome {
        let deadline = Instant::now() + self.min_latency;
        tracing::debug!(
            module = %ticket.module_id(),
            lesson = %ticket.lesson_id(),
            "dispatching run"
        );

        let result = self.gateway.execute(ticket.source()).await;
        sleep_until(deadline).await;

        tracing::debug!(
            lesson = %ticket.lesson_id(),
            is_error = result.is_error,
            "run finished"
        );
        RunOutcome::new(ticket, result)
    }

    pub async fn explain(&self, topic: &str, source: &str) -> String {
        self.gateway.explain(topic, source).await
    }
}

/// Feeds a finished run back into the session and logs first-time completions.
///
/// # Errors
///
/// Returns `InvalidReference` if the ticket names a lesson outside the catalog.
pub fn apply_outcome(
    session: &mut LearnerSession,
    outcome: RunOutcome,
) -> Result<Option<Completion>, InvalidReference> {
    let lesson = outcome.ticket.lesson_id().clone();
    let applied = session.apply_run(outcome)?;
    if applied.is_some_and(Completion::is_new) {
        tracing::info!(
            lesson = %lesson,
            completed = session.progress().completed_count(),
            total = session.catalog().total_lessons(),
            "lesson completed"
        );
    }
    Ok(applied)
}
