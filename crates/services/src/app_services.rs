use std::sync::Arc;

use learner_core::{Catalog, LearnerSession, ResourceLibrary};

use crate::Clock;
use crate::error::AppServicesError;
use crate::gateway::{ExecutionGateway, LlmGateway};
use crate::runner::CodeRunner;

/// Assembles app-facing services around the embedded curriculum.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    resources: Arc<ResourceLibrary>,
    runner: Arc<CodeRunner>,
}

impl AppServices {
    /// Build services with the LLM gateway configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the embedded curriculum or resource data
    /// fails validation.
    pub fn from_env() -> Result<Self, AppServicesError> {
        Self::new(Arc::new(LlmGateway::from_env()))
    }

    /// Build services around any gateway.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the embedded curriculum or resource data
    /// fails validation.
    pub fn new(gateway: Arc<dyn ExecutionGateway>) -> Result<Self, AppServicesError> {
        let catalog = Catalog::builtin().map_err(learner_core::Error::from)?;
        let resources = ResourceLibrary::builtin().map_err(learner_core::Error::from)?;
        tracing::debug!(
            modules = catalog.modules().len(),
            lessons = catalog.total_lessons(),
            "curriculum loaded"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            resources: Arc::new(resources),
            runner: Arc::new(CodeRunner::new(gateway)),
        })
    }

    #[must_use]
    pub fn with_runner(mut self, runner: CodeRunner) -> Self {
        self.runner = Arc::new(runner);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn resources(&self) -> Arc<ResourceLibrary> {
        Arc::clone(&self.resources)
    }

    #[must_use]
    pub fn runner(&self) -> Arc<CodeRunner> {
        Arc::clone(&self.runner)
    }

    /// Fresh in-memory session over the shared catalog.
    #[must_use]
    pub fn new_session(&self, clock: Clock) -> LearnerSession {
        LearnerSession::new(Arc::clone(&self.catalog), clock)
    }
}
