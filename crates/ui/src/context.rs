use std::sync::Arc;

use learner_core::{Catalog, LearnerSession, ResourceLibrary};
use services::{Clock, CodeRunner};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn resources(&self) -> Arc<ResourceLibrary>;
    fn runner(&self) -> Arc<CodeRunner>;
    fn clock(&self) -> Clock;
    fn start_in_dark_mode(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    resources: Arc<ResourceLibrary>,
    runner: Arc<CodeRunner>,
    clock: Clock,
    dark_mode: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            resources: app.resources(),
            runner: app.runner(),
            clock: app.clock(),
            dark_mode: app.start_in_dark_mode(),
        }
    }

    #[must_use]
    pub fn resources(&self) -> Arc<ResourceLibrary> {
        Arc::clone(&self.resources)
    }

    #[must_use]
    pub fn runner(&self) -> Arc<CodeRunner> {
        Arc::clone(&self.runner)
    }

    /// A fresh session positioned on the home page.
    #[must_use]
    pub fn new_session(&self) -> LearnerSession {
        LearnerSession::new(Arc::clone(&self.catalog), self.clock).with_dark_mode(self.dark_mode)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
