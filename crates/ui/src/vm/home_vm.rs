use learner_core::derived::{module_progress_percent, module_status};
use learner_core::model::ModuleId;
use learner_core::{LearnerSession, ModuleStatus};

use crate::vm::icons::module_glyph;

const ACCENTS: [&str; 4] = ["blue", "pink", "cyan", "purple"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    pub glyph: &'static str,
    pub accent: &'static str,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub status: ModuleStatus,
}

impl ModuleCardVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{} of {} completed", self.completed, self.total)
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match self.status {
            ModuleStatus::NotStarted => "Start",
            ModuleStatus::InProgress => "Continue",
            ModuleStatus::Completed => "Review",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub module_count: usize,
    pub exercise_count: usize,
    pub percent: u8,
    pub modules: Vec<ModuleCardVm>,
}

impl HomeVm {
    #[must_use]
    pub fn from_session(session: &LearnerSession) -> Self {
        let catalog = session.catalog();
        let progress = session.progress();
        let snapshot = session.snapshot();

        let modules = catalog
            .modules()
            .iter()
            .enumerate()
            .map(|(index, module)| ModuleCardVm {
                id: module.id().clone(),
                title: module.title().to_string(),
                description: module.description().to_string(),
                glyph: module_glyph(module.icon()),
                accent: ACCENTS[index % ACCENTS.len()],
                completed: progress.completed_in(module),
                total: module.lesson_count(),
                percent: module_progress_percent(module, progress),
                status: module_status(module, progress),
            })
            .collect();

        Self {
            module_count: catalog.modules().len(),
            exercise_count: snapshot.total,
            percent: snapshot.percent,
            modules,
        }
    }

    /// The module the "Start Learning" call to action opens.
    #[must_use]
    pub fn first_module(&self) -> Option<&ModuleId> {
        self.modules.first().map(|card| &card.id)
    }
}
