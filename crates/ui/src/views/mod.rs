mod certificate;
mod editor;
mod home;
mod lesson;
mod resources;
mod shell;
mod sidebar;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use dioxus::prelude::*;
use learner_core::LearnerSession;
use learner_core::model::ModuleId;

pub use certificate::CertificateView;
pub use editor::CodeEditor;
pub use home::HomeView;
pub use lesson::LessonView;
pub use resources::ResourcesView;
pub use shell::Shell;
pub use sidebar::Sidebar;

pub(crate) fn start_module(mut session: Signal<LearnerSession>, module_id: &ModuleId) {
    if let Err(err) = session.write().start_module(module_id) {
        tracing::error!(error = %err, "start requested for a module outside the catalog");
    }
}
