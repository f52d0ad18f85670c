use learner_core::model::{LessonId, ModuleId};
use learner_core::{LearnerSession, View};

use crate::vm::icons::module_glyph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonMarker {
    Completed,
    Active,
    Pending,
}

impl LessonMarker {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Completed => "\u{2714}",
            Self::Active => "\u{25B6}",
            Self::Pending => "\u{25CB}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLessonVm {
    pub id: LessonId,
    pub title: String,
    pub marker: LessonMarker,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarModuleVm {
    pub id: ModuleId,
    pub title: String,
    pub glyph: &'static str,
    pub completed: usize,
    pub total: usize,
    pub is_active: bool,
    pub lessons: Vec<SidebarLessonVm>,
}

impl SidebarModuleVm {
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarVm {
    pub view: View,
    pub open: bool,
    pub modules: Vec<SidebarModuleVm>,
}

impl SidebarVm {
    /// Active markers only apply while the lesson page is showing.
    #[must_use]
    pub fn from_session(session: &LearnerSession) -> Self {
        let view = session.view();
        let on_lesson = view == View::Lesson;
        let navigation = session.navigation();
        let progress = session.progress();

        let modules = session
            .catalog()
            .modules()
            .iter()
            .map(|module| {
                let module_active = on_lesson && module.id() == navigation.active_module_id();
                let lessons = module
                    .lessons()
                    .iter()
                    .map(|lesson| {
                        let is_active =
                            module_active && lesson.id() == navigation.active_lesson_id();
                        let marker = if progress.is_completed(lesson.id()) {
                            LessonMarker::Completed
                        } else if is_active {
                            LessonMarker::Active
                        } else {
                            LessonMarker::Pending
                        };
                        SidebarLessonVm {
                            id: lesson.id().clone(),
                            title: lesson.title().to_string(),
                            marker,
                            is_active,
                        }
                    })
                    .collect();

                SidebarModuleVm {
                    id: module.id().clone(),
                    title: module.title().to_string(),
                    glyph: module_glyph(module.icon()),
                    completed: progress.completed_in(module),
                    total: module.lesson_count(),
                    is_active: module_active,
                    lessons,
                }
            })
            .collect();

        Self {
            view,
            open: session.sidebar_open(),
            modules,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use learner_core::Catalog;
    use learner_core::time::fixed_clock;

    use super::*;

    fn session() -> LearnerSession {
        LearnerSession::new(Arc::new(Catalog::builtin().unwrap()), fixed_clock())
    }

    #[test]
    fn nothing_is_active_on_the_home_page() {
        let vm = SidebarVm::from_session(&session());

        assert_eq!(vm.view, View::Home);
        assert!(vm.modules.iter().all(|module| !module.is_active));
        assert_eq!(vm.modules[0].lessons[0].marker, LessonMarker::Pending);
        assert_eq!(vm.modules[0].count_label(), format!("0/{}", vm.modules[0].total));
    }

    #[test]
    fn completion_outranks_the_active_marker() {
        let mut session = session();
        session
            .select_lesson(&ModuleId::new("fundamentals"), &LessonId::new("variables"))
            .unwrap();
        session.mark_complete(&LessonId::new("hello-world")).unwrap();
        session.mark_complete(&LessonId::new("variables")).unwrap();
        session
            .select_lesson(&ModuleId::new("fundamentals"), &LessonId::new("arithmetic"))
            .unwrap();

        let vm = SidebarVm::from_session(&session);
        let fundamentals = &vm.modules[0];

        assert!(fundamentals.is_active);
        assert_eq!(fundamentals.completed, 2);
        assert_eq!(fundamentals.lessons[0].marker, LessonMarker::Completed);
        assert_eq!(fundamentals.lessons[1].marker, LessonMarker::Completed);
        assert_eq!(fundamentals.lessons[2].marker, LessonMarker::Active);
        assert!(fundamentals.lessons[2].is_active);
        assert!(!vm.modules[1].is_active);
    }
}
