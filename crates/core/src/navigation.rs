//! Which page is shown and which lesson is active.
//!
//! The active module/lesson pair always references an entry of the catalog the
//! state was created from. Every transition that takes ids validates them first
//! and leaves the state untouched on failure.

use thiserror::Error;

use crate::catalog::{Catalog, LessonPosition};
use crate::model::{LessonId, ModuleId};
use crate::progress::ProgressTracker;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidReference {
    #[error("module {module} does not exist")]
    UnknownModule { module: ModuleId },
    #[error("lesson {lesson} is not part of module {module}")]
    UnknownLesson { module: ModuleId, lesson: LessonId },
    #[error("lesson {lesson} is not in the catalog")]
    LessonNotInCatalog { lesson: LessonId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Lesson,
    Resources,
    Certificate,
}

/// What `NavigationState::advance_to_next` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next lesson of the same module.
    NextLesson,
    /// Moved to the first lesson of the next module.
    NextModule,
    /// The last lesson of the last module was active; returned home.
    Finished,
    /// Not on the lesson page; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    view: View,
    active_module: ModuleId,
    active_lesson: LessonId,
    sidebar_open: bool,
}

impl NavigationState {
    /// Home view with the first lesson of the first module preselected.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let module = catalog.first_module();
        Self {
            view: View::Home,
            active_module: module.id().clone(),
            active_lesson: module.first_lesson().id().clone(),
            sidebar_open: false,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn active_module_id(&self) -> &ModuleId {
        &self.active_module
    }

    #[must_use]
    pub fn active_lesson_id(&self) -> &LessonId {
        &self.active_lesson
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Catalog position of the active lesson.
    #[must_use]
    pub fn position(&self, catalog: &Catalog) -> Option<LessonPosition> {
        catalog.position(&self.active_module, &self.active_lesson)
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
    }

    pub fn go_resources(&mut self) {
        self.view = View::Resources;
    }

    pub fn go_certificate(&mut self) {
        self.view = View::Certificate;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Opens a specific lesson and closes the (mobile) sidebar.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the module does not exist or does not contain
    /// the lesson.
    pub fn select_lesson(
        &mut self,
        catalog: &Catalog,
        module_id: &ModuleId,
        lesson_id: &LessonId,
    ) -> Result<(), InvalidReference> {
        let module = catalog
            .module(module_id)
            .ok_or_else(|| InvalidReference::UnknownModule {
                module: module_id.clone(),
            })?;
        if module.lesson(lesson_id).is_none() {
            return Err(InvalidReference::UnknownLesson {
                module: module_id.clone(),
                lesson: lesson_id.clone(),
            });
        }

        self.active_module = module_id.clone();
        self.active_lesson = lesson_id.clone();
        self.view = View::Lesson;
        self.sidebar_open = false;
        Ok(())
    }

    /// Opens a module at its first incomplete lesson, or at its first lesson when
    /// everything in it is already complete.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference::UnknownModule` if the module does not exist.
    pub fn start_module(
        &mut self,
        catalog: &Catalog,
        progress: &ProgressTracker,
        module_id: &ModuleId,
    ) -> Result<(), InvalidReference> {
        let module = catalog
            .module(module_id)
            .ok_or_else(|| InvalidReference::UnknownModule {
                module: module_id.clone(),
            })?;
        let target = module
            .lessons()
            .iter()
            .find(|lesson| !progress.is_completed(lesson.id()))
            .unwrap_or_else(|| module.first_lesson());

        self.active_module = module.id().clone();
        self.active_lesson = target.id().clone();
        self.view = View::Lesson;
        Ok(())
    }

    /// Steps forward in curriculum order. Past the final lesson the learner is
    /// sent home. Only acts on the lesson page.
    pub fn advance_to_next(&mut self, catalog: &Catalog) -> Advance {
        if self.view != View::Lesson {
            return Advance::Ignored;
        }
        let Some(current) = self.position(catalog) else {
            return Advance::Ignored;
        };

        match catalog.next_position(current) {
            Some(next) => {
                let Some((module, lesson)) = catalog.at(next) else {
                    return Advance::Ignored;
                };
                self.active_module = module.id().clone();
                self.active_lesson = lesson.id().clone();
                if next.module == current.module {
                    Advance::NextLesson
                } else {
                    Advance::NextModule
                }
            }
            None => {
                self.view = View::Home;
                Advance::Finished
            }
        }
    }
}
