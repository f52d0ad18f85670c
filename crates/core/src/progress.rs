use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::model::{LessonId, Module};

/// Result of `ProgressTracker::mark_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The lesson moved from not-completed to completed.
    Newly,
    /// The lesson was already completed; nothing changed.
    Already,
}

impl Completion {
    #[must_use]
    pub fn is_new(self) -> bool {
        matches!(self, Self::Newly)
    }
}

/// The set of lessons the learner has successfully run this session.
///
/// Completion only grows: there is no removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    completed: BTreeSet<LessonId>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed.contains(lesson_id)
    }

    /// Records a completion. Idempotent; only the first call per id reports `Newly`.
    pub fn mark_complete(&mut self, lesson_id: LessonId) -> Completion {
        if self.completed.insert(lesson_id) {
            Completion::Newly
        } else {
            Completion::Already
        }
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Number of lessons in the catalog, recomputed on every call.
    #[must_use]
    pub fn total_count(&self, catalog: &Catalog) -> usize {
        catalog.total_lessons()
    }

    /// Completed lessons belonging to `module`.
    #[must_use]
    pub fn completed_in(&self, module: &Module) -> usize {
        module
            .lessons()
            .iter()
            .filter(|lesson| self.is_completed(lesson.id()))
            .count()
    }

    pub fn completed_ids(&self) -> impl Iterator<Item = &LessonId> {
        self.completed.iter()
    }
}
