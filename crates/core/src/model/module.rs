use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{LessonId, ModuleId};
use crate::model::lesson::Lesson;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module id cannot be empty")]
    EmptyId,

    #[error("module {0} has an empty title")]
    EmptyTitle(ModuleId),

    #[error("module {0} has no lessons")]
    NoLessons(ModuleId),

    #[error("module {module} lists lesson {lesson} more than once")]
    DuplicateLesson { module: ModuleId, lesson: LessonId },
}

/// Icon kind shown next to a module. Resolved to a glyph by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleIcon {
    Layout,
    Database,
    Code,
    Cpu,
    #[default]
    Book,
}

impl ModuleIcon {
    /// Maps a catalog icon tag to an icon kind. Unknown tags fall back to `Book`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "layout" => Self::Layout,
            "database" => Self::Database,
            "code" => Self::Code,
            "cpu" => Self::Cpu,
            _ => Self::Book,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Database => "database",
            Self::Code => "code",
            Self::Cpu => "cpu",
            Self::Book => "book",
        }
    }
}

/// An ordered group of lessons forming one curriculum unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    description: String,
    icon: ModuleIcon,
    lessons: Vec<Lesson>,
}

impl Module {
    /// Creates a validated module.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError` if the id or title is blank, the lesson list is empty,
    /// or a lesson id appears twice.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: ModuleIcon,
        lessons: Vec<Lesson>,
    ) -> Result<Self, ModuleError> {
        if id.as_str().trim().is_empty() {
            return Err(ModuleError::EmptyId);
        }
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ModuleError::EmptyTitle(id));
        }
        if lessons.is_empty() {
            return Err(ModuleError::NoLessons(id));
        }

        let mut seen = HashSet::with_capacity(lessons.len());
        for lesson in &lessons {
            if !seen.insert(lesson.id()) {
                return Err(ModuleError::DuplicateLesson {
                    module: id.clone(),
                    lesson: lesson.id().clone(),
                });
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into().trim().to_string(),
            icon,
            lessons,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> ModuleIcon {
        self.icon
    }

    /// Lessons in curriculum order. Never empty.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn first_lesson(&self) -> &Lesson {
        &self.lessons[0]
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn lesson_index(&self, id: &LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}
