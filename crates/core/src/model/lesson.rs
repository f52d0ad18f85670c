use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::LessonId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson id cannot be empty")]
    EmptyId,

    #[error("lesson {0} has an empty title")]
    EmptyTitle(LessonId),

    #[error("lesson {0} has no content")]
    EmptyContent(LessonId),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A single unit of instruction paired with an editable code sample.
///
/// `content` is markdown-like text that may embed fenced code blocks.
/// Lessons are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    content: String,
    initial_code: String,
    difficulty: Difficulty,
}

impl Lesson {
    /// Creates a validated lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the id, title, or content is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        content: impl Into<String>,
        initial_code: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, LessonError> {
        if id.as_str().trim().is_empty() {
            return Err(LessonError::EmptyId);
        }
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle(id));
        }
        let content = content.into();
        if content.trim().is_empty() {
            return Err(LessonError::EmptyContent(id));
        }

        Ok(Self {
            id,
            title,
            content,
            initial_code: initial_code.into(),
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The starter code loaded into the editor when the lesson opens.
    #[must_use]
    pub fn initial_code(&self) -> &str {
        &self.initial_code
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
