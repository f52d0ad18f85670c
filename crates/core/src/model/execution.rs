use crate::model::ids::{LessonId, ModuleId};

/// Transcript returned for one run of learner code. Not retained after display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub output: String,
    pub is_error: bool,
}

impl ExecutionResult {
    #[must_use]
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            is_error: false,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            is_error: true,
        }
    }
}

/// A run dispatched for a specific lesson.
///
/// The lesson is captured at dispatch time, so a result that arrives after the
/// learner navigated elsewhere is still credited to the lesson that was run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    module_id: ModuleId,
    lesson_id: LessonId,
    source: String,
}

impl RunTicket {
    #[must_use]
    pub fn new(module_id: ModuleId, lesson_id: LessonId, source: impl Into<String>) -> Self {
        Self {
            module_id,
            lesson_id,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A completed run: the ticket it was dispatched with plus the gateway result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub ticket: RunTicket,
    pub result: ExecutionResult,
}

impl RunOutcome {
    #[must_use]
    pub fn new(ticket: RunTicket, result: ExecutionResult) -> Self {
        Self { ticket, result }
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        !self.result.is_error
    }
}
