mod execution;
mod ids;
mod lesson;
mod module;

pub use execution::{ExecutionResult, RunOutcome, RunTicket};
pub use ids::{LessonId, ModuleId, ParseIdError};
pub use lesson::{Difficulty, Lesson, LessonError};
pub use module::{Module, ModuleError, ModuleIcon};
