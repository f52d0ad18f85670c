use learner_core::LearnerSession;
use learner_core::model::{Difficulty, LessonId};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub lesson_id: LessonId,
    pub module_title: String,
    pub title: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub content_html: String,
    pub initial_code: String,
    pub completed: bool,
    pub show_next: bool,
}

impl LessonVm {
    #[must_use]
    pub fn from_session(session: &LearnerSession) -> Self {
        let module = session.active_module();
        let lesson = session.active_lesson();

        Self {
            lesson_id: lesson.id().clone(),
            module_title: module.title().to_string(),
            title: lesson.title().to_string(),
            difficulty: lesson.difficulty().label(),
            difficulty_class: difficulty_class(lesson.difficulty()),
            content_html: markdown_to_html(lesson.content()),
            initial_code: lesson.initial_code().to_string(),
            completed: session.is_completed(lesson.id()),
            show_next: session.next_enabled(),
        }
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "badge badge-beginner",
        Difficulty::Intermediate => "badge badge-intermediate",
        Difficulty::Advanced => "badge badge-advanced",
    }
}
