use learner_core::model::{ExecutionResult, LessonId};

pub const OUTPUT_PLACEHOLDER: &str = "Hit run to see output...";

/// Code editor state for the active lesson.
///
/// One run and one explanation may be outstanding at a time. Results that come
/// back for a lesson the editor no longer shows are not displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorVm {
    lesson_id: LessonId,
    initial_code: String,
    code: String,
    output: Option<ExecutionResult>,
    explanation: Option<String>,
    running: bool,
    explaining: bool,
}

impl EditorVm {
    #[must_use]
    pub fn new(lesson_id: LessonId, initial_code: impl Into<String>) -> Self {
        let initial_code = initial_code.into();
        Self {
            lesson_id,
            code: initial_code.clone(),
            initial_code,
            output: None,
            explanation: None,
            running: false,
            explaining: false,
        }
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn output(&self) -> Option<&ExecutionResult> {
        self.output.as_ref()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_explaining(&self) -> bool {
        self.explaining
    }

    #[must_use]
    pub fn run_label(&self) -> &'static str {
        if self.running { "Running..." } else { "Run Code" }
    }

    /// Switches to another lesson's starter code. The in-flight flags survive so
    /// a run dispatched from the previous lesson still blocks a second one.
    pub fn show_lesson(&mut self, lesson_id: &LessonId, initial_code: &str) {
        if &self.lesson_id == lesson_id {
            return;
        }
        self.lesson_id = lesson_id.clone();
        self.initial_code = initial_code.to_string();
        self.reset();
    }

    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    pub fn reset(&mut self) {
        self.code = self.initial_code.clone();
        self.output = None;
        self.explanation = None;
    }

    /// Claims the run slot. Returns `false` while another run is outstanding.
    pub fn try_begin_run(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.output = None;
        self.explanation = None;
        true
    }

    pub fn finish_run(&mut self, lesson_id: &LessonId, result: ExecutionResult) {
        self.running = false;
        if &self.lesson_id == lesson_id {
            self.output = Some(result);
        }
    }

    pub fn try_begin_explain(&mut self) -> bool {
        if self.explaining {
            return false;
        }
        self.explaining = true;
        true
    }

    pub fn finish_explain(&mut self, lesson_id: &LessonId, text: String) {
        self.explaining = false;
        if &self.lesson_id == lesson_id {
            self.explanation = Some(text);
        }
    }
}
