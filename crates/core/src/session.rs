//! The learner's in-memory session: the only place progress and navigation change.
//!
//! The presentation layer reads through the accessors and mutates exclusively
//! through the methods below. Nothing here is persisted.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::certificate::{Certificate, CertificateError};
use crate::derived::{self, ProgressSnapshot};
use crate::model::{Lesson, LessonId, Module, ModuleId, RunOutcome, RunTicket};
use crate::navigation::{Advance, InvalidReference, NavigationState, View};
use crate::notice::CompletionNotice;
use crate::progress::{Completion, ProgressTracker};
use crate::time::Clock;

#[derive(Debug, Clone)]
pub struct LearnerSession {
    catalog: Arc<Catalog>,
    progress: ProgressTracker,
    navigation: NavigationState,
    notice: Option<CompletionNotice>,
    dark_mode: bool,
    clock: Clock,
}

impl LearnerSession {
    /// Fresh session: home page, first lesson preselected, nothing completed,
    /// dark mode on.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        let navigation = NavigationState::new(&catalog);
        Self {
            catalog,
            progress: ProgressTracker::new(),
            navigation,
            notice: None,
            dark_mode: true,
            clock,
        }
    }

    #[must_use]
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    // ─── Read accessors ───────────────────────────────────────────────────────

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.navigation.view()
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.navigation.sidebar_open()
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.progress.is_completed(lesson_id)
    }

    #[must_use]
    pub fn active_module(&self) -> &Module {
        self.active_entry().0
    }

    #[must_use]
    pub fn active_lesson(&self) -> &Lesson {
        self.active_entry().1
    }

    fn active_entry(&self) -> (&Module, &Lesson) {
        // Navigation only ever stores validated references, so the lookup cannot
        // miss; the fallback keeps this total.
        let position = self.navigation.position(&self.catalog).unwrap_or_default();
        self.catalog.at(position).unwrap_or_else(|| {
            let module = self.catalog.first_module();
            (module, module.first_lesson())
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::compute(&self.catalog, &self.progress)
    }

    #[must_use]
    pub fn overall_progress_percent(&self) -> u8 {
        derived::overall_progress_percent(&self.catalog, &self.progress)
    }

    #[must_use]
    pub fn certificate_unlocked(&self) -> bool {
        derived::certificate_unlocked(&self.catalog, &self.progress)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        derived::has_next(
            &self.catalog,
            self.navigation.active_module_id(),
            self.navigation.active_lesson_id(),
        )
    }

    #[must_use]
    pub fn next_enabled(&self) -> bool {
        derived::next_enabled(&self.catalog, &self.navigation, &self.progress)
    }

    /// The completion banner, if one is still within its display window.
    #[must_use]
    pub fn notice(&self) -> Option<&CompletionNotice> {
        let now = self.clock.now();
        self.notice.as_ref().filter(|notice| notice.is_visible(now))
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    // ─── Navigation ───────────────────────────────────────────────────────────

    pub fn go_home(&mut self) {
        self.navigation.go_home();
    }

    pub fn go_resources(&mut self) {
        self.navigation.go_resources();
    }

    pub fn go_certificate(&mut self) {
        self.navigation.go_certificate();
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.navigation.set_sidebar_open(open);
    }

    pub fn toggle_sidebar(&mut self) {
        let open = self.navigation.sidebar_open();
        self.navigation.set_sidebar_open(!open);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// # Errors
    ///
    /// Returns `InvalidReference` when the pair is not in the catalog.
    pub fn select_lesson(
        &mut self,
        module_id: &ModuleId,
        lesson_id: &LessonId,
    ) -> Result<(), InvalidReference> {
        self.navigation
            .select_lesson(&self.catalog, module_id, lesson_id)
    }

    /// # Errors
    ///
    /// Returns `InvalidReference` when the module is not in the catalog.
    pub fn start_module(&mut self, module_id: &ModuleId) -> Result<(), InvalidReference> {
        self.navigation
            .start_module(&self.catalog, &self.progress, module_id)
    }

    pub fn advance_to_next(&mut self) -> Advance {
        self.navigation.advance_to_next(&self.catalog)
    }

    // ─── Progress ─────────────────────────────────────────────────────────────

    /// Marks a lesson complete and raises the completion notice on the first
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference::LessonNotInCatalog` for unknown lesson ids.
    pub fn mark_complete(&mut self, lesson_id: &LessonId) -> Result<Completion, InvalidReference> {
        if !self.catalog.contains_lesson(lesson_id) {
            return Err(InvalidReference::LessonNotInCatalog {
                lesson: lesson_id.clone(),
            });
        }

        let completion = self.progress.mark_complete(lesson_id.clone());
        if completion.is_new() {
            self.notice = Some(CompletionNotice::new(lesson_id.clone(), self.clock.now()));
        }
        Ok(completion)
    }

    /// Drops the completion notice once its display window has passed.
    pub fn clear_expired_notice(&mut self) {
        let now = self.clock.now();
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| !notice.is_visible(now))
        {
            self.notice = None;
        }
    }

    /// Moves a fixed clock forward (no effect on the system clock).
    pub fn advance_clock(&mut self, delta: chrono::Duration) {
        self.clock.advance(delta);
    }

    // ─── Runs ─────────────────────────────────────────────────────────────────

    /// Captures the active lesson for a run of `source`.
    #[must_use]
    pub fn begin_run(&self, source: impl Into<String>) -> RunTicket {
        let (module, lesson) = self.active_entry();
        RunTicket::new(module.id().clone(), lesson.id().clone(), source)
    }

    /// Applies a finished run. A successful result completes the lesson named in
    /// the ticket, even if the learner has since moved to another lesson. Failed
    /// runs change nothing. Navigation is never touched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the ticket names a lesson outside the catalog.
    pub fn apply_run(&mut self, outcome: RunOutcome) -> Result<Option<Completion>, InvalidReference> {
        if !outcome.succeeded() {
            return Ok(None);
        }
        self.mark_complete(outcome.ticket.lesson_id()).map(Some)
    }

    // ─── Certificate ──────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// See `Certificate::issue`.
    pub fn issue_certificate(&self, recipient: &str) -> Result<Certificate, CertificateError> {
        Certificate::issue(recipient, &self.catalog, &self.progress, self.clock.now())
    }
}
