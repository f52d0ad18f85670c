//! Values computed from catalog + progress + navigation on every read.
//!
//! Nothing here is cached; callers recompute after each mutation.

use crate::catalog::Catalog;
use crate::model::{LessonId, Module, ModuleId};
use crate::navigation::{NavigationState, View};
use crate::progress::ProgressTracker;

/// Progress of a single module as shown on module cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// One consistent read of the overall numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub certificate_unlocked: bool,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn compute(catalog: &Catalog, progress: &ProgressTracker) -> Self {
        let completed = progress.completed_count();
        let total = progress.total_count(catalog);
        Self {
            completed,
            total,
            percent: percent(completed, total),
            certificate_unlocked: certificate_unlocked(catalog, progress),
        }
    }
}

/// `round(100 * part / whole)` with halves rounded up, clamped to `0..=100`.
/// A zero `whole` yields 0.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u128;
    let whole = whole as u128;
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

#[must_use]
pub fn overall_progress_percent(catalog: &Catalog, progress: &ProgressTracker) -> u8 {
    percent(progress.completed_count(), progress.total_count(catalog))
}

#[must_use]
pub fn module_progress_percent(module: &Module, progress: &ProgressTracker) -> u8 {
    percent(progress.completed_in(module), module.lesson_count())
}

#[must_use]
pub fn module_status(module: &Module, progress: &ProgressTracker) -> ModuleStatus {
    match progress.completed_in(module) {
        0 => ModuleStatus::NotStarted,
        n if n == module.lesson_count() => ModuleStatus::Completed,
        _ => ModuleStatus::InProgress,
    }
}

/// True only when every lesson in a non-empty catalog is completed.
#[must_use]
pub fn certificate_unlocked(catalog: &Catalog, progress: &ProgressTracker) -> bool {
    catalog.total_lessons() > 0
        && catalog
            .lessons()
            .all(|lesson| progress.is_completed(lesson.id()))
}

/// Whether anything follows the given lesson in curriculum order.
///
/// False for the final lesson of the final module and for references that are
/// not in the catalog.
#[must_use]
pub fn has_next(catalog: &Catalog, module_id: &ModuleId, lesson_id: &LessonId) -> bool {
    catalog
        .position(module_id, lesson_id)
        .and_then(|position| catalog.next_position(position))
        .is_some()
}

/// Whether the "Next Lesson" control is enabled: on the lesson page, something
/// follows, and the current lesson has been completed.
#[must_use]
pub fn next_enabled(
    catalog: &Catalog,
    navigation: &NavigationState,
    progress: &ProgressTracker,
) -> bool {
    navigation.view() == View::Lesson
        && has_next(
            catalog,
            navigation.active_module_id(),
            navigation.active_lesson_id(),
        )
        && progress.is_completed(navigation.active_lesson_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::from_toml(
            r#"
[[modules]]
id = "m"
title = "M"

[[modules.lessons]]
id = "a"
title = "A"
difficulty = "beginner"
content = "x"

[[modules.lessons]]
id = "b"
title = "B"
difficulty = "beginner"
content = "x"

[[modules.lessons]]
id = "c"
title = "C"
difficulty = "beginner"
content = "x"
"#,
        )
        .unwrap()
    }

    #[test]
    fn percent_rounds_half_up_and_guards_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(0, 39), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 39), 3);
        assert_eq!(percent(39, 39), 100);
        assert_eq!(percent(50, 39), 100);
    }

    #[test]
    fn module_status_follows_completed_lessons() {
        let catalog = small_catalog();
        let module = catalog.first_module();
        let mut progress = ProgressTracker::new();
        assert_eq!(module_status(module, &progress), ModuleStatus::NotStarted);

        progress.mark_complete(LessonId::new("b"));
        assert_eq!(module_status(module, &progress), ModuleStatus::InProgress);
        assert_eq!(module_progress_percent(module, &progress), 33);

        progress.mark_complete(LessonId::new("a"));
        progress.mark_complete(LessonId::new("c"));
        assert_eq!(module_status(module, &progress), ModuleStatus::Completed);
        assert_eq!(module_progress_percent(module, &progress), 100);
    }

    #[test]
    fn certificate_needs_every_lesson() {
        let catalog = small_catalog();
        let mut progress = ProgressTracker::new();
        progress.mark_complete(LessonId::new("a"));
        progress.mark_complete(LessonId::new("b"));
        assert!(!certificate_unlocked(&catalog, &progress));

        progress.mark_complete(LessonId::new("c"));
        assert!(certificate_unlocked(&catalog, &progress));

        progress.mark_complete(LessonId::new("a"));
        assert!(certificate_unlocked(&catalog, &progress));
    }

    #[test]
    fn has_next_is_false_only_at_the_very_end() {
        let catalog = Catalog::builtin().unwrap();
        let progress = ProgressTracker::new();
        let last_module = catalog.modules().last().unwrap();
        let last_lesson = last_module.lessons().last().unwrap();

        for module in catalog.modules() {
            for lesson in module.lessons() {
                let expected = lesson.id() != last_lesson.id();
                assert_eq!(has_next(&catalog, module.id(), lesson.id()), expected);
            }
        }
        assert_eq!(overall_progress_percent(&catalog, &progress), 0);
    }

    #[test]
    fn next_enabled_requires_completion_of_current_lesson() {
        let catalog = small_catalog();
        let mut progress = ProgressTracker::new();
        let mut nav = NavigationState::new(&catalog);
        nav.start_module(&catalog, &progress, &ModuleId::new("m"))
            .unwrap();

        assert!(!next_enabled(&catalog, &nav, &progress));
        progress.mark_complete(LessonId::new("a"));
        assert!(next_enabled(&catalog, &nav, &progress));

        nav.go_home();
        assert!(!next_enabled(&catalog, &nav, &progress));
    }

    #[test]
    fn snapshot_bundles_overall_numbers() {
        let catalog = small_catalog();
        let mut progress = ProgressTracker::new();
        progress.mark_complete(LessonId::new("a"));

        let snapshot = ProgressSnapshot::compute(&catalog, &progress);
        assert_eq!(
            snapshot,
            ProgressSnapshot {
                completed: 1,
                total: 3,
                percent: 33,
                certificate_unlocked: false,
            }
        );
    }
}
