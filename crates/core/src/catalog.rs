//! The read-only curriculum: ordered modules, each an ordered list of lessons.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    Difficulty, Lesson, LessonError, LessonId, Module, ModuleError, ModuleIcon, ModuleId,
};

const BUILTIN_CURRICULUM: &str = include_str!("../data/curriculum.toml");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no modules")]
    Empty,
    #[error("module id {0} appears more than once")]
    DuplicateModule(ModuleId),
    #[error("lesson id {0} appears in more than one module")]
    DuplicateLesson(LessonId),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error("invalid curriculum data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Index pair addressing one lesson inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LessonPosition {
    pub module: usize,
    pub lesson: usize,
}

/// Immutable, validated curriculum.
///
/// A `Catalog` always holds at least one module and every module holds at least
/// one lesson, so "first module, first lesson" is always addressable. Lesson ids
/// are unique across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Builds a catalog from already-validated modules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list, or a duplicate error if a
    /// module id or a lesson id is reused.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        if modules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut module_ids = HashSet::with_capacity(modules.len());
        let mut lesson_ids = HashSet::new();
        for module in &modules {
            if !module_ids.insert(module.id()) {
                return Err(CatalogError::DuplicateModule(module.id().clone()));
            }
            for lesson in module.lessons() {
                if !lesson_ids.insert(lesson.id()) {
                    return Err(CatalogError::DuplicateLesson(lesson.id().clone()));
                }
            }
        }

        Ok(Self { modules })
    }

    /// Parses a curriculum document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML and a validation error for
    /// structurally invalid content.
    pub fn from_toml(input: &str) -> Result<Self, CatalogError> {
        let file: CurriculumFile = toml::from_str(input)?;
        let modules = file
            .modules
            .into_iter()
            .map(ModuleRecord::into_module)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(modules)
    }

    /// The curriculum compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded data fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CURRICULUM)
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn first_module(&self) -> &Module {
        &self.modules[0]
    }

    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| module.id() == id)
    }

    #[must_use]
    pub fn module_index(&self, id: &ModuleId) -> Option<usize> {
        self.modules.iter().position(|module| module.id() == id)
    }

    /// Resolves a (module, lesson) pair. `None` if the lesson is not part of that module.
    #[must_use]
    pub fn position(&self, module_id: &ModuleId, lesson_id: &LessonId) -> Option<LessonPosition> {
        let module = self.module_index(module_id)?;
        let lesson = self.modules[module].lesson_index(lesson_id)?;
        Some(LessonPosition { module, lesson })
    }

    /// Finds a lesson anywhere in the catalog.
    #[must_use]
    pub fn locate(&self, lesson_id: &LessonId) -> Option<LessonPosition> {
        self.modules.iter().enumerate().find_map(|(module, m)| {
            m.lesson_index(lesson_id)
                .map(|lesson| LessonPosition { module, lesson })
        })
    }

    #[must_use]
    pub fn at(&self, position: LessonPosition) -> Option<(&Module, &Lesson)> {
        let module = self.modules.get(position.module)?;
        let lesson = module.lessons().get(position.lesson)?;
        Some((module, lesson))
    }

    /// The lesson that follows `position` in curriculum order, crossing into the
    /// next module when needed. `None` after the last lesson of the last module.
    #[must_use]
    pub fn next_position(&self, position: LessonPosition) -> Option<LessonPosition> {
        let module = self.modules.get(position.module)?;
        if position.lesson + 1 < module.lesson_count() {
            return Some(LessonPosition {
                module: position.module,
                lesson: position.lesson + 1,
            });
        }
        if position.module + 1 < self.modules.len() {
            return Some(LessonPosition {
                module: position.module + 1,
                lesson: 0,
            });
        }
        None
    }

    #[must_use]
    pub fn contains_lesson(&self, lesson_id: &LessonId) -> bool {
        self.locate(lesson_id).is_some()
    }

    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(Module::lessons)
    }

    /// Sum of lesson counts across all modules.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(Module::lesson_count).sum()
    }
}

//
// ─── RAW RECORDS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CurriculumFile {
    modules: Vec<ModuleRecord>,
}

#[derive(Debug, Deserialize)]
struct ModuleRecord {
    id: ModuleId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
    lessons: Vec<LessonRecord>,
}

#[derive(Debug, Deserialize)]
struct LessonRecord {
    id: LessonId,
    title: String,
    difficulty: Difficulty,
    content: String,
    #[serde(default)]
    initial_code: String,
}

impl ModuleRecord {
    fn into_module(self) -> Result<Module, CatalogError> {
        let lessons = self
            .lessons
            .into_iter()
            .map(|record| {
                Lesson::new(
                    record.id,
                    record.title,
                    record.content,
                    record.initial_code,
                    record.difficulty,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Module::new(
            self.id,
            self.title,
            self.description,
            ModuleIcon::from_tag(&self.icon),
            lessons,
        )?)
    }
}
