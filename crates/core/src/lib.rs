#![forbid(unsafe_code)]

pub mod catalog;
pub mod certificate;
pub mod derived;
pub mod error;
pub mod model;
pub mod navigation;
pub mod notice;
pub mod progress;
pub mod resources;
pub mod session;
pub mod time;

pub use catalog::{Catalog, CatalogError, LessonPosition};
pub use certificate::{Certificate, CertificateError};
pub use derived::{ModuleStatus, ProgressSnapshot};
pub use error::Error;
pub use navigation::{Advance, InvalidReference, NavigationState, View};
pub use notice::CompletionNotice;
pub use progress::{Completion, ProgressTracker};
pub use resources::{ResourceCategory, ResourceIcon, ResourceLibrary, ResourceLink};
pub use session::LearnerSession;
pub use time::Clock;
