mod certificate_vm;
mod editor_vm;
mod header_vm;
mod home_vm;
mod icons;
mod lesson_vm;
mod markdown_vm;
mod resources_vm;
mod sidebar_vm;
mod time_fmt;

pub use certificate_vm::{CertificateGateVm, CertificateVm, issue_certificate};
pub use editor_vm::{EditorVm, OUTPUT_PLACEHOLDER};
pub use header_vm::HeaderVm;
pub use home_vm::{HomeVm, ModuleCardVm};
pub use lesson_vm::LessonVm;
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use resources_vm::{ResourceCategoryVm, ResourceLinkVm, map_resource_categories};
pub use sidebar_vm::{LessonMarker, SidebarLessonVm, SidebarModuleVm, SidebarVm};
