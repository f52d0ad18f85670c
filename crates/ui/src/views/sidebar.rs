use dioxus::prelude::*;
use learner_core::model::ModuleId;
use learner_core::{LearnerSession, View};

use crate::vm::{SidebarLessonVm, SidebarModuleVm, SidebarVm};

#[component]
pub fn Sidebar() -> Element {
    let mut session = use_context::<Signal<LearnerSession>>();
    let vm = SidebarVm::from_session(&session.read());

    let mut expanded =
        use_signal(|| Some(session.peek().navigation().active_module_id().clone()));

    // Follow the active module whenever the lesson page moves to another one.
    let focus = use_memo(move || {
        let current = session.read();
        (current.view() == View::Lesson).then(|| current.navigation().active_module_id().clone())
    });
    use_effect(move || {
        if let Some(module_id) = focus() {
            expanded.set(Some(module_id));
        }
    });

    let toggle = use_callback(move |module_id: ModuleId| {
        let next = if expanded.peek().as_ref() == Some(&module_id) {
            None
        } else {
            Some(module_id)
        };
        expanded.set(next);
    });

    let nav_class = if vm.open { "sidebar open" } else { "sidebar" };
    let home_class = extra_class(vm.view == View::Home, "home-button");
    let resources_class = extra_class(vm.view == View::Resources, "extra-link");
    let certificate_class = extra_class(vm.view == View::Certificate, "extra-link");
    let open_module = expanded();

    rsx! {
        nav { class: nav_class,
            div { class: "sidebar-brand", onclick: move |_| session.write().go_home(),
                span { class: "glyph", ">_" }
                span { class: "brand-name", "Python Learner" }
            }

            div { class: "sidebar-body",
                button {
                    class: home_class,
                    onclick: move |_| {
                        let mut current = session.write();
                        current.go_home();
                        current.set_sidebar_open(false);
                    },
                    "Home"
                }

                div { class: "sidebar-section", "LESSONS" }
                for module in vm.modules {
                    SidebarModule {
                        key: "{module.id}",
                        is_expanded: open_module.as_ref() == Some(&module.id),
                        module: module.clone(),
                        on_toggle: toggle,
                    }
                }

                div { class: "sidebar-section", "EXTRAS" }
                button {
                    class: resources_class,
                    onclick: move |_| {
                        let mut current = session.write();
                        current.go_resources();
                        current.set_sidebar_open(false);
                    },
                    "Resources"
                }
                button {
                    class: certificate_class,
                    onclick: move |_| {
                        let mut current = session.write();
                        current.go_certificate();
                        current.set_sidebar_open(false);
                    },
                    "Certificate"
                }
            }
        }
    }
}

fn extra_class(active: bool, base: &'static str) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

#[component]
fn SidebarModule(
    module: SidebarModuleVm,
    is_expanded: bool,
    on_toggle: EventHandler<ModuleId>,
) -> Element {
    let toggle_id = module.id.clone();
    let header_class = if module.is_active && !is_expanded {
        "sidebar-module-header active"
    } else {
        "sidebar-module-header"
    };
    let chevron = if is_expanded { "\u{25BE}" } else { "\u{25B8}" };

    rsx! {
        div { class: "sidebar-module",
            button {
                class: header_class,
                onclick: move |_| on_toggle.call(toggle_id.clone()),
                span { class: "glyph", "{module.glyph}" }
                span { class: "sidebar-module-title", "{module.title}" }
                span { class: "count-pill", "{module.count_label()}" }
                span { class: "chevron", "{chevron}" }
            }
            if is_expanded {
                div { class: "sidebar-lessons",
                    for lesson in module.lessons.iter() {
                        SidebarLesson {
                            key: "{lesson.id}",
                            module_id: module.id.clone(),
                            lesson: lesson.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarLesson(module_id: ModuleId, lesson: SidebarLessonVm) -> Element {
    let mut session = use_context::<Signal<LearnerSession>>();
    let lesson_id = lesson.id.clone();
    let lesson_class = if lesson.is_active {
        "sidebar-lesson active"
    } else {
        "sidebar-lesson"
    };

    rsx! {
        button {
            class: lesson_class,
            onclick: move |_| {
                if let Err(err) = session.write().select_lesson(&module_id, &lesson_id) {
                    tracing::error!(error = %err, "sidebar offered a lesson outside the catalog");
                }
            },
            span { class: "lesson-marker", "{lesson.marker.glyph()}" }
            span { class: "lesson-name", "{lesson.title}" }
        }
    }
}
