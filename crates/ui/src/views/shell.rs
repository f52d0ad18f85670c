use dioxus::prelude::*;
use learner_core::{LearnerSession, View};

use crate::views::{CertificateView, HomeView, LessonView, ResourcesView, Sidebar};
use crate::vm::HeaderVm;

#[component]
pub fn Shell() -> Element {
    let mut session = use_context::<Signal<LearnerSession>>();
    let top = HeaderVm::from_session(&session.read());
    let view = session.read().view();
    let menu_glyph = if top.sidebar_open { "\u{2715}" } else { "\u{2630}" };

    rsx! {
        div { class: top.root_class(),
            Sidebar {}

            main { class: "main",
                div { class: "topbar",
                    div { class: "topbar-progress",
                        span { class: "topbar-label", "{top.progress_label()}" }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {top.percent}%" }
                        }
                    }
                    div { class: "topbar-actions",
                        button {
                            class: "icon-button sidebar-toggle",
                            title: "Toggle navigation",
                            onclick: move |_| session.write().toggle_sidebar(),
                            "{menu_glyph}"
                        }
                        button {
                            class: "icon-button",
                            title: top.theme_toggle_title(),
                            onclick: move |_| session.write().toggle_dark_mode(),
                            "{top.theme_toggle_glyph()}"
                        }
                    }
                }

                if top.show_notice {
                    div { class: "completion-notice", "\u{2714} Lesson Completed!" }
                }

                div { class: "content",
                    match view {
                        View::Home => rsx! { HomeView {} },
                        View::Lesson => rsx! { LessonView {} },
                        View::Resources => rsx! { ResourcesView {} },
                        View::Certificate => rsx! { CertificateView {} },
                    }
                }
            }
        }
    }
}
