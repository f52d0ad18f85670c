use dioxus::prelude::*;
use learner_core::LearnerSession;

use crate::views::CodeEditor;
use crate::vm::LessonVm;

#[component]
pub fn LessonView() -> Element {
    let mut session = use_context::<Signal<LearnerSession>>();
    let vm = LessonVm::from_session(&session.read());

    rsx! {
        div { class: "lesson-layout",
            div { class: "lesson-pane",
                article { class: "lesson-card",
                    span { class: vm.difficulty_class, "{vm.difficulty}" }
                    h2 { class: "lesson-title", "{vm.title}" }
                    div { class: "lesson-content", dangerous_inner_html: "{vm.content_html}" }

                    div { class: "task-box",
                        h3 { "Your Task" }
                        p {
                            "Use the code editor to practice what you've just learned. Modify the code, try your own variations, and click "
                            strong { "Run Code" }
                            " to see the results instantly."
                        }
                    }
                }

                div { class: "lesson-footer",
                    div { class: "lesson-module",
                        "Module: "
                        span { class: "lesson-module-title", "{vm.module_title}" }
                    }
                    if vm.show_next {
                        button {
                            class: "next-button",
                            onclick: move |_| {
                                let advance = session.write().advance_to_next();
                                tracing::debug!(?advance, "next lesson");
                            },
                            "Next Lesson \u{2192}"
                        }
                    }
                }
            }

            div { class: "editor-pane",
                CodeEditor {}
            }
        }
    }
}
