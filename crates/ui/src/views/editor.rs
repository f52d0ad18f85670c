use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use learner_core::model::RunTicket;
use learner_core::notice::notice_duration;
use learner_core::{Completion, LearnerSession};
use services::gateway::prompt::EXPLAIN_CODE_TOPIC;
use services::{CodeRunner, apply_outcome};

use crate::context::AppContext;
use crate::vm::{EditorVm, OUTPUT_PLACEHOLDER};

#[component]
pub fn CodeEditor() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<LearnerSession>>();
    let mut editor = use_context::<Signal<EditorVm>>();

    use_effect(move || {
        let current = session.read();
        let lesson = current.active_lesson();
        editor.write().show_lesson(lesson.id(), lesson.initial_code());
    });

    let run_runner = ctx.runner();
    let run_code = move |_| {
        if !editor.write().try_begin_run() {
            return;
        }
        let ticket = session.read().begin_run(editor.read().code());
        let runner = Arc::clone(&run_runner);
        spawn_forever(deliver_run(runner, ticket, session, editor));
    };

    let explain_runner = ctx.runner();
    let explain_code = move |_| {
        if !editor.write().try_begin_explain() {
            return;
        }
        let (lesson_id, source) = {
            let current = editor.read();
            (current.lesson_id().clone(), current.code().to_string())
        };
        let runner = Arc::clone(&explain_runner);
        spawn_forever(async move {
            let text = runner.explain(EXPLAIN_CODE_TOPIC, &source).await;
            editor.write().finish_explain(&lesson_id, text);
        });
    };

    let state = editor.read().clone();
    let explain_label = if state.is_explaining() {
        "Explaining..."
    } else {
        "AI Explain"
    };

    rsx! {
        div { class: "editor",
            div { class: "editor-toolbar",
                div { class: "traffic-lights",
                    span { class: "light red" }
                    span { class: "light yellow" }
                    span { class: "light green" }
                    span { class: "file-name", "main.py" }
                }
                button {
                    class: "icon-button",
                    title: "Reset Code",
                    onclick: move |_| editor.write().reset(),
                    "\u{21BA}"
                }
            }

            textarea {
                class: "editor-input",
                spellcheck: "false",
                value: "{state.code()}",
                oninput: move |evt| editor.write().set_code(evt.value()),
            }

            div { class: "editor-actions",
                button {
                    class: "explain-button",
                    disabled: state.is_explaining(),
                    onclick: explain_code,
                    "{explain_label}"
                }
                button {
                    class: "run-button",
                    disabled: state.is_running(),
                    onclick: run_code,
                    "{state.run_label()}"
                }
            }

            div { class: "console",
                div { class: "console-title", "Terminal Output" }
                div { class: "console-body",
                    match state.output() {
                        Some(result) if !result.output.is_empty() => rsx! {
                            pre { class: if result.is_error { "output error" } else { "output" }, "{result.output}" }
                        },
                        _ => rsx! {
                            div { class: "placeholder", "{OUTPUT_PLACEHOLDER}" }
                        },
                    }
                    match state.explanation() {
                        Some(text) => rsx! {
                            div { class: "tutor",
                                div { class: "tutor-title", "AI Tutor" }
                                p { "{text}" }
                            }
                        },
                        None => rsx! {},
                    }
                }
            }
        }
    }
}

/// Completes a run: shows the transcript if its lesson is still on screen,
/// credits the lesson, and retires the completion notice once it has expired.
async fn deliver_run(
    runner: Arc<CodeRunner>,
    ticket: RunTicket,
    mut session: Signal<LearnerSession>,
    mut editor: Signal<EditorVm>,
) {
    let outcome = runner.run(ticket).await;
    editor
        .write()
        .finish_run(outcome.ticket.lesson_id(), outcome.result.clone());

    let applied = apply_outcome(&mut session.write(), outcome);
    match applied {
        Ok(Some(Completion::Newly)) => {
            tokio::time::sleep(notice_duration().to_std().unwrap_or_default()).await;
            session.write().clear_expired_notice();
        }
        Ok(_) => {}
        Err(err) => tracing::error!(error = %err, "run finished for a lesson outside the catalog"),
    }
}
