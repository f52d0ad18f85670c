use dioxus::prelude::*;
use learner_core::LearnerSession;

use crate::context::AppContext;
use crate::views::Shell;
use crate::vm::EditorVm;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_session_state(|| ctx.new_session());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Python Learner" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}

/// Provides the learner session and the editor buffer to every view below.
///
/// Both live at the root so a run that finishes after its view unmounted can
/// still deliver its result.
pub fn use_session_state(init: impl FnOnce() -> LearnerSession) -> Signal<LearnerSession> {
    let session = use_context_provider(|| Signal::new(init()));
    use_context_provider(|| {
        let editor = {
            let current = session.peek();
            let lesson = current.active_lesson();
            EditorVm::new(lesson.id().clone(), lesson.initial_code())
        };
        Signal::new(editor)
    });
    session
}
