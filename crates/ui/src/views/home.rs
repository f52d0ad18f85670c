use dioxus::prelude::*;
use learner_core::LearnerSession;

use crate::views::start_module;
use crate::vm::{HomeVm, ModuleCardVm};

#[component]
pub fn HomeView() -> Element {
    let mut session = use_context::<Signal<LearnerSession>>();
    let vm = HomeVm::from_session(&session.read());
    let first_module = vm.first_module().cloned();

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 {
                    span { class: "hero-lead", "Welcome to" }
                    span { class: "hero-accent", "Python Learning!" }
                }
                p { class: "hero-sub",
                    "Master Python programming from the ground up with interactive lessons and hands-on exercises."
                }
                div { class: "stats",
                    StatCard { value: format!("{} Modules", vm.module_count), caption: "Comprehensive lessons" }
                    StatCard { value: format!("{} Exercises", vm.exercise_count), caption: "Hands-on practice" }
                    StatCard { value: format!("{}%", vm.percent), caption: "Completion rate" }
                }
            }

            section { class: "curriculum",
                h2 { "What You'll Learn" }
                div { class: "card-grid",
                    for card in vm.modules.iter() {
                        ModuleCard { key: "{card.id}", card: card.clone() }
                    }

                    div {
                        class: "card extra-card",
                        onclick: move |_| session.write().go_resources(),
                        div { class: "card-icon teal", "\u{1F517}" }
                        h3 { "Resources" }
                        p { "Curated links to official documentation, communities, and extra practice problems." }
                        span { class: "card-link", "Explore Resources \u{2192}" }
                    }
                    div {
                        class: "card extra-card",
                        onclick: move |_| session.write().go_certificate(),
                        div { class: "card-icon amber", "\u{1F3C6}" }
                        h3 { "Certification" }
                        p { "Generate your official certificate of completion after finishing the course modules." }
                        span { class: "card-link", "Get Certified \u{2192}" }
                    }
                }
            }

            section { class: "cta",
                h2 { "Ready to Start Your Journey?" }
                p { "Click on any module above or use the sidebar navigation to begin your Python journey!" }
                button {
                    class: "cta-button",
                    onclick: move |_| {
                        if let Some(module_id) = &first_module {
                            start_module(session, module_id);
                        }
                    },
                    "\u{25B6} Start Learning"
                }
            }
        }
    }
}

#[component]
fn StatCard(value: String, caption: &'static str) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-value", "{value}" }
            div { class: "stat-caption", "{caption}" }
        }
    }
}

#[component]
fn ModuleCard(card: ModuleCardVm) -> Element {
    let session = use_context::<Signal<LearnerSession>>();
    let module_id = card.id.clone();

    rsx! {
        div {
            class: "card module-card",
            onclick: move |_| start_module(session, &module_id),
            div { class: "card-icon {card.accent}", "{card.glyph}" }
            h3 { "{card.title}" }
            p { class: "card-description", "{card.description}" }
            div { class: "card-progress",
                div { class: "card-progress-label",
                    span { "Progress" }
                    span { "{card.progress_label()}" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill {card.accent}", style: "width: {card.percent}%" }
                }
            }
            span { class: "card-link", "{card.action_label()} \u{2192}" }
        }
    }
}
