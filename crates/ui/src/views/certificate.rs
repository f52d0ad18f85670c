use dioxus::prelude::*;
use learner_core::LearnerSession;

use crate::vm::{CertificateGateVm, CertificateVm, issue_certificate};

#[component]
pub fn CertificateView() -> Element {
    let session = use_context::<Signal<LearnerSession>>();
    let gate = CertificateGateVm::from_session(&session.read());

    match gate {
        CertificateGateVm::Locked {
            completed,
            total,
            percent,
        } => rsx! {
            div { class: "page certificate locked",
                div { class: "locked-card",
                    div { class: "lock-icon", "\u{1F512}" }
                    h1 { "Certificate Locked" }
                    p {
                        "You must complete all exercises to unlock your official certificate of completion. Keep going, you're almost there!"
                    }
                    div { class: "card-progress-label",
                        span { "Progress" }
                        span { "{completed} / {total} Exercises" }
                    }
                    div { class: "progress-track tall",
                        div { class: "progress-fill", style: "width: {percent}%" }
                    }
                }
            }
        },
        CertificateGateVm::Unlocked => rsx! { CertificateForm {} },
    }
}

#[component]
fn CertificateForm() -> Element {
    let session = use_context::<Signal<LearnerSession>>();
    let mut name = use_signal(String::new);
    let mut issued = use_signal(|| None::<CertificateVm>);
    let mut error = use_signal(|| None::<&'static str>);

    let current = issued();

    rsx! {
        div { class: "page certificate",
            div { class: "certificate-intro",
                h1 { "Get Certified" }
                p { "Congratulations on finishing the course! Enter your name below to generate your certificate." }

                match current.clone() {
                    None => rsx! {
                        form {
                            class: "certificate-form",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                match issue_certificate(&session.read(), &name.read()) {
                                    Ok(certificate) => {
                                        error.set(None);
                                        issued.set(Some(certificate));
                                    }
                                    Err(message) => error.set(Some(message)),
                                }
                            },
                            label { r#for: "recipient", "Enter Your Full Name" }
                            input {
                                id: "recipient",
                                r#type: "text",
                                placeholder: "e.g. Jane Doe",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                            if let Some(message) = error() {
                                p { class: "form-error", "{message}" }
                            }
                            button { r#type: "submit", class: "primary-button", "Generate Certificate" }
                        }
                    },
                    Some(_) => rsx! {
                        div { class: "certificate-actions",
                            button {
                                class: "secondary-button",
                                onclick: move |_| issued.set(None),
                                "Edit Name"
                            }
                        }
                    },
                }
            }

            if let Some(certificate) = current {
                CertificateCard { certificate }
            }
        }
    }
}

#[component]
fn CertificateCard(certificate: CertificateVm) -> Element {
    rsx! {
        div { class: "certificate-card",
            div { class: "certificate-brand", ">_ Python Learner!" }
            div { class: "certificate-kicker", "Certificate of Achievement" }
            h2 { class: "certificate-heading", "COMPLETION" }
            div { class: "certificate-sub", "CERTIFICATE" }
            p { class: "certificate-presented", "This certificate is proudly presented to" }
            div { class: "certificate-name", "{certificate.recipient}" }
            p { class: "certificate-body",
                "For successfully completing the comprehensive "
                strong { "{certificate.course}" }
                " demonstrating proficiency in core programming concepts."
            }
            div { class: "certificate-footer",
                div { class: "certificate-field",
                    div { class: "certificate-value", "{certificate.issued_on}" }
                    div { class: "certificate-caption", "Date" }
                }
                div { class: "certificate-field",
                    div { class: "certificate-signature", "{certificate.signed_by}" }
                    div { class: "certificate-caption", "Signature" }
                }
            }
        }
    }
}
