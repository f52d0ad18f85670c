use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_resource_categories;

#[component]
pub fn ResourcesView() -> Element {
    let ctx = use_context::<AppContext>();
    let categories = map_resource_categories(&ctx.resources());

    rsx! {
        div { class: "page resources",
            h1 { "Python Resources" }
            p { class: "page-lead",
                "A curated collection of documentation, tutorials, and community links to help you on your journey."
            }
            div { class: "resource-grid",
                for category in categories {
                    div { class: "resource-card", key: "{category.name}",
                        div { class: "resource-head",
                            span { class: "glyph", "{category.glyph}" }
                            h2 { "{category.name}" }
                        }
                        div { class: "resource-links",
                            for link in category.links {
                                a {
                                    key: "{link.href}",
                                    class: "resource-link",
                                    href: "{link.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    title: "{link.host}",
                                    span { "{link.title}" }
                                    span { class: "external", "\u{2197}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
