use dioxus::prelude::*;

#[component]
pub fn ComingSoon(module: String, summary: String) -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "{module}" }
                p { class: "page-subtitle", "{summary}" }
            }
            div { class: "card coming-soon",
                div { class: "card-body",
                    span { class: "badge", "Coming soon" }
                    p { class: "text-muted",
                        "The {module} module is under construction. Check back in a later release."
                    }
                }
            }
        }
    }
}
