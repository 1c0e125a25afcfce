use dioxus::prelude::*;

/// Modal shell whose visibility is owned by the caller.
///
/// `on_dismiss` fires for the close button and overlay clicks, but only while
/// `dismissible` is true.
#[component]
pub fn Dialog(
    open: bool,
    title: String,
    #[props(default = true)] dismissible: bool,
    on_dismiss: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if dismissible { on_dismiss.call(()) },
            div { class: "modal",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if dismissible {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_dismiss.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
