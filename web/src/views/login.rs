use crate::{Route, identity::use_identity};
use dioxus::prelude::*;

#[component]
pub fn Login(error: Option<String>) -> Element {
    let identity = use_identity();
    let nav = navigator();

    // Already signed in: nothing to do here.
    use_effect(move || {
        let snapshot = identity.snapshot();
        if !snapshot.is_loading && snapshot.has_identity() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "SuiteDesk" }
                    p { class: "login-subtitle", "Sign in to your workspace" }
                }
                if let Some(message) = error.as_ref() {
                    div { class: "alert alert-error", "{message}" }
                }
                form {
                    action: "/auth/session",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            name: "email",
                            class: "form-input",
                            r#type: "email",
                            autocomplete: "username",
                            required: true,
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            required: true,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign in"
                    }
                }
            }
        }
    }
}
