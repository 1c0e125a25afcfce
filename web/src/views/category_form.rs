use api::CategoryClient;
use dioxus::prelude::*;
use types::{
    Category,
    form::CategoryForm,
    validation::Field,
};
use ui::{Dialog, use_toasts};

use crate::identity::use_identity;

/// Create/edit dialog for a category.
///
/// Visibility is owned by the caller through `open`/`on_open_change`.
/// Passing `category` selects edit mode.
#[component]
pub fn CategoryFormDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    on_success: EventHandler<()>,
    category: Option<Category>,
) -> Element {
    let mut toasts = use_toasts();
    let mut identity = use_identity();
    let mut controller = use_signal(|| CategoryForm::new(category.as_ref()));
    let mut was_open = use_signal(|| open);

    // Re-derive the draft whenever the dialog is opened
    if *was_open.peek() != open {
        was_open.set(open);
        if open {
            controller.write().reopen(category.as_ref());
        }
    }

    let (loading, is_edit, name, description, name_error) = {
        let form = controller.read();
        (
            form.is_loading(),
            form.is_edit(),
            form.draft().name.clone(),
            form.draft().description.clone(),
            form.field_error(Field::Name).map(str::to_owned),
        )
    };

    let name_class = if name_error.is_some() {
        "form-input form-input-invalid"
    } else {
        "form-input"
    };
    let title = if is_edit { "Edit Category" } else { "New Category" }.to_string();

    let mut close = move || {
        if controller.write().cancel() {
            on_open_change.call(false);
        }
    };

    rsx! {
        Dialog {
            open,
            title,
            dismissible: !loading,
            on_dismiss: move |_| close(),
            form {
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let request = match controller.write().begin_submit() {
                        Ok(request) => request,
                        Err(blocked) => {
                            tracing::debug!(?blocked, "category submit blocked");
                            return;
                        }
                    };
                    spawn(async move {
                        let result = request.dispatch(&CategoryClient).await;
                        let outcome = controller.write().settle(result);
                        outcome.report(
                            &mut toasts,
                            || on_success.call(()),
                            |open| on_open_change.call(open),
                            || identity.clear(),
                        );
                    });
                },
                div { class: "form-group",
                    label { class: "form-label", r#for: "category-name", "Name *" }
                    input {
                        id: "category-name",
                        class: name_class,
                        r#type: "text",
                        placeholder: "e.g. Electronics",
                        disabled: loading,
                        value: "{name}",
                        oninput: move |e| controller.write().set_name(e.value()),
                    }
                    if let Some(message) = &name_error {
                        p { class: "form-error", "{message}" }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "category-description", "Description" }
                    textarea {
                        id: "category-description",
                        class: "form-input",
                        rows: "3",
                        placeholder: "Optional",
                        disabled: loading,
                        value: "{description}",
                        oninput: move |e| controller.write().set_description(e.value()),
                    }
                }
                div { class: "modal-footer",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: loading,
                        onclick: move |_| close(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: loading,
                        if loading {
                            "Saving..."
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Create"
                        }
                    }
                }
            }
        }
    }
}
