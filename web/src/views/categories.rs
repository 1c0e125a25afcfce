use dioxus::prelude::*;
use types::{Category, form::RequestError, notice::NotificationSink};
use ui::use_toasts;

use super::category_form::CategoryFormDialog;
use crate::identity::use_identity;

const LOAD_FAILED: &str = "Failed to load categories";

#[component]
pub fn Categories() -> Element {
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut dialog_open = use_signal(|| false);
    let mut editing = use_signal(|| None::<Category>);
    let mut toasts = use_toasts();
    let mut identity = use_identity();

    let refresh = move || {
        spawn(async move {
            match api::list_categories().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                    categories.set(list);
                }
                Err(e) => {
                    let error = RequestError::from(e);
                    if error.unauthorized {
                        identity.clear();
                    } else {
                        toasts.error(error.message.as_deref().unwrap_or(LOAD_FAILED));
                    }
                }
            }
            loading.set(false);
        });
    };

    // Fetch on mount
    use_effect(move || refresh());

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Categories" }
                    p { class: "page-subtitle", "Group inventory items into categories." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            dialog_open.set(true);
                        },
                        "New Category"
                    }
                }
            }

            CategoryFormDialog {
                open: dialog_open(),
                on_open_change: move |open| dialog_open.set(open),
                on_success: move |_| refresh(),
                category: editing(),
            }

            if loading() {
                div { class: "loading", "Loading categories..." }
            } else if categories.read().is_empty() {
                div { class: "card",
                    div { class: "card-body",
                        p { class: "text-muted", "No categories yet. Create one to get started." }
                    }
                }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Description" }
                                    th { "Updated" }
                                    th {}
                                }
                            }
                            tbody {
                                for category in categories.read().iter() {
                                    {
                                        let row = category.clone();
                                        let updated = category
                                            .updated_at
                                            .or(category.created_at)
                                            .map(|ts| ts.strftime("%b %d, %Y").to_string())
                                            .unwrap_or_default();
                                        rsx! {
                                            tr { key: "{category.id}",
                                                td { "{category.name}" }
                                                td { class: "text-muted",
                                                    {category.description.clone().unwrap_or_default()}
                                                }
                                                td { class: "text-muted", "{updated}" }
                                                td {
                                                    button {
                                                        class: "btn btn-link",
                                                        onclick: move |_| {
                                                            editing.set(Some(row.clone()));
                                                            dialog_open.set(true);
                                                        },
                                                        "Edit"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
