use dioxus::prelude::*;

mod gate;
mod identity;
mod views;

use gate::SessionGate;
use identity::{use_identity, use_identity_provider};
use ui::{Toaster, use_toast_provider};
use views::{Accounting, Categories, Dashboard, Erp, Events, Login, Sales};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/auth/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/inventory/categories")]
        Categories {},
        #[route("/accounting")]
        Accounting {},
        #[route("/erp")]
        Erp {},
        #[route("/events")]
        Events {},
        #[route("/sales")]
        Sales {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init();

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_identity_provider();
    use_toast_provider();

    rsx! {
        document::Title { "SuiteDesk" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
        Toaster {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    rsx! {
        SessionGate {
            AppShell {}
        }
    }
}

#[component]
fn AppShell() -> Element {
    let identity = use_identity();
    let user = identity.snapshot().user;

    let (initial, name, email) = match &user {
        Some(person) => (
            person.initial(),
            person.display_name.clone(),
            person.email.clone(),
        ),
        None => ("?".to_string(), "Signed in".to_string(), String::new()),
    };

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "SuiteDesk" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    span { class: "sidebar-section", "Inventory" }
                    NavLink { to: Route::Categories {}, "Categories" }
                    span { class: "sidebar-section", "Modules" }
                    NavLink { to: Route::Accounting {}, "Accounting" }
                    NavLink { to: Route::Erp {}, "ERP" }
                    NavLink { to: Route::Events {}, "Events" }
                    NavLink { to: Route::Sales {}, "Sales" }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "sidebar-avatar", "{initial}" }
                        div { class: "sidebar-user-info",
                            div { class: "sidebar-user-name", "{name}" }
                            div { class: "sidebar-user-role", "{email}" }
                        }
                    }
                    a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign out" }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
