use crate::Route;
use dioxus::prelude::*;

#[derive(Clone)]
struct ModuleCard {
    to: Route,
    title: &'static str,
    desc: &'static str,
    ready: bool,
}

fn modules() -> [ModuleCard; 5] {
    [
        ModuleCard {
            to: Route::Categories {},
            title: "Inventory",
            desc: "Organise stock into categories.",
            ready: true,
        },
        ModuleCard {
            to: Route::Accounting {},
            title: "Accounting",
            desc: "Ledgers, invoices and financial reporting.",
            ready: false,
        },
        ModuleCard {
            to: Route::Erp {},
            title: "ERP",
            desc: "Purchasing, production and resource planning.",
            ready: false,
        },
        ModuleCard {
            to: Route::Events {},
            title: "Events",
            desc: "Scheduling, registrations and venues.",
            ready: false,
        },
        ModuleCard {
            to: Route::Sales {},
            title: "Sales",
            desc: "Leads, quotes and orders.",
            ready: false,
        },
    ]
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "Welcome to SuiteDesk - your business at a glance." }
            }
            div { class: "dashboard-grid",
                for card in modules() {
                    Link {
                        key: "{card.title}",
                        to: card.to.clone(),
                        class: "dashboard-card",
                        h3 { class: "dashboard-card-title",
                            "{card.title}"
                            if !card.ready {
                                span { class: "badge", "Coming soon" }
                            }
                        }
                        p { class: "dashboard-card-desc", "{card.desc}" }
                    }
                }
            }
        }
    }
}
