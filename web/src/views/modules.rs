use dioxus::prelude::*;
use ui::ComingSoon;

#[component]
pub fn Accounting() -> Element {
    rsx! {
        ComingSoon {
            module: "Accounting",
            summary: "Ledgers, invoices and financial reporting.",
        }
    }
}

#[component]
pub fn Erp() -> Element {
    rsx! {
        ComingSoon {
            module: "ERP",
            summary: "Purchasing, production and resource planning.",
        }
    }
}

#[component]
pub fn Events() -> Element {
    rsx! {
        ComingSoon {
            module: "Events",
            summary: "Scheduling, registrations and venues.",
        }
    }
}

#[component]
pub fn Sales() -> Element {
    rsx! {
        ComingSoon {
            module: "Sales",
            summary: "Leads, quotes and orders.",
        }
    }
}
