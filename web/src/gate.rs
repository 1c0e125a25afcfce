use dioxus::prelude::*;
use types::gate::{GateView, RedirectLatch};

use crate::identity::use_identity;

/// Renders `children` only for a resolved, authenticated identity.
///
/// Shows a full-screen loader while the identity resolves and sends
/// unauthenticated viewers to the login route.
#[component]
pub fn SessionGate(children: Element) -> Element {
    let identity = use_identity();
    let nav = navigator();
    let mut latch = use_signal(RedirectLatch::default);

    // Navigation happens here rather than during render, once per
    // transition into the unauthenticated state.
    use_effect(move || {
        let snapshot = identity.snapshot();
        if let Some(route) = latch.write().observe(&snapshot) {
            nav.push(route);
        }
    });

    match GateView::evaluate(&identity.snapshot()) {
        GateView::Loading => rsx! {
            div { class: "loading loading-fullscreen", "Loading..." }
        },
        GateView::Redirect => rsx! {},
        GateView::Render => rsx! { {children} },
    }
}
