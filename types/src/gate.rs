//! Decides what a protected view shows for a given identity snapshot.

use crate::identity::IdentitySnapshot;

/// Client route unauthenticated viewers are sent to.
pub const LOGIN_ROUTE: &str = "/auth/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// Identity is still being resolved; show a placeholder.
    Loading,
    /// Resolved without identity; render nothing while redirecting.
    Redirect,
    /// Render the protected children unmodified.
    Render,
}

impl GateView {
    pub fn evaluate(snapshot: &IdentitySnapshot) -> Self {
        if snapshot.is_loading {
            GateView::Loading
        } else if snapshot.has_identity() {
            GateView::Render
        } else {
            GateView::Redirect
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    #[default]
    Resolving,
    Authenticated,
    Unauthenticated,
}

impl From<GateView> for GatePhase {
    fn from(view: GateView) -> Self {
        match view {
            GateView::Loading => GatePhase::Resolving,
            GateView::Render => GatePhase::Authenticated,
            GateView::Redirect => GatePhase::Unauthenticated,
        }
    }
}

/// Remembers the last phase so the login redirect fires once per
/// transition into [`GatePhase::Unauthenticated`].
#[derive(Debug, Clone, Default)]
pub struct RedirectLatch {
    phase: GatePhase,
}

impl RedirectLatch {
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Record a new snapshot; returns the route to navigate to, if any.
    pub fn observe(&mut self, snapshot: &IdentitySnapshot) -> Option<&'static str> {
        let next = GatePhase::from(GateView::evaluate(snapshot));
        let previous = std::mem::replace(&mut self.phase, next);

        if next == GatePhase::Unauthenticated && previous != GatePhase::Unauthenticated {
            tracing::debug!(?previous, "identity resolved unauthenticated, redirecting");
            Some(LOGIN_ROUTE)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Principal;

    fn with(user: bool, token: bool, is_loading: bool) -> IdentitySnapshot {
        IdentitySnapshot {
            user: user.then(|| Principal {
                id: "1".into(),
                email: "a@b.c".into(),
                display_name: "A".into(),
            }),
            token: token.then(|| "secret".into()),
            is_loading,
        }
    }

    #[test]
    fn unresolved_unauthenticated_fails_closed() {
        let snapshot = with(false, false, false);
        let mut latch = RedirectLatch::default();

        assert_eq!(GateView::evaluate(&snapshot), GateView::Redirect);
        assert_eq!(latch.observe(&snapshot), Some(LOGIN_ROUTE));
        // Re-rendering with the same snapshot does not navigate again.
        assert_eq!(latch.observe(&snapshot), None);
        assert_eq!(latch.observe(&snapshot), None);
    }

    #[test]
    fn any_identity_passes_through() {
        for (user, token) in [(true, false), (false, true), (true, true)] {
            let snapshot = with(user, token, false);
            let mut latch = RedirectLatch::default();

            assert_eq!(GateView::evaluate(&snapshot), GateView::Render);
            assert_eq!(latch.observe(&snapshot), None);
            assert_eq!(latch.phase(), GatePhase::Authenticated);
        }
    }

    #[test]
    fn loading_never_navigates() {
        for (user, token) in [(false, false), (true, false), (false, true), (true, true)] {
            let snapshot = with(user, token, true);
            let mut latch = RedirectLatch::default();

            assert_eq!(GateView::evaluate(&snapshot), GateView::Loading);
            assert_eq!(latch.observe(&snapshot), None);
            assert_eq!(latch.phase(), GatePhase::Resolving);
        }
    }

    #[test]
    fn logout_after_authenticated_redirects_once() {
        let mut latch = RedirectLatch::default();

        assert_eq!(latch.observe(&with(false, false, true)), None);
        assert_eq!(latch.observe(&with(true, true, false)), None);
        assert_eq!(latch.observe(&with(false, false, false)), Some(LOGIN_ROUTE));
        assert_eq!(latch.observe(&with(false, false, false)), None);
    }

    #[test]
    fn re_resolving_into_unauthenticated_is_a_new_transition() {
        let mut latch = RedirectLatch::default();

        assert_eq!(latch.observe(&with(false, false, false)), Some(LOGIN_ROUTE));
        assert_eq!(latch.observe(&with(false, false, true)), None);
        assert_eq!(latch.observe(&with(false, false, false)), Some(LOGIN_ROUTE));
    }
}
