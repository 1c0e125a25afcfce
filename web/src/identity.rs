use dioxus::prelude::*;
use types::IdentitySnapshot;

/// Client-side identity store - use `use_identity()` to access.
///
/// The only writer of the snapshot; components subscribe by reading it.
#[derive(Clone, Copy)]
pub struct IdentityStore(Signal<IdentitySnapshot>);

impl IdentityStore {
    /// Current snapshot. Reading subscribes the caller to changes.
    pub fn snapshot(&self) -> IdentitySnapshot {
        self.0.read().clone()
    }

    /// Re-resolve the session from the server.
    pub fn refresh(&mut self) {
        let mut snapshot = self.0;
        snapshot.with_mut(|s| s.is_loading = true);

        spawn(async move {
            let resolved = match api::current_identity().await {
                Ok(session) => IdentitySnapshot::from_session(session),
                Err(error) => {
                    tracing::warn!(%error, "failed to resolve identity");
                    IdentitySnapshot::signed_out()
                }
            };
            tracing::debug!(authenticated = resolved.has_identity(), "identity resolved");
            snapshot.set(resolved);
        });
    }

    /// Forget the current identity, e.g. after the server reports the
    /// session is gone.
    pub fn clear(&mut self) {
        tracing::info!("clearing client identity");
        self.0.set(IdentitySnapshot::signed_out());
    }
}

/// Provide the identity store and resolve the session once on mount.
pub fn use_identity_provider() -> IdentityStore {
    let mut store =
        use_context_provider(|| IdentityStore(Signal::new(IdentitySnapshot::resolving())));

    use_effect(move || store.refresh());

    store
}

pub fn use_identity() -> IdentityStore {
    use_context::<IdentityStore>()
}
