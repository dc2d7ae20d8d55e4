use qadmin_core::auth::{CredentialStore, Credentials, SessionState};
use qadmin_core::error::{QadminError, Result};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Credentials captured at the start of a remote call, tagged with the
/// session epoch they belong to.
#[derive(Debug, Clone)]
pub struct SessionTicket {
    pub credentials: Credentials,
    pub epoch: u64,
}

struct Inner {
    state: SessionState,
    /// Bumped on every login/logout so in-flight results can detect that the
    /// session they were started under is gone.
    epoch: u64,
}

/// Owns the authenticated/unauthenticated state.
///
/// `SessionController` is responsible for:
/// - Restoring the persisted credential pair at startup
/// - Accepting login without a server round trip (validity surfaces on the
///   first request that gets a 401)
/// - Tearing the session down on logout or expiry
pub struct SessionController {
    inner: RwLock<Inner>,
    store: Arc<dyn CredentialStore>,
    /// Serializes transitions so the store and the state change in the same
    /// order. `inner` is never held across a store call.
    transition: Mutex<()>,
}

impl SessionController {
    /// Creates the controller, reading the credential store once.
    ///
    /// A stored pair starts the session logged in. An unreadable store starts
    /// it logged out.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let state = match store.load() {
            Ok(credentials) => SessionState::from(credentials),
            Err(e) => {
                tracing::warn!("[Session] Failed to read stored credentials: {}", e);
                SessionState::LoggedOut
            }
        };

        if let Some(credentials) = state.credentials() {
            tracing::info!("[Session] Restored session for '{}'", credentials.username());
        }

        Self {
            inner: RwLock::new(Inner { state, epoch: 0 }),
            store,
            transition: Mutex::new(()),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.inner.read().await.state.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.state.is_authenticated()
    }

    pub async fn credentials(&self) -> Option<Credentials> {
        self.inner.read().await.state.credentials().cloned()
    }

    /// Credentials for a remote call, or `NotAuthenticated` when logged out.
    pub async fn ticket(&self) -> Result<SessionTicket> {
        let inner = self.inner.read().await;
        let credentials = inner
            .state
            .credentials()
            .cloned()
            .ok_or(QadminError::NotAuthenticated)?;
        Ok(SessionTicket {
            credentials,
            epoch: inner.epoch,
        })
    }

    /// Whether results obtained with `ticket` may still be applied.
    pub async fn is_current(&self, ticket: &SessionTicket) -> bool {
        self.inner.read().await.epoch == ticket.epoch
    }

    /// Persists the pair and enters the logged-in state.
    ///
    /// If the pair cannot be persisted the previous state is kept.
    pub async fn login(&self, username: impl Into<String>, password: impl Into<String>) -> Result<()> {
        let credentials = Credentials::new(username, password);

        let _transition = self.transition.lock().await;
        self.store.save(&credentials)?;

        let mut inner = self.inner.write().await;
        tracing::info!("[Session] Logged in as '{}'", credentials.username());
        inner.state = SessionState::LoggedIn(credentials);
        inner.epoch += 1;
        Ok(())
    }

    /// Leaves the session from any state and clears the stored pair.
    ///
    /// The in-memory session is gone even when clearing the store fails; the
    /// store error is still returned.
    pub async fn logout(&self) -> Result<()> {
        let _transition = self.transition.lock().await;
        {
            let mut inner = self.inner.write().await;
            inner.state = SessionState::LoggedOut;
            inner.epoch += 1;
        }
        tracing::info!("[Session] Logged out");
        self.store.clear()
    }

    /// Logout caused by the service rejecting the credentials of `ticket`.
    ///
    /// Returns whether the session was ended. Nothing happens when the session
    /// changed since the ticket was issued, so a late 401 for old credentials
    /// cannot end a newer session. The epoch check and the state change happen
    /// under one write guard.
    pub async fn expire(&self, ticket: &SessionTicket) -> Result<bool> {
        let _transition = self.transition.lock().await;
        {
            let mut inner = self.inner.write().await;
            if inner.epoch != ticket.epoch {
                tracing::debug!("[Session] Ignoring expiry of a previous session");
                return Ok(false);
            }
            inner.state = SessionState::LoggedOut;
            inner.epoch += 1;
        }
        tracing::warn!("[Session] Session expired, credentials rejected by the service");
        self.store.clear()?;
        Ok(true)
    }
}
