use crate::Result as SessionResult;
use crate::session_storage::SessionStorage;

use rh_core::{IdentityState, UserAccount};

use log::{debug, info, warn};

/// Key holding the opaque bearer token
pub(crate) const TOKEN_KEY: &str = "token";
/// Key holding the serialized identity record
pub(crate) const USER_KEY: &str = "user";

/// Single source of truth for the signed-in identity.
///
/// Owns the current `IdentityState` and token, and is the only writer of
/// the persisted session keys. Starts in `Unknown`; callers must run
/// [`restore`](Self::restore) before the first guard evaluation so routes
/// never judge a session that has not been read yet.
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    identity: IdentityState,
    token: Option<String>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            identity: IdentityState::Unknown,
            token: None,
        }
    }

    /// Read the persisted session, best effort.
    ///
    /// The state after this call is `Present` when both keys exist and the
    /// identity record parses, `Anonymous` otherwise. Storage failures and
    /// unreadable records downgrade to anonymous with a warning; nothing
    /// here can fail startup. Reads only, never rewrites storage.
    pub fn restore(&mut self) {
        let token = self.read_key(TOKEN_KEY).filter(|t| !t.is_empty());
        let record = self.read_key(USER_KEY);

        let (Some(token), Some(record)) = (token, record) else {
            debug!("No persisted session, starting anonymous");
            self.identity = IdentityState::Anonymous;
            self.token = None;
            return;
        };

        match serde_json::from_str::<UserAccount>(&record) {
            Ok(user) => {
                info!("Restored session for user {}", user.id);
                self.identity = IdentityState::Present(user);
                self.token = Some(token);
            }
            Err(e) => {
                warn!("Persisted identity record is unreadable, starting anonymous: {e}");
                self.identity = IdentityState::Anonymous;
                self.token = None;
            }
        }
    }

    /// Replace the session with a freshly issued identity and token.
    ///
    /// Memory is updated first, identity and token as one unit, so the
    /// session is live even when persistence fails; the error is returned
    /// for the caller to report and the session then lasts until process
    /// exit.
    pub fn set_credentials(&mut self, user: UserAccount, token: String) -> SessionResult<()> {
        let record = serde_json::to_string(&user)?;
        let user_id = user.id;

        self.identity = IdentityState::Present(user);
        self.token = Some(token.clone());

        self.storage.set(TOKEN_KEY, &token)?;
        self.storage.set(USER_KEY, &record)?;

        info!("Session persisted for user {user_id}");
        Ok(())
    }

    /// Clear the session and erase the persisted keys.
    ///
    /// Idempotent: logging out while anonymous is a no-op `Ok`.
    pub fn logout(&mut self) -> SessionResult<()> {
        self.identity = IdentityState::Anonymous;
        self.token = None;

        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;

        info!("Session cleared");
        Ok(())
    }

    pub fn identity(&self) -> &IdentityState {
        &self.identity
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Session storage read for '{key}' failed, treating as absent: {e}");
                None
            }
        }
    }
}
