use crate::error::Result as ShellErrorResult;

use rh_api::{AuthClient, RegisterRequest, UserPayload};
use rh_config::Config;
use rh_core::{IdentityState, UserAccount};
use rh_nav::{MenuItem, Navigation, NavigationComposer, ViewRegistry, account_menu, main_menu};
use rh_session::{FileStorage, SessionStore};

use log::info;

/// Client composition root: session store, route table, and API client.
///
/// `bootstrap` restores the persisted session before the shell is handed
/// out, so the first `navigate` call never judges an identity that has
/// not been read from storage yet.
pub struct AppShell {
    session: SessionStore<FileStorage>,
    composer: NavigationComposer,
    auth: AuthClient,
}

impl AppShell {
    pub fn bootstrap(config: &Config) -> ShellErrorResult<Self> {
        let storage_dir = config.session.storage_path()?;
        let storage = FileStorage::new(storage_dir)?;

        let mut session = SessionStore::new(storage);
        session.restore();

        let composer = NavigationComposer::new(ViewRegistry::platform_defaults()?);
        let auth = AuthClient::new(&config.api.base_url);

        Ok(Self {
            session,
            composer,
            auth,
        })
    }

    /// Resolve a path against the current identity
    pub fn navigate(&self, path: &str) -> Navigation {
        self.composer.resolve(path, self.session.identity())
    }

    /// Sign in and persist the granted session
    pub async fn login(&mut self, email: &str, password: &str) -> ShellErrorResult<()> {
        let grant = self.auth.login(email, password).await?;
        let account = UserAccount::from(grant.user);

        info!("Signed in as user {}", account.id);
        self.session.set_credentials(account, grant.access_token)?;

        Ok(())
    }

    /// Create an account; signing in is a separate step
    pub async fn register(&self, request: &RegisterRequest) -> ShellErrorResult<UserPayload> {
        let user = self.auth.register(request).await?;
        info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Clear the session and erase the persisted keys
    pub fn logout(&mut self) -> ShellErrorResult<()> {
        self.session.logout()?;

        Ok(())
    }

    pub fn identity(&self) -> &IdentityState {
        self.session.identity()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Navigation chrome for the current role
    pub fn main_menu(&self) -> Vec<MenuItem> {
        main_menu(self.session.identity())
    }

    /// Account dropdown entries, empty while signed out
    pub fn account_menu(&self) -> Vec<MenuItem> {
        account_menu(self.session.identity())
    }
}
