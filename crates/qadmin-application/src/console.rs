use crate::records::RecordCollectionManager;
use crate::session::SessionController;
use qadmin_core::api::QaApi;
use qadmin_core::auth::CredentialStore;
use qadmin_core::config::RootConfig;
use qadmin_core::error::Result;
use qadmin_infrastructure::{ConfigStorage, FileCredentialStore};
use qadmin_interaction::HttpQaApiClient;
use std::path::Path;
use std::sync::Arc;

/// Entry point wiring the session and the record cache together.
///
/// A presentation layer holds one `QaConsole` and routes on
/// `session().is_authenticated()`: logged out shows the login form,
/// logged in shows the record list.
pub struct QaConsole {
    session: Arc<SessionController>,
    records: RecordCollectionManager,
}

impl QaConsole {
    pub fn new(api: Arc<dyn QaApi>, store: Arc<dyn CredentialStore>) -> Self {
        let session = Arc::new(SessionController::new(store));
        let records = RecordCollectionManager::new(api, session.clone());
        Self { session, records }
    }

    /// Builds the HTTP client and the file credential store from config.
    pub fn from_config(config: &RootConfig) -> Result<Self> {
        let api = HttpQaApiClient::from_config(&config.client)?;
        let store = match &config.storage.credentials_file {
            Some(path) => FileCredentialStore::with_path(path.clone()),
            None => FileCredentialStore::new()?,
        };
        tracing::debug!(
            "[Console] Using {} with credentials at {}",
            api.base_url(),
            store.path().display()
        );
        Ok(Self::new(Arc::new(api), Arc::new(store)))
    }

    /// Loads `config.toml` from `path` (defaults when missing) and builds from it.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = ConfigStorage::with_path(path.to_path_buf()).load()?;
        Self::from_config(&config)
    }

    /// [`QaConsole::from_config_file`] on the default config location.
    pub fn from_default_config() -> Result<Self> {
        let config = ConfigStorage::new()?.load()?;
        Self::from_config(&config)
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn records(&self) -> &RecordCollectionManager {
        &self.records
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }

    pub async fn login(&self, username: impl Into<String>, password: impl Into<String>) -> Result<()> {
        self.session.login(username, password).await
    }

    /// Leaves the session, then drops the cached records.
    ///
    /// The epoch moves first so an in-flight result cannot refill the cache
    /// after it was cleared.
    pub async fn logout(&self) -> Result<()> {
        let result = self.session.logout().await;
        self.records.clear().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qadmin_core::auth::Credentials;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_config_uses_configured_credentials_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("auth.json");
        let mut config = RootConfig::default();
        config.client.base_url = "http://127.0.0.1:9/qa".to_string();
        config.storage.credentials_file = Some(path.clone());

        let console = QaConsole::from_config(&config).unwrap();
        assert!(!console.is_authenticated().await);

        console.login("admin", "secret").await.unwrap();
        assert!(path.exists());

        // A second console over the same file starts logged in
        let restored = QaConsole::from_config(&config).unwrap();
        assert_eq!(
            restored.session().credentials().await,
            Some(Credentials::new("admin", "secret"))
        );

        restored.logout().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_from_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let auth_path = temp_dir.path().join("auth.json");
        let config_path = temp_dir.path().join("config.toml");
        let mut config = RootConfig::default();
        config.client.request_timeout_secs = Some(5);
        config.storage.credentials_file = Some(auth_path.clone());
        ConfigStorage::with_path(config_path.clone()).save(&config).unwrap();

        let console = QaConsole::from_config_file(&config_path).unwrap();
        console.login("admin", "secret").await.unwrap();

        assert!(auth_path.exists());
    }
}
