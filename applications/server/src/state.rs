/// Shared application state
use crate::{
    config::ServerConfig,
    services::{AccountPolicy, AccountService},
};
use acue_core::RecordStore;
use acue_storage::JsonFileStore;
use std::{path::PathBuf, sync::Arc};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub admin_token: Option<Arc<str>>,
    pub index_path: PathBuf,
}

impl AppState {
    pub fn new(
        accounts: Arc<AccountService>,
        admin_token: Option<String>,
        index_path: PathBuf,
    ) -> Self {
        Self {
            accounts,
            admin_token: admin_token.map(Arc::from),
            index_path,
        }
    }

    /// Wire the JSON file store and account service described by `config`
    pub fn from_config(config: &ServerConfig) -> Self {
        let store: Arc<dyn RecordStore> =
            Arc::new(JsonFileStore::new(config.storage.users_file.clone()));
        let policy = AccountPolicy {
            email_domain: config.accounts.email_domain.clone(),
            min_password_length: config.accounts.min_password_length,
        };

        Self::new(
            Arc::new(AccountService::new(store, policy)),
            config.admin.token.clone(),
            config.web.index_path.clone(),
        )
    }
}
