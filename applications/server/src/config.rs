/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_accounts")]
    pub accounts: AccountSettings,

    #[serde(default)]
    pub admin: AdminSettings,

    #[serde(default = "default_web")]
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountSettings {
    #[serde(default = "default_email_domain")]
    pub email_domain: String,

    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

/// Admin listing is only mounted when a token is configured
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminSettings {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebSettings {
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is used when present. Environment variables prefixed with
    /// `ACUE_` override file values, with `__` separating nested keys
    /// (`ACUE_STORAGE__USERS_FILE`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ACUE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.users_file.as_os_str().is_empty() {
            return Err(ServerError::Config(
                "Users file path is required (set ACUE_STORAGE__USERS_FILE)".to_string(),
            ));
        }

        if self.accounts.email_domain.trim().is_empty() {
            return Err(ServerError::Config(
                "Email domain must not be empty".to_string(),
            ));
        }

        if self.accounts.min_password_length == 0 {
            return Err(ServerError::Config(
                "Minimum password length must be at least 1".to_string(),
            ));
        }

        if matches!(self.admin.token.as_deref(), Some(token) if token.trim().is_empty()) {
            return Err(ServerError::Config(
                "Admin token must not be empty when set".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        users_file: default_users_file(),
    }
}

fn default_users_file() -> PathBuf {
    PathBuf::from("users.json")
}

fn default_accounts() -> AccountSettings {
    AccountSettings {
        email_domain: default_email_domain(),
        min_password_length: default_min_password_length(),
    }
}

fn default_email_domain() -> String {
    "acuestore.com".to_string()
}

fn default_min_password_length() -> usize {
    6
}

fn default_web() -> WebSettings {
    WebSettings {
        index_path: default_index_path(),
    }
}

fn default_index_path() -> PathBuf {
    PathBuf::from("templates/index.html")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            accounts: default_accounts(),
            admin: AdminSettings::default(),
            web: default_web(),
        }
    }
}
