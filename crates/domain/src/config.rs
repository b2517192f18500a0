//! Configuration structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTACT_PATH, CONTACT_PREFERRED_METHOD, CONTACT_SOURCE, DEFAULT_REFERENCE_PREFIX,
    PROXY_TIMEOUT_SECS,
};

/// Site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub contact: ContactConfig,
    pub order: OrderConfig,
    pub logging: LoggingConfig,
}

/// Website service bind address and static content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// PEM certificate chain. HTTPS is served only when the key is set too.
    pub tls_certfile: Option<PathBuf>,
    pub tls_keyfile: Option<PathBuf>,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Certificate and key paths, when both are configured
    pub fn tls_files(&self) -> Option<(&Path, &Path)> {
        Some((self.tls_certfile.as_deref()?, self.tls_keyfile.as_deref()?))
    }

    pub fn scheme(&self) -> &'static str {
        if self.tls_files().is_some() {
            "https"
        } else {
            "http"
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("."),
            tls_certfile: None,
            tls_keyfile: None,
        }
    }
}

/// CRM backend reached through the `/api/` proxy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            api_key: None,
            proxy_timeout_secs: PROXY_TIMEOUT_SECS,
        }
    }
}

/// Contact enquiry endpoint and fixed payload values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint_url: String,
    pub source: String,
    pub preferred_contact_method: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint_url: format!("http://127.0.0.1:8080{CONTACT_PATH}"),
            source: CONTACT_SOURCE.to_string(),
            preferred_contact_method: CONTACT_PREFERRED_METHOD.to_string(),
        }
    }
}

/// Order generator and export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub reference_prefix: String,
    pub currency: CurrencyConfig,
    /// Directory that receives text downloads
    pub download_dir: PathBuf,
    /// Directory that receives print documents before they are opened
    pub print_dir: PathBuf,
    /// Program used to open print documents (e.g. `xdg-open`). When unset
    /// the document is only written to `print_dir`.
    pub print_command: Option<String>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
            currency: CurrencyConfig::default(),
            download_dir: PathBuf::from("downloads"),
            print_dir: PathBuf::from("print"),
            print_command: None,
        }
    }
}

/// Whole-unit currency formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub code: String,
    pub thousands_separator: char,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self { symbol: "£".to_string(), code: "GBP".to_string(), thousands_separator: ',' }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info,tower_http=info".to_string(), json: false }
    }
}
