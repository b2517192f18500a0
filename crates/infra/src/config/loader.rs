//! Configuration loader
//!
//! Builds the [`SiteConfig`] from an optional file plus environment
//! overrides.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file (TOML or JSON)
//! 2. Fall back to built-in defaults when none exists
//! 3. Apply environment variable overrides on top
//!
//! ## Environment Variables
//! - `HOST`, `PORT`: Website service bind address
//! - `DIRECTORY`: Static site directory
//! - `TLS_CERTFILE`, `TLS_KEYFILE`: PEM files; HTTPS is served when both are set
//! - `BACKEND_BASE_URL`: CRM backend the `/api/` proxy forwards to
//! - `BACKEND_API_KEY`: Sent to the backend as `X-API-Key`
//! - `FREEHOLD_CONTACT_URL`: Contact enquiry endpoint
//! - `FREEHOLD_DOWNLOAD_DIR`: Directory for order text downloads
//! - `FREEHOLD_PRINT_DIR`: Directory for order print documents
//! - `FREEHOLD_PRINT_COMMAND`: Viewer used to open print documents
//! - `FREEHOLD_LOG`: Log filter used when `RUST_LOG` is unset
//! - `FREEHOLD_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./freehold.toml`, `./freehold.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use freehold_domain::{FreeholdError, Result, SiteConfig};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["freehold.toml", "freehold.json", "config.toml", "config.json"];

/// Load configuration from the first config file found (or defaults) and
/// apply environment overrides.
///
/// # Errors
/// Returns `FreeholdError::Config` if a config file exists but cannot be
/// parsed, or an override has an invalid value.
pub fn load() -> Result<SiteConfig> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            SiteConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `FreeholdError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<SiteConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FreeholdError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FreeholdError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FreeholdError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<SiteConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(FreeholdError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(PathBuf::from))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Unset or empty variables leave the current value untouched.
///
/// # Errors
/// Returns `FreeholdError::Config` if `PORT` is not a valid port number.
pub fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(host) = var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = var("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| FreeholdError::Config(format!("Invalid PORT '{port}': {e}")))?;
    }
    if let Some(dir) = var("DIRECTORY") {
        config.server.static_dir = PathBuf::from(dir);
    }
    if let Some(path) = var("TLS_CERTFILE") {
        config.server.tls_certfile = Some(PathBuf::from(path));
    }
    if let Some(path) = var("TLS_KEYFILE") {
        config.server.tls_keyfile = Some(PathBuf::from(path));
    }
    if let Some(url) = var("BACKEND_BASE_URL") {
        config.backend.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(key) = var("BACKEND_API_KEY") {
        config.backend.api_key = Some(key);
    }
    if let Some(url) = var("FREEHOLD_CONTACT_URL") {
        config.contact.endpoint_url = url;
    }
    if let Some(dir) = var("FREEHOLD_DOWNLOAD_DIR") {
        config.order.download_dir = PathBuf::from(dir);
    }
    if let Some(dir) = var("FREEHOLD_PRINT_DIR") {
        config.order.print_dir = PathBuf::from(dir);
    }
    if let Some(command) = var("FREEHOLD_PRINT_COMMAND") {
        config.order.print_command = Some(command);
    }
    if let Some(filter) = var("FREEHOLD_LOG") {
        config.logging.filter = filter;
    }
    if let Some(json) = var("FREEHOLD_LOG_JSON") {
        config.logging.json = parse_bool(&json);
    }

    Ok(())
}

/// Accepts: `1`, `true`, `yes`, `on` (case-insensitive); anything else is
/// false.
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_bool() {
        for value in ["1", "true", "YES", "on"] {
            assert!(parse_bool(value), "{value} should be true");
        }
        for value in ["0", "false", "no", "off", "maybe"] {
            assert!(!parse_bool(value), "{value} should be false");
        }
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = SiteConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "9090"),
                ("DIRECTORY", "/srv/site"),
                ("BACKEND_BASE_URL", "http://crm.internal:8000/"),
                ("BACKEND_API_KEY", "k-123"),
                ("FREEHOLD_LOG_JSON", "true"),
                ("TLS_CERTFILE", "/etc/freehold/cert.pem"),
                ("TLS_KEYFILE", "/etc/freehold/key.pem"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.addr(), "127.0.0.1:9090");
        assert_eq!(config.server.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.backend.base_url, "http://crm.internal:8000");
        assert_eq!(config.backend.api_key.as_deref(), Some("k-123"));
        assert!(config.logging.json);
        assert_eq!(config.server.scheme(), "https");
        assert_eq!(config.server.tls_keyfile, Some(PathBuf::from("/etc/freehold/key.pem")));
    }

    #[test]
    fn test_empty_variables_are_ignored() {
        let mut config = SiteConfig::default();
        apply_env_overrides(&mut config, env(&[("HOST", ""), ("BACKEND_API_KEY", "  ")])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let mut config = SiteConfig::default();
        let err = apply_env_overrides(&mut config, env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, FreeholdError::Config(msg) if msg.contains("PORT")));
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_content = r#"
[server]
port = 3000

[order]
reference_prefix = "ORD"

[order.currency]
symbol = "€"
code = "EUR"
"#;
        let config = parse_config(toml_content, Path::new("freehold.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.order.reference_prefix, "ORD");
        assert_eq!(config.order.currency.code, "EUR");
        assert_eq!(config.order.currency.thousands_separator, ',');
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("test.yaml"));
        assert!(matches!(result, Err(FreeholdError::Config(_))));
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/freehold.toml")));
        assert!(matches!(result, Err(FreeholdError::Config(_))));
    }
}
