//! Conversions from external infrastructure errors into domain errors.

use freehold_domain::FreeholdError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FreeholdError);

impl From<InfraError> for FreeholdError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FreeholdError> for InfraError {
    fn from(value: FreeholdError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoFreeholdError {
    fn into_freehold(self) -> FreeholdError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FreeholdError */
/* -------------------------------------------------------------------------- */

impl IntoFreeholdError for HttpError {
    fn into_freehold(self) -> FreeholdError {
        if self.is_timeout() {
            return FreeholdError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return FreeholdError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return FreeholdError::Config(format!("invalid HTTP request: {self}"));
        }

        FreeholdError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_freehold())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → FreeholdError */
/* -------------------------------------------------------------------------- */

impl IntoFreeholdError for std::io::Error {
    fn into_freehold(self) -> FreeholdError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => FreeholdError::Io(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => FreeholdError::Io(format!("permission denied: {self}")),
            _ => FreeholdError::Io(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_freehold())
    }
}

/* -------------------------------------------------------------------------- */
/* Config parse errors → FreeholdError */
/* -------------------------------------------------------------------------- */

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(FreeholdError::Config(format!("Invalid TOML format: {value}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(FreeholdError::Config(format!("Invalid JSON format: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
