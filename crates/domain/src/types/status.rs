//! Inline status messages shown next to a form

use serde::{Deserialize, Serialize};

/// Visual tone of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    /// Work in progress (e.g. a request in flight)
    Pending,
    Success,
    Error,
}

impl StatusTone {
    /// CSS class applied to the status element, if any
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::Success => Some("is-success"),
            Self::Error => Some("is-error"),
        }
    }
}

/// A status message and its tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStatus {
    pub tone: StatusTone,
    pub message: String,
}

impl FormStatus {
    pub fn pending(message: impl Into<String>) -> Self {
        Self { tone: StatusTone::Pending, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { tone: StatusTone::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { tone: StatusTone::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.tone == StatusTone::Error
    }
}
