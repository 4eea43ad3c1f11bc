//! Error types for the data layer and the control bindings.
//!
//! Application plumbing (config files, terminal setup) reports through
//! `anyhow`; these enums cover the failures callers branch on.

use thiserror::Error;

/// A data-source fetch failed.
///
/// The bootstrap surfaces any of these as a single error notification and
/// keeps the render pipeline alive.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source could not be reached or read
    #[error("{resource} unavailable: {reason}")]
    Unavailable {
        resource: &'static str,
        reason: String,
    },

    /// The source answered with something that is not a valid payload
    #[error("malformed {resource} payload: {reason}")]
    Malformed {
        resource: &'static str,
        reason: String,
    },
}

impl DataError {
    pub fn unavailable(resource: &'static str, reason: impl ToString) -> Self {
        DataError::Unavailable {
            resource,
            reason: reason.to_string(),
        }
    }

    pub fn malformed(resource: &'static str, reason: impl ToString) -> Self {
        DataError::Malformed {
            resource,
            reason: reason.to_string(),
        }
    }
}

/// Building the control binding table failed
#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    #[error("control '{control}' already has a {event} handler")]
    Duplicate { control: String, event: &'static str },
}
