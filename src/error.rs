//! Error types shared by installation and dispatch.

use crate::runtime::Surface;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while installing guards or calling methods.
#[derive(Debug, Error)]
pub enum Error {
    /// No method with this name on the requested surface.
    ///
    /// Raised both at call time and at installation time, so a guard
    /// requested for a missing method fails the same way a call would.
    #[error("undefined method '{method}' for {}", .surface.describe(.class))]
    NoMethod {
        class: String,
        surface: Surface,
        method: String,
    },

    /// A plain runtime failure carrying a message.
    ///
    /// Guards raise this, and so can ordinary method bodies.
    #[error("{0}")]
    Raised(String),

    /// Wrong number or type of arguments, or a missing block.
    #[error("{0}")]
    Argument(String),

    /// The alias derived for a method already exists on that surface.
    #[error("cannot proxy '{method}' on {}: '{alias}' is already defined", .surface.describe(.class))]
    AliasCollision {
        class: String,
        surface: Surface,
        method: String,
        alias: String,
    },

    /// A derived alias is not a valid method name.
    #[error("invalid method name '{0}'")]
    InvalidName(String),

    /// A guard configuration could not be parsed.
    #[error("invalid proxy configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Failure from application code, passed through untouched.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Runtime failure with the given message.
    pub fn raised(message: impl Into<String>) -> Self {
        Error::Raised(message.into())
    }

    /// Argument failure with the given message.
    pub fn argument(message: impl Into<String>) -> Self {
        Error::Argument(message.into())
    }

    pub(crate) fn no_method(class: &str, surface: Surface, method: &str) -> Self {
        Error::NoMethod {
            class: class.to_string(),
            surface,
            method: method.to_string(),
        }
    }

    /// True when this is an undefined-method error.
    pub fn is_no_method(&self) -> bool {
        matches!(self, Error::NoMethod { .. })
    }
}
