// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

/// Message carried by [`Error::DeprecatedClose`].
pub const DEPRECATED_CLOSE_MESSAGE: &str =
    "Lightbox::close is deprecated. Close through the header renderer's close message instead.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The imperative close entry point was called. It never closes anything.
    #[error("{}", DEPRECATED_CLOSE_MESSAGE)]
    DeprecatedClose,
}

impl Error {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::DeprecatedClose => "error-deprecated-close",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
