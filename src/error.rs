// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only malformed input and internal invariant breaches are errors. Dismissing
//! an identifier that is already gone is a benign no-op and never reaches this
//! type.

use crate::toast::ToastId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A show request was rejected before touching any state.
    #[error("Invalid toast request: {0}")]
    InvalidRequest(String),

    /// A timer was started twice for the same live identifier.
    #[error("Timer already registered for toast {0}")]
    AlreadyRegistered(ToastId),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
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
