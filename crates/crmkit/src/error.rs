use crmkit_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    /// Whether a disabled-entity state should render instead of an error.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self.kind, ErrorKind::View(ViewErrorKind::Disabled))
    }
}

impl From<crmkit_schema::Error> for Error {
    fn from(err: crmkit_schema::Error) -> Self {
        Self::new(
            ErrorKind::Config(ConfigErrorKind::Invalid),
            ErrorOrigin::Registry,
            err.to_string(),
        )
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::Disabled => ErrorKind::View(ViewErrorKind::Disabled),
            ErrorClass::Internal | ErrorClass::InvariantViolation => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Config(ConfigErrorKind),
    View(ViewErrorKind),

    /// The caller cannot remediate this.
    Internal,
}

///
/// ConfigErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigErrorKind {
    /// Registry contents failed validation at first read.
    Invalid,
}

///
/// ViewErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ViewErrorKind {
    /// Entity type not enabled for this tenant; render a disabled state.
    Disabled,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Registry,
    Resolve,
    View,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Registry => Self::Registry,
            CoreErrorOrigin::Resolve => Self::Resolve,
            CoreErrorOrigin::View => Self::View,
        }
    }
}
