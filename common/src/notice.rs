//! # Notifications
//!
//! Transient messages aimed at the user. The core never reads them back; the
//! presentation layer decides how a [`Notice`] is shown.

use std::fmt;

use crate::error::CartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

impl From<&CartError> for Notice {
    fn from(err: &CartError) -> Self {
        let level = match err {
            CartError::EmptyInput
            | CartError::InvalidDomain(_)
            | CartError::ClipboardFailure(_) => NoticeLevel::Error,
            CartError::Duplicate(_)
            | CartError::EmptyCart
            | CartError::NotReady { .. }
            | CartError::CheckFailed(_) => NoticeLevel::Warning,
            CartError::NoChange(_) | CartError::NotInCart(_) => NoticeLevel::Info,
        };
        Notice::new(level, err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
