// SPDX-License-Identifier: MIT

//!
//! The Lifeline title type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The maximum length of a [`Title`] in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Errors that can arise in relation to a [`Title`]
#[derive(Error, Debug, Clone)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title cannot be longer than {MAX_TITLE_LENGTH} characters")]
    TooLong,
}

// TODO: consider impl Deref to str so can be used where &str is expected
/// The Lifeline [`Title`] type.  The value can be any string which, when
/// trimmed of leading and trailing whitespace, is non-empty and no longer
/// than [`MAX_TITLE_LENGTH`] characters
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Title(String);

impl Title {
    /// Create and initialise a new title if it will be valid
    pub fn from<S: ToString>(title: S) -> Result<Self, TitleError> {
        let title = title.to_string();
        let title = title.trim();
        if title.is_empty() {
            Err(TitleError::Empty)
        } else if title.chars().count() > MAX_TITLE_LENGTH {
            Err(TitleError::TooLong)
        } else {
            Ok(Title(title.to_string()))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Title::from(string).map_err(serde::de::Error::custom)
    }
}
