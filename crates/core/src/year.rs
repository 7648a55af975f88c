// SPDX-License-Identifier: MIT

//!
//! The Lifeline year type
//!

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The minimum year allowed in the Lifeline system
pub const MIN_YEAR: i64 = -50000;

/// The maximum year allowed in the Lifeline system
pub const MAX_YEAR: i64 = 10000;

/// Errors that can arise in relation to a [`Year`]
#[derive(Error, Debug, Clone)]
pub enum YearError {
    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),
}

/// The Lifeline year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }

    /// The current calendar year.  Layout code takes the current year as a
    /// parameter rather than calling this directly, so that results are
    /// reproducible in tests
    pub fn current() -> Self {
        Year(chrono::Local::now().year())
    }

    /// The number of years between this year and an earlier one.  Negative if
    /// `earlier` is in fact later
    pub fn years_since(&self, earlier: Year) -> i32 {
        self.0 - earlier.0
    }
}

impl TryFrom<i64> for Year {
    type Error = YearError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(YearError::InvalidYear(value))
        }
    }
}

impl TryFrom<i32> for Year {
    type Error = YearError;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Year::try_from(i64::from(value))
    }
}

// TODO: add visitor so that can deserialise from strings as well?
impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from() {
        // Should return error
        assert!(Year::try_from(999_999i64).is_err());
        assert!(Year::try_from(-999_999i64).is_err());

        // Should be ok
        assert!(Year::try_from(2024i64).is_ok());
        assert!(Year::try_from(-49_000i64).is_ok());
        assert_eq!(Year::try_from(2024i64).unwrap().value(), 2024);
    }

    #[test]
    fn cmp() {
        let year_1 = Year::try_from(1998i64).unwrap();
        let year_2 = Year::try_from(2024i64).unwrap();
        assert!(year_2 > year_1);
        assert!(year_1 < year_2);
        assert!(year_1 == year_1);
        assert_eq!(year_2.years_since(year_1), 26);
        assert_eq!(year_1.years_since(year_2), -26);
    }

    #[test]
    fn deserialise() {
        assert!(serde_json::from_str::<Year>("2024").is_ok());
        assert!(serde_json::from_str::<Year>("999999").is_err());
    }
}
