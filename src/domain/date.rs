//! Calendar dates given on the command line

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::domain::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A plain calendar day, always rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Today in the local timezone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }
}

impl FromStr for Date {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields, the canonical form does not
        if trimmed.len() != 10 {
            return Err(DomainError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Add<u64> for Date {
    type Output = Date;

    fn add(self, days: u64) -> Date {
        Date(self.0.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX))
    }
}

impl Sub<u64> for Date {
    type Output = Date;

    fn sub(self, days: u64) -> Date {
        Date(self.0.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN))
    }
}
