use lazy_static::lazy_static;
use regex::Regex;
use time::{Date, Month};

use crate::error::{ApiError, FieldError};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref ENTRY_DATE_RE: Regex = Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strict `dd/MM/yyyy` shape check used when an entry is logged.
pub fn is_entry_date_format(date: &str) -> bool {
    ENTRY_DATE_RE.is_match(date)
}

/// Decomposes a `day/month/year` display string into a calendar date.
///
/// Accepts unpadded components (`5/1/2025`) so that rows written before
/// the strict format check still sort correctly. Returns `None` for
/// anything that does not name a real day.
pub fn parse_day_month_year(date: &str) -> Option<Date> {
    let mut parts = date.trim().split('/');
    let day: u8 = parts.next()?.trim().parse().ok()?;
    let month: u8 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Collects field errors and turns them into a single `ApiError`.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldError>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.0.push(FieldError::new(field, message));
        }
    }

    pub fn non_empty(&mut self, value: &str, field: &str, message: &str) {
        self.check(!value.trim().is_empty(), field, message);
    }

    pub fn positive(&mut self, value: f64, field: &str, message: &str) {
        self.check(value.is_finite() && value > 0.0, field, message);
    }

    /// Records one more failed field and returns every violation so far.
    pub fn reject(mut self, field: &str, message: &str) -> ApiError {
        self.0.push(FieldError::new(field, message));
        ApiError::Validation(self.0)
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.0))
        }
    }
}
