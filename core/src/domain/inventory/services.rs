use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::value_objects::{DaysToExpiry, ExpiryDates},
};

pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone skips whitespace and accepts signed or short years.
static EXPIRY_DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("date pattern is valid")
});

fn parse_expiry_date(value: &str) -> Option<NaiveDate> {
    if !EXPIRY_DATE_SHAPE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, EXPIRY_DATE_FORMAT).ok()
}

/// Days remaining for every item, relative to `today`.
///
/// The first malformed date aborts the whole computation.
pub fn calculate_days_to_expiry(
    expiry_dates: &ExpiryDates,
    today: NaiveDate,
) -> Result<DaysToExpiry, CoreError> {
    expiry_dates
        .iter()
        .map(|(item, value)| {
            let expiry = parse_expiry_date(value).ok_or_else(|| CoreError::DateParse {
                item: item.clone(),
                value: value.clone(),
            })?;
            Ok((item.clone(), (expiry - today).num_days()))
        })
        .collect()
}

/// Same as [`calculate_days_to_expiry`] against the local wall-clock date.
pub fn days_to_expiry_from_today(expiry_dates: &ExpiryDates) -> Result<DaysToExpiry, CoreError> {
    calculate_days_to_expiry(expiry_dates, Local::now().date_naive())
}
