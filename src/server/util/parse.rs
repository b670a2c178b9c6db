use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{model::datetime::LEGACY_FORMAT, server::error::AppError};

/// Parses a row id from a path segment.
///
/// A non-numeric id cannot match any row, so it is reported the same way as an unknown one.
///
/// # Arguments
/// - `kind` - What the id designates (`"Order"`, `"Payment"`), used in the error message
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::NotFound)` - The value is not an id
pub fn parse_id(kind: &str, value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(format!("{} {} not found", kind, value)))
}

/// Which end of a day a date-only value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// Parses a `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` query value.
///
/// Date-only values resolve to `00:00:00` or `23:59:59` according to `bound`.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - Raw query value
/// - `bound` - Time of day used for date-only values
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Parsed timestamp
/// - `Err(AppError::BadRequest)` - Neither format matched
pub fn parse_datetime(name: &str, value: &str, bound: DayBound) -> Result<NaiveDateTime, AppError> {
    let value = value.trim();

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, LEGACY_FORMAT) {
        return Ok(datetime);
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!(
            "{} must be YYYY-MM-DD HH:MM:SS or YYYY-MM-DD, got '{}'",
            name, value
        ))
    })?;

    let time = match bound {
        DayBound::Start => NaiveTime::MIN,
        DayBound::End => NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
    };

    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_id_is_not_found() {
        assert!(matches!(parse_id("Order", "abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id("Order", ""), Err(AppError::NotFound(_))));
        assert_eq!(parse_id("Payment", "42").unwrap(), 42);
    }

    #[test]
    fn date_only_values_cover_the_whole_day() {
        let from = parse_datetime("date_from", "2025-03-14", DayBound::Start).unwrap();
        let to = parse_datetime("date_to", "2025-03-14", DayBound::End).unwrap();

        assert_eq!(from.to_string(), "2025-03-14 00:00:00");
        assert_eq!(to.to_string(), "2025-03-14 23:59:59");
    }

    #[test]
    fn full_timestamps_are_kept() {
        let value = parse_datetime("date_to", "2025-03-14 09:26:53", DayBound::End).unwrap();

        assert_eq!(value.to_string(), "2025-03-14 09:26:53");
    }

    #[test]
    fn garbage_is_a_bad_request() {
        assert!(matches!(
            parse_datetime("date_from", "yesterday", DayBound::Start),
            Err(AppError::BadRequest(_))
        ));
    }
}
