use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::AppError;

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}

/// A date as clients send it: epoch milliseconds or a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DateInput {
    Millis(i64),
    Text(String),
}

impl DateInput {
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::Millis(millis) => DateTime::from_timestamp_millis(*millis),
            DateInput::Text(text) => parse_activity_date(text),
        }
    }
}

/// Accepts RFC 3339, a zone-less `YYYY-MM-DDTHH:MM[:SS[.fff]]` or a bare
/// `YYYY-MM-DD`. Zone-less values are taken as UTC.
pub fn parse_activity_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn plain_dates_are_midnight_utc() {
        assert_eq!(
            parse_activity_date("2024-01-01"),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn timestamps_are_normalised_to_utc() {
        assert_eq!(
            parse_activity_date("2024-03-10T10:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn zone_less_date_times_are_utc() {
        let expected = Some(Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap());
        assert_eq!(parse_activity_date("2024-03-10T10:30"), expected);
        assert_eq!(parse_activity_date("2024-03-10T10:30:00"), expected);
    }

    #[test]
    fn epoch_millis_and_strings_deserialize() {
        let millis: DateInput = serde_json::from_value(serde_json::json!(1704067200000i64)).unwrap();
        assert_eq!(millis.to_utc(), Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));

        let text: DateInput = serde_json::from_value(serde_json::json!("2024-01-01")).unwrap();
        assert_eq!(text, DateInput::Text("2024-01-01".to_string()));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_activity_date("yesterday").is_none());
        assert!(parse_activity_date("2024-13-01").is_none());
        assert!(DateInput::Text(String::new()).to_utc().is_none());
    }
}
