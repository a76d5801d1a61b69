use chrono::NaiveDate;

use crate::error::{Error, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        Error::BadRequest(format!(
            "{} must be a calendar date in YYYY-MM-DD format, got '{}'",
            field, raw
        ))
    })
}

pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start_date = parse_date("start_date", start)?;
    let end_date = parse_date("end_date", end)?;
    if start_date > end_date {
        return Err(Error::BadRequest(
            "start_date cannot be after end_date".to_string(),
        ));
    }
    Ok((start_date, end_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let (start, end) = parse_date_range("2024-01-01", "2024-01-05").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn single_day_range_is_allowed() {
        assert!(parse_date_range("2024-02-29", "2024-02-29").is_ok());
    }

    #[test]
    fn rejects_free_form_and_impossible_dates() {
        assert!(matches!(parse_date("start_date", "next monday"), Err(Error::BadRequest(_))));
        assert!(matches!(parse_date("start_date", "2023-02-29"), Err(Error::BadRequest(_))));
    }

    #[test]
    fn rejects_reversed_range() {
        let err = parse_date_range("2024-01-05", "2024-01-01").unwrap_err();
        assert!(err.to_string().contains("start_date cannot be after end_date"));
    }
}
