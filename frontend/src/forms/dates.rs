use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Normalises a backend date or date-time into the `YYYY-MM-DD` form a date input expects.
pub fn to_date_input(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format(DATE_INPUT_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.date().format(DATE_INPUT_FORMAT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT) {
        return date.format(DATE_INPUT_FORMAT).to_string();
    }
    match raw.get(..10).map(|prefix| NaiveDate::parse_from_str(prefix, DATE_INPUT_FORMAT)) {
        Some(Ok(date)) => date.format(DATE_INPUT_FORMAT).to_string(),
        _ => String::new(),
    }
}

pub fn opt_date_input(raw: Option<&str>) -> String {
    raw.map(to_date_input).unwrap_or_default()
}

/// Human-readable date for tables, falling back to the raw text.
pub fn display_date(raw: &str) -> String {
    let normalised = to_date_input(raw);
    match NaiveDate::parse_from_str(&normalised, DATE_INPUT_FORMAT) {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_datetimes_become_date_inputs() {
        assert_eq!(to_date_input("2024-02-01T00:00:00.000Z"), "2024-02-01");
        assert_eq!(to_date_input("2024-02-01T23:30:00+00:00"), "2024-02-01");
        assert_eq!(to_date_input("2024-02-01T10:15:00"), "2024-02-01");
        assert_eq!(to_date_input("2024-02-01 10:15:00"), "2024-02-01");
        assert_eq!(to_date_input("2024-02-01"), "2024-02-01");
    }

    #[test]
    fn offset_datetime_keeps_its_local_calendar_day() {
        assert_eq!(to_date_input("2024-02-01T23:30:00-05:00"), "2024-02-01");
    }

    #[test]
    fn unparseable_input_yields_empty() {
        assert_eq!(to_date_input(""), "");
        assert_eq!(to_date_input("yesterday"), "");
        assert_eq!(opt_date_input(None), "");
    }

    #[test]
    fn display_date_formats_or_passes_through() {
        assert_eq!(display_date("2025-03-01"), "01 Mar 2025");
        assert_eq!(display_date("TBC"), "TBC");
    }
}
