//! Row-to-entity parsing helpers.
//!
//! `libsql::Row` is column-indexed; these helpers isolate the conversions and
//! handle the dual datetime format (`SQLite`'s `datetime('now')` vs Rust's
//! `to_rfc3339()`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Read a nullable TEXT column. Only SQL NULL is `None`; `""` stays `Some("")`.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_text(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Bind an optional string. Only `None` becomes SQL NULL.
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, Into::into)
}

/// Format a timestamp for storage: fixed-width RFC 3339 in UTC, so TEXT
/// ordering matches chronological ordering.
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Bind an optional timestamp as RFC 3339 TEXT.
pub fn opt_datetime(value: Option<DateTime<Utc>>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |dt| format_datetime(dt).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn optional_datetime_empty_is_none() {
        assert!(parse_optional_datetime(None).unwrap().is_none());
        assert!(parse_optional_datetime(Some("")).unwrap().is_none());
        assert!(parse_optional_datetime(Some("2026-02-09 14:30:00")).unwrap().is_some());
    }

    #[test]
    fn binds_none_as_null() {
        assert!(matches!(opt_text(None), libsql::Value::Null));
        assert!(matches!(opt_datetime(None), libsql::Value::Null));
        assert!(matches!(opt_text(Some("x")), libsql::Value::Text(ref s) if s == "x"));
        assert!(matches!(opt_text(Some("")), libsql::Value::Text(ref s) if s.is_empty()));
    }
}
