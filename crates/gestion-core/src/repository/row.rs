//! Column conversions shared by the SQLite repositories.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;

/// RFC 3339 with as many fractional digits as needed, so nanoseconds survive
pub(crate) fn timestamp_to_sql(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

pub(crate) fn timestamp_from_sql(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn optional_timestamp_from_sql(
    idx: usize,
    raw: Option<String>,
) -> rusqlite::Result<Option<DateTime<Utc>>> {
    raw.map(|s| timestamp_from_sql(idx, &s)).transpose()
}

/// SQLite rowids are i64; our ids are u32
pub(crate) fn id_from_rowid(rowid: i64) -> rusqlite::Result<u32> {
    u32::try_from(rowid).map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(e)))
}
