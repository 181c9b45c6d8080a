use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub msg: String,
}

/// Serialize an aggregate count as a decimal string.
///
/// Counts leave the store as 64-bit integers but consumers of the listing
/// have always received them as strings.
pub fn count_as_string<S>(count: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(count)
}

/// Serialize a timestamp as RFC 3339 in UTC with exactly three fractional
/// digits (`2021-01-18T10:01:41.251Z`). Store defaults carry microseconds.
pub fn timestamp_millis<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
