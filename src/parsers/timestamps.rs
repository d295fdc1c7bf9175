use chrono::{DateTime, NaiveDateTime, Utc};

// Takeout chat exports write timestamps like
// "Saturday, 3 June 2023 at 14:51:00 UTC"
const EXPORT_TIMESTAMP_FORMAT: &str = "%A, %d %B %Y at %H:%M:%S UTC";

/// Parse the export's human-readable timestamp format.
///
/// Bubbles display the raw string untouched; this parse exists for the
/// `stats` command, which reports the time span the export covers. Returns
/// `None` for anything that does not match the format.
pub fn parse_export_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), EXPORT_TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}
