//! Publication date display.
//!
//! The API stamps articles as `2018-03-12T10:15:30Z`; the listing shows
//! `Mar 12, 2018`. Anything else is shown as received.

use chrono::NaiveDateTime;
use tracing::warn;

/// Layout of `webPublicationDate` as sent by the API.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Layout used in the listing, e.g. `Mar 12, 2018`.
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Reformat an API timestamp for display.
///
/// Input that does not match [`API_TIMESTAMP_FORMAT`] is logged and
/// returned unchanged.
pub fn format_publication_date(timestamp: &str) -> String {
    match NaiveDateTime::parse_from_str(timestamp, API_TIMESTAMP_FORMAT) {
        Ok(parsed) => parsed.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(e) => {
            warn!(%timestamp, error = %e, "Error formatting timestamp");
            timestamp.to_string()
        }
    }
}
