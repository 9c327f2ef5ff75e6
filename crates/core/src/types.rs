use chrono::{DateTime, Local};

/// Entries are stamped in the server's local time zone.
pub type Timestamp = DateTime<Local>;

/// Second-precision layout of the `date` field on stored entries.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp the way it is written into the journal file.
pub fn format_entry_date(ts: &Timestamp) -> String {
    ts.format(ENTRY_DATE_FORMAT).to_string()
}

/// Current local time formatted for a new entry.
pub fn entry_date_now() -> String {
    format_entry_date(&Local::now())
}
