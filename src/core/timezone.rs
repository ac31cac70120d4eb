use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// The store operates in Asia/Kolkata (UTC+05:30); all documents show local time
pub fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("Valid offset")
}

/// Convert UTC timestamp to Indian Standard Time
pub fn to_ist(utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
    utc_time.with_timezone(&ist_offset())
}

/// `d/m/yyyy` without zero padding (en-IN short date)
pub fn format_date_en_in(utc_time: DateTime<Utc>) -> String {
    let local = to_ist(utc_time);
    format!("{}/{}/{}", local.day(), local.month(), local.year())
}

/// `dd/mm/yyyy` (en-GB short date, used on receipts)
pub fn format_date_en_gb(utc_time: DateTime<Utc>) -> String {
    to_ist(utc_time).format("%d/%m/%Y").to_string()
}

/// `hh:mm AM` (two-digit 12-hour clock, used on receipts)
pub fn format_time_12h(utc_time: DateTime<Utc>) -> String {
    to_ist(utc_time).format("%I:%M %p").to_string()
}

/// `d/m/yyyy, h:mm:ss am` (en-IN date and time)
pub fn format_datetime_en_in(utc_time: DateTime<Utc>) -> String {
    let local = to_ist(utc_time);
    let (is_pm, hour) = local.hour12();
    format!(
        "{}, {}:{:02}:{:02} {}",
        format_date_en_in(utc_time),
        hour,
        local.minute(),
        local.second(),
        if is_pm { "pm" } else { "am" }
    )
}

/// ISO timestamp with `:` and `.` replaced by `-`, milliseconds and `Z` dropped
/// (`2025-01-15T10-30-45`), safe for file names
pub fn filename_timestamp(utc_time: DateTime<Utc>) -> String {
    utc_time.format("%Y-%m-%dT%H-%M-%S").to_string()
}
