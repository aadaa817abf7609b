//! Parsing and display formatting for `"H:MM"` workout durations.

/// Parse an export duration string of the form `"H:MM"` (or `"HH:MM"`) into
/// total minutes.
///
/// Returns `None` unless the string splits into exactly two numeric parts
/// with the minutes component below 60.
///
/// # Examples
///
/// ```
/// use workout_core::duration::parse_duration;
///
/// assert_eq!(parse_duration("1:05"), Some(65));
/// assert_eq!(parse_duration("0:45"), Some(45));
/// assert_eq!(parse_duration("10:00"), Some(600));
/// assert_eq!(parse_duration("1:5:0"), None);
/// assert_eq!(parse_duration("90"), None);
/// ```
pub fn parse_duration(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    // Exactly two parts; a third means a malformed field, not seconds.
    if parts.next().is_some() {
        return None;
    }
    if minutes >= 60 {
        return None;
    }
    // Checked arithmetic: an absurd hour count is a malformed field, and the
    // caller skips the row rather than aborting the batch.
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Format a minute total as `"Hh Mm"` for the stats panel.
///
/// Total over all non-negative inputs, with the minutes component always in
/// `0..60`. The hour part is kept even when zero so the panel shape stays
/// fixed.
///
/// # Examples
///
/// ```
/// use workout_core::duration::format_duration;
///
/// assert_eq!(format_duration(125), "2h 5m");
/// assert_eq!(format_duration(110), "1h 50m");
/// assert_eq!(format_duration(45),  "0h 45m");
/// assert_eq!(format_duration(0),   "0h 0m");
/// ```
pub fn format_duration(total_minutes: u32) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
