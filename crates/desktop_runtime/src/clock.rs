//! Top-strip clock formatting.

use platform_host::ClockTime;

/// Formats a wall-clock time the way en-US renders `h:mm AM/PM`.
pub fn format_clock_time(time: ClockTime) -> String {
    let hour = time.hour % 24;
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let dial_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{dial_hour}:{:02} {meridiem}", time.minute % 60)
}
