//! Formatting utilities for terminal output

use std::time::Duration;

/// Format a duration at human granularity
///
/// Sub-minute durations keep two decimals; longer ones step down through
/// minutes, hours, and days.
///
/// # Examples
/// ```
/// use hit_and_blow::output::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(2500)), " 2.50 sec");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1 min 30 sec");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        return format!("{secs:5.2} sec");
    }

    let (minutes, secs) = (duration.as_secs() / 60, duration.as_secs() % 60);
    if minutes < 60 {
        return format!("{minutes} min {secs} sec");
    }

    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours < 24 {
        return format!("{hours} hour {minutes} min");
    }

    let (days, hours) = (hours / 24, hours % 24);
    if days < 7 {
        format!("{days} days {hours} hours")
    } else {
        format!("{days} days")
    }
}
