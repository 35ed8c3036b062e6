//! Compact span formatting: `45min`, `1h30min`, `2h`.

use chrono::{DateTime, Duration, TimeZone};

use crate::error::{Result, UiError};

/// Spans up to this many minutes render in minutes only.
pub const MINUTES_ONLY_LIMIT: u64 = 60;

/// Format a whole-minute count.
///
/// Up to and including 60 minutes the result is `"<m>min"`. Longer spans
/// render as `"<h>h<m>min"`, or `"<h>h"` on whole hours.
pub fn format_minutes(minutes: u64) -> String {
    if minutes <= MINUTES_ONLY_LIMIT {
        return format!("{minutes}min");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest != 0 {
        format!("{hours}h{rest}min")
    } else {
        format!("{hours}h")
    }
}

/// Format a span, truncated to whole minutes.
///
/// # Errors
///
/// Returns [`UiError::NegativeDuration`] if the span is at least one whole
/// minute negative.
pub fn pretty_delta(delta: Duration) -> Result<String> {
    let minutes = delta.num_minutes();
    if minutes < 0 {
        return Err(UiError::NegativeDuration {
            minutes: minutes.unsigned_abs(),
        });
    }
    Ok(format_minutes(minutes.unsigned_abs()))
}

/// Format the span between two instants.
///
/// # Errors
///
/// Returns [`UiError::NegativeDuration`] if `end` is a minute or more
/// before `start`.
pub fn pretty_duration<A: TimeZone, B: TimeZone>(
    start: &DateTime<A>,
    end: &DateTime<B>,
) -> Result<String> {
    pretty_delta(end.clone().signed_duration_since(start.clone()))
}
