//! Time helpers: compact durations and locale-aware clock times.
//!
//! Instants are `chrono` values. Clock formatting reads the wall-clock
//! hour and minute of whatever `Timelike` value it is given, so a
//! `DateTime<Tz>` is shown in its own time zone.

mod clock;
mod duration;
mod locale;

pub use clock::{time_am_pm, time_without_am_pm, PartKind, TimeFormatter, TimePart};
pub use duration::{format_minutes, pretty_delta, pretty_duration, MINUTES_ONLY_LIMIT};
pub use locale::{locale_data, HourCycle, Locale, LocaleData, DEFAULT_LOCALE};
