//! Hour-and-minute clock formatting split into typed parts.

use chrono::Timelike;
use serde::Serialize;

use super::locale::{HourCycle, Locale, LocaleData};
use crate::error::{Result, UiError};

/// Kind of a formatted time part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    Hour,
    Minute,
    Literal,
    DayPeriod,
}

/// One piece of a formatted time, e.g. the hour `2` or the marker `PM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePart {
    /// What the piece stands for.
    #[serde(rename = "type")]
    pub kind: PartKind,
    /// Rendered text.
    pub value: String,
}

impl TimePart {
    fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    fn is_blank_literal(&self) -> bool {
        self.kind == PartKind::Literal && self.value.trim().is_empty()
    }
}

/// Formats clock times for one locale with hour and minute fields.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    locale: Locale,
    data: LocaleData,
    hour_cycle: HourCycle,
}

impl TimeFormatter {
    /// Create a formatter for a locale identifier.
    ///
    /// A `-u-hc-` extension in the identifier picks the hour cycle,
    /// otherwise the locale default applies. Malformed identifiers
    /// format as [`DEFAULT_LOCALE`](super::DEFAULT_LOCALE).
    pub fn new(locale: &str) -> Self {
        let locale = Locale::parse(locale);
        let data = locale.data();
        let hour_cycle = locale.hour_cycle_override().unwrap_or(data.hour_cycle);
        Self {
            locale,
            data,
            hour_cycle,
        }
    }

    /// Force an hour cycle regardless of the locale.
    pub fn with_hour_cycle(mut self, hour_cycle: HourCycle) -> Self {
        self.hour_cycle = hour_cycle;
        self
    }

    /// The locale identifier this formatter was built from.
    pub fn locale(&self) -> &str {
        self.locale.tag()
    }

    /// The hour cycle in effect.
    pub fn hour_cycle(&self) -> HourCycle {
        self.hour_cycle
    }

    /// Format `time` into its parts, in display order.
    pub fn format_to_parts<T: Timelike>(&self, time: &T) -> Vec<TimePart> {
        let hour24 = time.hour();
        let hour = self.hour_cycle.display_hour(hour24);
        let hour = if !self.hour_cycle.has_day_period() && self.data.pad_24h {
            format!("{hour:02}")
        } else {
            hour.to_string()
        };

        let mut parts = Vec::with_capacity(5);
        let period = self
            .hour_cycle
            .has_day_period()
            .then(|| TimePart::new(PartKind::DayPeriod, self.data.day_period(hour24)));

        if let (Some(period), true) = (&period, self.data.period_first) {
            parts.push(period.clone());
            self.push_gap(&mut parts);
        }
        parts.push(TimePart::new(PartKind::Hour, hour));
        parts.push(TimePart::new(PartKind::Literal, self.data.separator));
        parts.push(TimePart::new(
            PartKind::Minute,
            format!("{:02}", time.minute()),
        ));
        if let (Some(period), false) = (period, self.data.period_first) {
            self.push_gap(&mut parts);
            parts.push(period);
        }

        parts
    }

    /// Format `time` as a single string.
    pub fn format<T: Timelike>(&self, time: &T) -> String {
        self.format_to_parts(time)
            .into_iter()
            .map(|part| part.value)
            .collect()
    }

    /// Format `time` without its day period.
    ///
    /// Blank literals that only separated the day period from the numeric
    /// time go with it.
    pub fn format_without_day_period<T: Timelike>(&self, time: &T) -> String {
        let parts = self.format_to_parts(time);
        let Some(period) = parts.iter().position(|p| p.kind == PartKind::DayPeriod) else {
            return parts.into_iter().map(|part| part.value).collect();
        };

        parts
            .iter()
            .enumerate()
            .filter(|(i, part)| {
                let next_to_period = *i + 1 == period || *i == period + 1;
                *i != period && !(next_to_period && part.is_blank_literal())
            })
            .map(|(_, part)| part.value.as_str())
            .collect()
    }

    /// The day period of `time`, e.g. `PM`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingDayPeriod`] if the hour cycle in effect
    /// has no day period (24-hour locales).
    pub fn day_period<T: Timelike>(&self, time: &T) -> Result<String> {
        self.format_to_parts(time)
            .into_iter()
            .find(|part| part.kind == PartKind::DayPeriod)
            .map(|part| part.value)
            .ok_or_else(|| UiError::MissingDayPeriod {
                locale: self.locale().to_string(),
            })
    }

    fn push_gap(&self, parts: &mut Vec<TimePart>) {
        if !self.data.period_gap.is_empty() {
            parts.push(TimePart::new(PartKind::Literal, self.data.period_gap));
        }
    }
}

/// Format the hour and minute of `time` for `locale`, leaving out the day period.
///
/// `en-US` at 14:05 gives `"2:05"`, `de-DE` gives `"14:05"`.
pub fn time_without_am_pm<T: Timelike>(time: &T, locale: &str) -> String {
    TimeFormatter::new(locale).format_without_day_period(time)
}

/// The day period of `time` for `locale`, e.g. `"PM"` for `en-US` at 14:05.
///
/// # Errors
///
/// Returns [`UiError::MissingDayPeriod`] for locales that format times on
/// a 24-hour clock. Only call this for 12-hour locales.
pub fn time_am_pm<T: Timelike>(time: &T, locale: &str) -> Result<String> {
    TimeFormatter::new(locale).day_period(time)
}
