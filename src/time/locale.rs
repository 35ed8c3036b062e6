//! Locale identifiers and clock-time conventions.

use std::fmt;
use std::str::FromStr;

use icu::locale::extensions::unicode::Key;
use icu::locale::{langid, Locale as IcuLocale};
use serde::{Deserialize, Serialize};

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en-US";

/// How hours of the day are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// 0-11 with a day period.
    H11,
    /// 1-12 with a day period.
    H12,
    /// 0-23.
    H23,
    /// 1-24.
    H24,
}

impl HourCycle {
    /// Check if times in this cycle carry an AM/PM marker.
    pub fn has_day_period(self) -> bool {
        matches!(self, HourCycle::H11 | HourCycle::H12)
    }

    /// Map a 0-23 hour onto this cycle.
    pub fn display_hour(self, hour24: u32) -> u32 {
        match self {
            HourCycle::H12 => match hour24 % 12 {
                0 => 12,
                h => h,
            },
            HourCycle::H11 => hour24 % 12,
            HourCycle::H23 => hour24,
            HourCycle::H24 => {
                if hour24 == 0 {
                    24
                } else {
                    hour24
                }
            }
        }
    }

    /// The keyword used in locale extensions and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            HourCycle::H11 => "h11",
            HourCycle::H12 => "h12",
            HourCycle::H23 => "h23",
            HourCycle::H24 => "h24",
        }
    }
}

impl fmt::Display for HourCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HourCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h11" => Ok(HourCycle::H11),
            "h12" => Ok(HourCycle::H12),
            "h23" => Ok(HourCycle::H23),
            "h24" => Ok(HourCycle::H24),
            other => Err(format!(
                "unknown hour cycle '{other}' (expected h11, h12, h23 or h24)"
            )),
        }
    }
}

/// Clock-time conventions of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    /// Default hour cycle.
    pub hour_cycle: HourCycle,
    /// Morning marker.
    pub am: &'static str,
    /// Afternoon marker.
    pub pm: &'static str,
    /// Marker goes before the numeric time.
    pub period_first: bool,
    /// Literal between the marker and the numeric time.
    pub period_gap: &'static str,
    /// Literal between hour and minute.
    pub separator: &'static str,
    /// Zero-pad hours in 24-hour cycles.
    pub pad_24h: bool,
}

impl LocaleData {
    /// The marker for a 0-23 hour.
    pub fn day_period(&self, hour24: u32) -> &'static str {
        if hour24 < 12 {
            self.am
        } else {
            self.pm
        }
    }
}

const TWELVE_HOUR: LocaleData = LocaleData {
    hour_cycle: HourCycle::H12,
    am: "AM",
    pm: "PM",
    period_first: false,
    period_gap: " ",
    separator: ":",
    pad_24h: true,
};

const TWENTY_FOUR_HOUR: LocaleData = LocaleData {
    hour_cycle: HourCycle::H23,
    ..TWELVE_HOUR
};

/// Look up the conventions for a language and optional region.
///
/// Languages without an entry use 12-hour `AM`/`PM` formatting.
pub fn locale_data(language: &str, region: Option<&str>) -> LocaleData {
    match (language, region) {
        ("en", Some("GB" | "IE" | "NZ" | "ZA")) => TWENTY_FOUR_HOUR,
        ("en", Some("AU" | "IN")) => LocaleData {
            am: "am",
            pm: "pm",
            ..TWELVE_HOUR
        },
        ("en", Some("CA")) => LocaleData {
            am: "a.m.",
            pm: "p.m.",
            ..TWELVE_HOUR
        },
        ("en" | "bn", _) => TWELVE_HOUR,
        ("hi", _) => LocaleData {
            am: "am",
            pm: "pm",
            ..TWELVE_HOUR
        },
        ("ar", _) => LocaleData {
            am: "ص",
            pm: "م",
            ..TWELVE_HOUR
        },
        ("el", _) => LocaleData {
            am: "π.μ.",
            pm: "μ.μ.",
            ..TWELVE_HOUR
        },
        ("ms", _) => LocaleData {
            am: "PG",
            pm: "PTG",
            ..TWELVE_HOUR
        },
        ("ko", _) => LocaleData {
            am: "오전",
            pm: "오후",
            period_first: true,
            ..TWELVE_HOUR
        },
        ("zh", Some("TW" | "HK" | "MO")) => LocaleData {
            am: "上午",
            pm: "下午",
            period_first: true,
            period_gap: "",
            ..TWELVE_HOUR
        },
        ("zh", _) => LocaleData {
            am: "上午",
            pm: "下午",
            period_first: true,
            period_gap: "",
            ..TWENTY_FOUR_HOUR
        },
        ("ja", _) => LocaleData {
            am: "午前",
            pm: "午後",
            period_first: true,
            period_gap: "",
            pad_24h: false,
            ..TWENTY_FOUR_HOUR
        },
        ("es", Some("US" | "PR")) => LocaleData {
            am: "a.m.",
            pm: "p.m.",
            ..TWELVE_HOUR
        },
        ("es", _) => LocaleData {
            am: "a. m.",
            pm: "p. m.",
            pad_24h: false,
            ..TWENTY_FOUR_HOUR
        },
        ("fr", Some("CA")) => LocaleData {
            separator: " h ",
            ..TWENTY_FOUR_HOUR
        },
        ("cs" | "hu" | "ca" | "fa", _) => LocaleData {
            pad_24h: false,
            ..TWENTY_FOUR_HOUR
        },
        ("fi", _) => LocaleData {
            separator: ".",
            pad_24h: false,
            ..TWENTY_FOUR_HOUR
        },
        ("da" | "id", _) => LocaleData {
            separator: ".",
            ..TWENTY_FOUR_HOUR
        },
        (
            "de" | "fr" | "it" | "pt" | "ru" | "nl" | "sv" | "nb" | "no" | "nn" | "pl" | "ro"
            | "tr" | "uk" | "hr" | "sk" | "sl" | "bg" | "he" | "th" | "vi" | "et" | "lt"
            | "lv" | "sr" | "is" | "af" | "hy" | "az" | "eu" | "be" | "bs" | "ka" | "kk"
            | "mk" | "mn" | "sw" | "uz" | "gl" | "ga" | "cy",
            _,
        ) => TWENTY_FOUR_HOUR,
        _ => TWELVE_HOUR,
    }
}

/// A parsed BCP 47 locale identifier, reduced to what time formatting reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    id: IcuLocale,
}

impl Locale {
    /// Parse a locale identifier such as `en-US`, `de_DE` or `fr-CA-u-hc-h12`.
    ///
    /// Never fails: empty or malformed identifiers resolve to
    /// [`DEFAULT_LOCALE`].
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.replace('_', "-").parse::<IcuLocale>() {
            Ok(id) if !tag.is_empty() => Self {
                tag: tag.to_string(),
                id,
            },
            _ => Self::default(),
        }
    }

    /// The identifier as given, or [`DEFAULT_LOCALE`] when it did not parse.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Lowercase language subtag.
    pub fn language(&self) -> &str {
        self.id.id.language.as_str()
    }

    /// Uppercase region subtag.
    pub fn region(&self) -> Option<&str> {
        self.id.id.region.as_ref().map(|region| region.as_str())
    }

    /// Hour cycle requested through a `-u-hc-` extension.
    pub fn hour_cycle_override(&self) -> Option<HourCycle> {
        unicode_keyword(&self.id, "hc")?.parse().ok()
    }

    /// Conventions for this locale.
    pub fn data(&self) -> LocaleData {
        locale_data(self.language(), self.region())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: DEFAULT_LOCALE.to_string(),
            id: IcuLocale::from(langid!("en-US")),
        }
    }
}

fn unicode_keyword(locale: &IcuLocale, key: &str) -> Option<String> {
    let key: Key = key.parse().ok()?;
    locale
        .extensions
        .unicode
        .keywords
        .get(&key)
        .map(|value| value.to_string())
}
