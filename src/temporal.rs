//! Date/time detection inside string values.
//!
//! Three anchored patterns share the `YYYY-MM-DDThh:mm:ss[.fraction]` stem and
//! differ only in their suffix. Precedence: offset, then UTC, then local.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::TemporalPolicy;

const STEM: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]+)?";

static OFFSET_RX: Lazy<Regex> = Lazy::new(|| anchored(r"[+-][0-9]{2}:[0-9]{2}"));
static UTC_RX: Lazy<Regex> = Lazy::new(|| anchored("[Zz]"));
static LOCAL_RX: Lazy<Regex> = Lazy::new(|| anchored(""));

fn anchored(suffix: &str) -> Regex {
    // STEM and the suffixes are fixed literals; a failure here is a typo in this file.
    Regex::new(&format!("^{STEM}{suffix}$")).expect("temporal pattern must compile")
}

/// Pattern verdict for one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    /// `…±hh:mm`
    Offset,
    /// `…Z`
    Utc,
    /// no zone designator
    Local,
    Plain,
}

impl Temporal {
    pub fn is_temporal(self) -> bool {
        !matches!(self, Temporal::Plain)
    }

    /// True for values that carry their own offset (explicit or `Z`).
    pub fn is_offset_aware(self) -> bool {
        matches!(self, Temporal::Offset | Temporal::Utc)
    }
}

pub fn classify_temporal(text: &str) -> Temporal {
    if OFFSET_RX.is_match(text) {
        Temporal::Offset
    } else if UTC_RX.is_match(text) {
        Temporal::Utc
    } else if LOCAL_RX.is_match(text) {
        Temporal::Local
    } else {
        Temporal::Plain
    }
}

/// [`classify_temporal`] under a policy. `Strict` demotes pattern matches that
/// are not real calendar instants (month 13, hour 25, Feb 30, ...).
pub fn classify_with_policy(text: &str, policy: TemporalPolicy) -> Temporal {
    let verdict = classify_temporal(text);
    match policy {
        TemporalPolicy::Pattern => verdict,
        TemporalPolicy::Strict if is_calendar_valid(text, verdict) => verdict,
        TemporalPolicy::Strict => Temporal::Plain,
    }
}

fn is_calendar_valid(text: &str, verdict: Temporal) -> bool {
    use chrono::{DateTime, NaiveDateTime};
    match verdict {
        Temporal::Offset => DateTime::parse_from_rfc3339(text).is_ok(),
        Temporal::Utc => {
            let normalized = format!("{}Z", &text[..text.len() - 1]);
            DateTime::parse_from_rfc3339(&normalized).is_ok()
        }
        Temporal::Local => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
        Temporal::Plain => false,
    }
}
