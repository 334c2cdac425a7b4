//! Local date-time handling for the appointment wire format.
//!
//! Appointment times travel as the user's local wall-clock time with no zone
//! designator, truncated to whole seconds (`YYYY-MM-DDTHH:mm:ss`). Values are
//! kept as [`NaiveDateTime`] end to end so nothing ever reinterprets them
//! through UTC. Display rendering lives here too but never feeds the wire.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical `data` format sent to and read from the backend.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Minute-precision variant some backend revisions emit for `data`.
pub const MINUTE_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Typed date input (`2025-12-25`).
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Typed time input (`14:30`).
pub const TIME_INPUT_FORMAT: &str = "%H:%M";

/// Human-facing rendering (`25/12/2025 14:30`).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_wire(at: &NaiveDateTime) -> String {
    at.format(WIRE_FORMAT).to_string()
}

/// Parses the canonical wire format exactly.
pub fn parse_wire(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), WIRE_FORMAT)
}

pub fn format_display(at: &NaiveDateTime) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// Combines typed date and time text into a local date-time.
pub fn parse_input(date: &str, time: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_INPUT_FORMAT)?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_INPUT_FORMAT)?;
    Ok(date.and_time(time))
}

/// Serde adapter for `data` fields.
///
/// Serialization always emits [`WIRE_FORMAT`]. Reading also tolerates a
/// fractional-seconds suffix and minute precision, both of which some
/// backend listings include.
pub mod wire {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_wire(at))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();
        super::parse_wire(raw)
            .or_else(|_| raw.parse::<NaiveDateTime>())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, super::MINUTE_WIRE_FORMAT))
            .map_err(de::Error::custom)
    }
}
