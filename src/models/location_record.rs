use std::fmt::{Display, Formatter};
use chrono::{DateTime, SecondsFormat, Utc};

const MAPS_URL: &str = "https://www.google.com/maps?q=";

/// A single visit, as it ends up in the locations file.
///
/// Coordinates are kept as the caller sent them; nothing here parses them.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub timestamp: DateTime<Utc>,
    pub lat: String,
    pub lon: String,
}

impl LocationRecord {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self::at(Utc::now(), lat, lon)
    }

    pub fn at(timestamp: DateTime<Utc>, lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self { timestamp, lat: lat.into(), lon: lon.into() }
    }

    pub fn map_link(&self) -> String {
        format!("{}{},{}", MAPS_URL, self.lat, self.lon)
    }

    /// `2024-05-01T12:00:00.000Z`
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The newline-terminated line appended to the log.
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl Display for LocationRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.iso_timestamp(), self.map_link())
    }
}
