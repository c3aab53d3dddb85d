//! Settings file and command-line input normalization.
//!
//! Everything here runs before the scan: a [`ScanRequest`] holds the raw
//! strings from the command line, [`Settings`] supplies defaults and named
//! places, and [`ScanRequest::into_config`] turns both into a validated
//! [`ScanConfig`] or a [`ConfigError`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::body::BodyDescriptor;
use crate::duration::parse_duration;
use crate::error::ConfigError;
use crate::types::{ObservationWindow, Observer, ScanConfig};

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%Y-%m-%d"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: Defaults,
    pub places: BTreeMap<String, Place>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub duration: Option<String>,
    pub resolution: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), places = settings.places.len(), "loaded settings");
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

        pub fn place(&self, name: &str) -> Option<(&str, &Place)> {
        self.places
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(key, place)| (key.as_str(), place))
    }
}

/// Raw, unvalidated scan inputs as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanRequest {
    pub objects: Vec<String>,
    pub place: Option<String>,
    pub start: Option<String>,
    pub duration: Option<String>,
    pub resolution: Option<String>,
    pub timezone: Option<String>,
}

impl ScanRequest {
    /// Validates every input; command-line values win over settings defaults.
    pub fn into_config(
        self,
        settings: &Settings,
        now: DateTime<Utc>,
    ) -> Result<ScanConfig, ConfigError> {
        let objects = parse_objects(&self.objects)?;

        let place = self.place.ok_or(ConfigError::Missing("--where"))?;
        let observer = parse_location(&place, settings)?;

        let timezone = self
            .timezone
            .or_else(|| settings.defaults.timezone.clone())
            .map(|name| parse_timezone(&name))
            .transpose()?;
        let start = self.start.ok_or(ConfigError::Missing("--start"))?;
        let start = parse_start(&start, timezone, now)?;

        let duration = self
            .duration
            .or_else(|| settings.defaults.duration.clone())
            .ok_or(ConfigError::Missing("--duration"))?;
        let resolution = self
            .resolution
            .or_else(|| settings.defaults.resolution.clone())
            .ok_or(ConfigError::Missing("--resolution"))?;
        let duration = parse_window_seconds("duration", &duration)?;
        let step = parse_window_seconds("resolution", &resolution)?;

        let window = ObservationWindow::new(start, duration, step)?;
        Ok(ScanConfig {
            objects,
            observer,
            window,
        })
    }
}

pub fn parse_objects(tokens: &[String]) -> Result<[BodyDescriptor; 2], ConfigError> {
    let [a, b] = tokens else {
        return Err(ConfigError::ObjectCount(tokens.len()));
    };
    let parse = |token: &String| {
        BodyDescriptor::parse(token).map_err(|source| ConfigError::Object {
            token: token.clone(),
            source,
        })
    };
    Ok([parse(a)?, parse(b)?])
}

/// `lat,lon[,elevation]` in degrees and metres, or the name of a configured place.
pub fn parse_location(text: &str, settings: &Settings) -> Result<Observer, ConfigError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let numbers: Option<Vec<f64>> = fields.iter().map(|f| f.parse().ok()).collect();

    match numbers.as_deref() {
        Some(&[lat, lon]) => checked_observer(text, lat, lon, 0.0),
        Some(&[lat, lon, elevation]) => checked_observer(text, lat, lon, elevation),
        Some(_) => Err(ConfigError::InvalidLocation(text.to_string())),
        None => {
            let (name, place) = settings
                .place(text.trim())
                .ok_or_else(|| ConfigError::UnknownPlace(text.to_string()))?;
            checked_observer(text, place.latitude, place.longitude, place.elevation)
                .map(|observer| observer.named(name))
        }
    }
}

fn checked_observer(
    text: &str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<Observer, ConfigError> {
    let valid = (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
        && elevation.is_finite();
    if !valid {
        return Err(ConfigError::InvalidLocation(text.to_string()));
    }
    Ok(Observer::new(latitude, longitude, elevation))
}

pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimeZone(name.to_string()))
}

/// `now`, RFC 3339, or a calendar date and time read in `timezone` (UTC when `None`).
pub fn parse_start(
    text: &str,
    timezone: Option<Tz>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ConfigError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("now") {
        return Ok(now);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ConfigError::InvalidStart(text.to_string()))?;

    match timezone {
        None => Ok(Utc.from_utc_datetime(&naive)),
        Some(tz) => tz
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| ConfigError::AmbiguousStart(text.to_string())),
    }
}

pub fn parse_window_seconds(field: &'static str, text: &str) -> Result<u64, ConfigError> {
    let seconds = parse_duration(text).map_err(|source| ConfigError::Duration {
        field,
        text: text.to_string(),
        source,
    })?;
    if seconds == 0 {
        return Err(ConfigError::ZeroDuration {
            field,
            text: text.to_string(),
        });
    }
    Ok(seconds)
}
