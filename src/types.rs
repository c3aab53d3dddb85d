use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::angles::sexagesimal;
use crate::body::BodyDescriptor;
use crate::error::ConfigError;

/// Direction in the observer's local sky, both angles in radians.
///
/// Azimuth is measured from north towards east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

impl HorizontalPosition {
    pub fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    pub fn from_degrees(azimuth_deg: f64, altitude_deg: f64) -> Self {
        Self {
            azimuth: azimuth_deg.to_radians(),
            altitude: altitude_deg.to_radians(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    pub ra: f64,
    pub dec: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            name: None,
            latitude,
            longitude,
            elevation,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Observer ")?;
        if let Some(name) = &self.name {
            write!(f, "name='{}' ", name)?;
        }
        write!(
            f,
            "lat='{}' lon='{}' elevation={:.1}m>",
            sexagesimal(self.latitude),
            sexagesimal(self.longitude),
            self.elevation
        )
    }
}

/// The span of time to scan and how often to sample it.
///
/// The window is half-open: `end()` itself is never sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationWindow {
    start: DateTime<Utc>,
    duration_seconds: u64,
    step_seconds: u64,
}

impl ObservationWindow {
    pub fn new(
        start: DateTime<Utc>,
        duration_seconds: u64,
        step_seconds: u64,
    ) -> Result<Self, ConfigError> {
        if step_seconds == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if duration_seconds == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "duration",
                text: "0".to_string(),
            });
        }
        let window = Self {
            start,
            duration_seconds,
            step_seconds,
        };
        window.checked_end().ok_or(ConfigError::WindowOverflow)?;
        Ok(window)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    pub fn step_seconds(&self) -> u64 {
        self.step_seconds
    }

    pub fn end(&self) -> DateTime<Utc> {
        // Validated in `new`.
        self.checked_end().unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn step(&self) -> TimeDelta {
        seconds_delta(self.step_seconds).unwrap_or(TimeDelta::MAX)
    }

    fn checked_end(&self) -> Option<DateTime<Utc>> {
        self.start
            .checked_add_signed(seconds_delta(self.duration_seconds)?)
    }
}

fn seconds_delta(seconds: u64) -> Option<TimeDelta> {
    TimeDelta::try_seconds(i64::try_from(seconds).ok()?)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub objects: [BodyDescriptor; 2],
    pub observer: Observer,
    pub window: ObservationWindow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremumRecord {
    pub separation: f64,
    pub time: DateTime<Utc>,
}

impl ExtremumRecord {
    pub fn degrees(&self) -> f64 {
        self.separation.to_degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanOutcome {
    pub minimum: ExtremumRecord,
    pub maximum: ExtremumRecord,
    pub samples: u64,
}

pub fn format_time_point(time: &DateTime<Utc>) -> String {
    time.format("%Y/%-m/%-d %H:%M:%S").to_string()
}
