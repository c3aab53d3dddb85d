pub mod angles;
pub mod body;
pub mod config;
pub mod duration;
pub mod ephemeris;
pub mod error;
pub mod report;
pub mod satellites;
pub mod scan;
pub mod stars;
pub mod types;

pub use angles::{
    azimuth, deg_to_rad, format_dms, horizontal_position, normalize_angle, parse_sexagesimal,
    rad_to_deg, separation, sexagesimal, zenith_angle, Dms, DEGREES_PER_HOUR,
};

pub use body::BodyDescriptor;

pub use config::{ScanRequest, Settings};

pub use duration::parse_duration;

pub use ephemeris::{Ephemeris, Planet};

pub use error::{AngleParseError, ConfigError, DurationError, EphemerisError, ScanError};

pub use report::{render_results, render_setup};

pub use satellites::Satellite;

pub use scan::{scan, PositionProvider};

pub use types::{
    format_time_point, EquatorialPosition, ExtremumRecord, HorizontalPosition, ObservationWindow,
    Observer, ScanConfig, ScanOutcome,
};
