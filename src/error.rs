use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("negative duration component in '{0}'")]
    Negative(String),
    #[error("duration '{0}' is too large")]
    Overflow(String),
}

/// Errors from sexagesimal angle parsing (`RA/DEC` tokens).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AngleParseError {
    #[error("empty angle")]
    Empty,
    #[error("invalid angle '{0}'")]
    Invalid(String),
    #[error("angle '{0}' out of range")]
    OutOfRange(String),
    #[error("expected RA/DEC, got '{0}'")]
    NotAPair(String),
}

/// Errors raised by a [`crate::scan::PositionProvider`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("unknown object '{0}'")]
    UnknownBody(String),
    #[error("position of '{body}' is not finite at {time}")]
    NonFinite { body: String, time: String },
}

/// Configuration errors, detected before any sampling starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("exactly 2 objects are required, got {0}")]
    ObjectCount(usize),
    #[error("invalid object '{token}': {source}")]
    Object {
        token: String,
        #[source]
        source: AngleParseError,
    },
    #[error("invalid {field} '{text}': {source}")]
    Duration {
        field: &'static str,
        text: String,
        #[source]
        source: DurationError,
    },
    #[error("{field} '{text}' does not contain any of <n>d, <n>h, <n>m, <n>s")]
    ZeroDuration { field: &'static str, text: String },
    #[error("resolution must be greater than zero")]
    ZeroStep,
    #[error("unknown place '{0}' (use 'lat,lon[,elevation]' or define it under [places])")]
    UnknownPlace(String),
    #[error("invalid location '{0}'")]
    InvalidLocation(String),
    #[error("unrecognized start time '{0}'")]
    InvalidStart(String),
    #[error("start time '{0}' is ambiguous or skipped in the selected time zone")]
    AmbiguousStart(String),
    #[error("unknown time zone '{0}'")]
    InvalidTimeZone(String),
    #[error("window end overflows the calendar")]
    WindowOverflow,
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
