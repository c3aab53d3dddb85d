use std::fmt;

use crate::angles::{deg_to_rad, parse_sexagesimal, DEGREES_PER_HOUR};
use crate::error::AngleParseError;

/// An object named on the command line.
///
/// Names are passed through untouched; whether a name is known is decided
/// by the position provider.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyDescriptor {
    Named(String),
    /// Fixed J2000 position, radians.
    Coordinates { ra: f64, dec: f64, label: String },
}

impl BodyDescriptor {
    /// `"Jupiter"`, `"Sirius"` or `"RA/DEC"` with RA in hours and DEC in
    /// degrees, each either sexagesimal (`12:30:00`) or decimal.
    pub fn parse(token: &str) -> Result<Self, AngleParseError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AngleParseError::Empty);
        }
        let Some((ra_text, dec_text)) = token.split_once('/') else {
            return Ok(BodyDescriptor::Named(token.to_string()));
        };
        if dec_text.contains('/') {
            return Err(AngleParseError::NotAPair(token.to_string()));
        }

        let ra_hours = parse_sexagesimal(ra_text)?;
        let dec_deg = parse_sexagesimal(dec_text)?;
        if !(0.0..24.0).contains(&ra_hours) {
            return Err(AngleParseError::OutOfRange(ra_text.to_string()));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(AngleParseError::OutOfRange(dec_text.to_string()));
        }
        Ok(BodyDescriptor::Coordinates {
            ra: deg_to_rad(ra_hours * DEGREES_PER_HOUR),
            dec: deg_to_rad(dec_deg),
            label: token.to_string(),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            BodyDescriptor::Named(name) => name,
            BodyDescriptor::Coordinates { label, .. } => label,
        }
    }
}

impl fmt::Display for BodyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
