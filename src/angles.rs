use std::fmt;

use tracing::warn;

use crate::error::AngleParseError;
use crate::types::HorizontalPosition;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Azimuth in degrees, north through east, in `[0, 360)`.
pub fn azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// Converts an hour angle and declination (degrees) seen from `latitude`
/// into a horizontal position in radians.
pub fn horizontal_position(latitude: f64, declination: f64, hour_angle: f64) -> HorizontalPosition {
    let z = zenith_angle(latitude, declination, hour_angle);
    let az = azimuth(latitude, declination, hour_angle);
    HorizontalPosition::from_degrees(az, altitude(z))
}

/// Great-circle distance in radians between two horizontal positions.
///
/// Azimuth plays the role of longitude and altitude of latitude. The
/// haversine term is clamped so rounding can never push the result
/// outside `[0, π]`.
pub fn separation(a: HorizontalPosition, b: HorizontalPosition) -> f64 {
    let dlat = b.altitude - a.altitude;
    let dlon = b.azimuth - a.azimuth;
    let h = (dlat / 2.0).sin().powi(2)
        + a.altitude.cos() * b.altitude.cos() * (dlon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: i64,
    pub minutes: i64,
    /// Rounded to two decimals.
    pub seconds: f64,
}

impl Dms {
    pub fn from_degrees(decimal_degrees: f64) -> Self {
        let minutes = decimal_degrees.rem_euclid(1.0) * 60.0;
        let seconds = minutes.rem_euclid(1.0) * 60.0;
        Dms {
            degrees: decimal_degrees.floor() as i64,
            minutes: minutes.floor() as i64,
            seconds: (seconds * 100.0).round() / 100.0,
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut seconds = self.seconds.to_string();
        if !seconds.contains('.') {
            seconds.push_str(".0");
        }
        write!(
            f,
            "{} degrees {} minutes {} seconds",
            self.degrees, self.minutes, seconds
        )
    }
}

/// `"<D> degrees <M> minutes <S.SS> seconds"`.
///
/// Reporting path only: a non-finite value is logged and rendered as zero.
pub fn format_dms(decimal_degrees: f64) -> String {
    let value = if decimal_degrees.is_finite() {
        decimal_degrees
    } else {
        warn!(value = %decimal_degrees, "could not format angle, using 0");
        0.0
    };
    Dms::from_degrees(value).to_string()
}

/// Signed `D:MM:SS.S`, e.g. `-96:33:50.0`.
pub fn sexagesimal(decimal_degrees: f64) -> String {
    let sign = if decimal_degrees < 0.0 { "-" } else { "" };
    let tenths = (decimal_degrees.abs() * 36_000.0).round() as u64;
    let degrees = tenths / 36_000;
    let minutes = (tenths % 36_000) / 600;
    let seconds = (tenths % 600) as f64 / 10.0;
    format!("{}{}:{:02}:{:04.1}", sign, degrees, minutes, seconds)
}

/// Parses `D:M:S`, `D:M` or a plain decimal into a decimal value in the
/// same unit as the leading field.
pub fn parse_sexagesimal(text: &str) -> Result<f64, AngleParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AngleParseError::Empty);
    }
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let fields: Vec<&str> = body.split(':').collect();
    if fields.len() > 3 {
        return Err(AngleParseError::Invalid(text.to_string()));
    }
    let mut value = 0.0;
    let mut scale = 1.0;
    for (i, field) in fields.iter().enumerate() {
        let part: f64 = field
            .trim()
            .parse()
            .map_err(|_| AngleParseError::Invalid(text.to_string()))?;
        if !part.is_finite() || part < 0.0 || (i > 0 && part >= 60.0) {
            return Err(AngleParseError::OutOfRange(text.to_string()));
        }
        value += part / scale;
        scale *= 60.0;
    }
    Ok(if negative { -value } else { value })
}
