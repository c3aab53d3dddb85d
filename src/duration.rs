//! Compound duration strings such as `"1d2h3m4s"`, `"20d"` or `"1 h 30 m"`.
//!
//! Each unit is looked up on its own: the first run of digits directly
//! followed by the unit letter counts, everything else is ignored. Units
//! that never appear contribute nothing, so text without any unit parses
//! to zero and it is up to the caller to reject that.

use crate::error::DurationError;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_MINUTE: u64 = 60;

const UNITS: [(char, u64); 4] = [
    ('d', SECONDS_PER_DAY),
    ('h', SECONDS_PER_HOUR),
    ('m', SECONDS_PER_MINUTE),
    ('s', 1),
];

/// Total number of seconds described by `text`.
pub fn parse_duration(text: &str) -> Result<u64, DurationError> {
    let compact: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

    UNITS.iter().try_fold(0u64, |total, &(unit, scale)| {
        let Some(count) = unit_count(&compact, unit, text)? else {
            return Ok(total);
        };
        count
            .checked_mul(scale)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(|| DurationError::Overflow(text.to_string()))
    })
}

/// Value of the leftmost `<digits><unit>` token, if any.
fn unit_count(chars: &[char], unit: char, text: &str) -> Result<Option<u64>, DurationError> {
    for (pos, &c) in chars.iter().enumerate() {
        if c != unit {
            continue;
        }
        let digits_start = chars[..pos]
            .iter()
            .rposition(|d| !d.is_ascii_digit())
            .map_or(0, |i| i + 1);
        if digits_start == pos {
            continue;
        }
        if digits_start > 0 && chars[digits_start - 1] == '-' {
            return Err(DurationError::Negative(text.to_string()));
        }
        let digits: String = chars[digits_start..pos].iter().collect();
        return digits
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DurationError::Overflow(text.to_string()));
    }
    Ok(None)
}

