//! Fixed-step search for the closest and widest separation of two bodies.
//!
//! The scanner walks `[start, start + duration)` in steps of `resolution`,
//! asks a [`PositionProvider`] where both bodies stand at each instant and
//! keeps the smallest and largest great-circle separation seen, together
//! with the instant it occurred.

use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use tracing::{debug, info, trace};

use crate::angles::separation;
use crate::body::BodyDescriptor;
use crate::error::{EphemerisError, ScanError};
use crate::types::{ExtremumRecord, HorizontalPosition, Observer, ScanConfig, ScanOutcome};

/// Source of horizontal coordinates for a body.
///
/// Answers must depend only on the arguments; the scanner passes the
/// instant explicitly on every call.
pub trait PositionProvider {
    fn position_of(
        &self,
        body: &BodyDescriptor,
        observer: &Observer,
        time: DateTime<Utc>,
    ) -> Result<HorizontalPosition, EphemerisError>;

    /// Rejects bodies the provider cannot place. Called once per body before sampling.
    fn validate(&self, _body: &BodyDescriptor) -> Result<(), EphemerisError> {
        Ok(())
    }
}

/// Scans the configured window and returns both extrema.
///
/// A window shorter than one step is sampled exactly once, at its start.
pub fn scan<P: PositionProvider + ?Sized>(
    config: &ScanConfig,
    provider: &P,
) -> Result<ScanOutcome, ScanError> {
    let [a, b] = &config.objects;
    let observer = &config.observer;
    let window = &config.window;

    provider.validate(a)?;
    provider.validate(b)?;

    let start = window.start();
    let end = window.end();
    let step = window.step();
    debug!(%a, %b, %start, %end, step = window.step_seconds(), "scanning");

    let mut minimum = ExtremumRecord {
        separation: PI,
        time: start,
    };
    let mut maximum = ExtremumRecord {
        separation: 0.0,
        time: start,
    };
    let mut samples = 0u64;

    let mut t = start;
    while t < end {
        let pos_a = provider.position_of(a, observer, t)?;
        let pos_b = provider.position_of(b, observer, t)?;
        let sep = separation(pos_a, pos_b);
        trace!(time = %t, sep, "sample");

        if sep < minimum.separation {
            minimum = ExtremumRecord { separation: sep, time: t };
        }
        if sep > maximum.separation {
            maximum = ExtremumRecord { separation: sep, time: t };
        }
        samples += 1;

        // Past the representable range means past `end` as well.
        t = match t.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }

    info!(
        samples,
        min_deg = minimum.degrees(),
        max_deg = maximum.degrees(),
        "scan complete"
    );
    Ok(ScanOutcome {
        minimum,
        maximum,
        samples,
    })
}
