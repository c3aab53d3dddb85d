use std::cell::Cell;
use std::f64::consts::PI;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use conjunction::body::BodyDescriptor;
use conjunction::error::{ConfigError, EphemerisError, ScanError};
use conjunction::report::{render_results, render_setup};
use conjunction::scan::{scan, PositionProvider};
use conjunction::types::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const STEP: u64 = 60;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 4, 24, 16, 45, 29).unwrap()
}

fn config(duration: u64, step: u64) -> ScanConfig {
    ScanConfig {
        objects: [
            BodyDescriptor::Named("A".to_string()),
            BodyDescriptor::Named("B".to_string()),
        ],
        observer: Observer::new(32.9029, -96.5639, 153.7),
        window: ObservationWindow::new(start(), duration, step).unwrap(),
    }
}

/// Both bodies at fixed positions.
struct Fixed {
    a: HorizontalPosition,
    b: HorizontalPosition,
    calls: Cell<usize>,
}

impl Fixed {
    fn new(a: HorizontalPosition, b: HorizontalPosition) -> Self {
        Fixed { a, b, calls: Cell::new(0) }
    }
}

impl PositionProvider for Fixed {
    fn position_of(
        &self,
        body: &BodyDescriptor,
        _observer: &Observer,
        _time: DateTime<Utc>,
    ) -> Result<HorizontalPosition, EphemerisError> {
        self.calls.set(self.calls.get() + 1);
        match body.label() {
            "A" => Ok(self.a),
            "B" => Ok(self.b),
            other => Err(EphemerisError::UnknownBody(other.to_string())),
        }
    }
}

/// Separation falls linearly from 3.0 rad to 0.1 rad over ten steps, then
/// climbs to 2.5 rad over the next ten.
struct VShape;

impl VShape {
    fn separation_at_step(i: i64) -> f64 {
        if i <= 10 {
            3.0 - 0.29 * i as f64
        } else {
            0.1 + 0.24 * (i - 10) as f64
        }
    }
}

impl PositionProvider for VShape {
    fn position_of(
        &self,
        body: &BodyDescriptor,
        _observer: &Observer,
        time: DateTime<Utc>,
    ) -> Result<HorizontalPosition, EphemerisError> {
        let step = (time - start()).num_seconds() / STEP as i64;
        match body.label() {
            "A" => Ok(HorizontalPosition::new(0.0, 0.0)),
            _ => Ok(HorizontalPosition::new(Self::separation_at_step(step), 0.0)),
        }
    }
}

fn at_step(i: i64) -> DateTime<Utc> {
    start() + TimeDelta::seconds(i * STEP as i64)
}

// ── ObservationWindow ──

#[test]
fn test_window_rejects_zero_step() {
    assert!(matches!(
        ObservationWindow::new(start(), 3600, 0),
        Err(ConfigError::ZeroStep)
    ));
}

#[test]
fn test_window_rejects_zero_duration() {
    assert!(matches!(
        ObservationWindow::new(start(), 0, 60),
        Err(ConfigError::ZeroDuration { .. })
    ));
}

#[test]
fn test_window_end() {
    let window = ObservationWindow::new(start(), 1_728_000, 60).unwrap();
    assert_eq!(window.end(), Utc.with_ymd_and_hms(2017, 5, 14, 16, 45, 29).unwrap());
    assert_eq!(window.step(), TimeDelta::seconds(60));
}

#[test]
fn test_window_allows_step_longer_than_duration() {
    assert!(ObservationWindow::new(start(), 30, 60).is_ok());
}

// ── Scan ──

#[test]
fn test_v_shape_minimum_and_maximum() {
    let outcome = scan(&config(21 * STEP, STEP), &VShape).unwrap();
    assert_eq!(outcome.samples, 21);
    assert_approx!(outcome.minimum.separation, 0.1, 1e-9);
    assert_eq!(outcome.minimum.time, at_step(10));
    assert_approx!(outcome.maximum.separation, 3.0, 1e-9);
    assert_eq!(outcome.maximum.time, start());
}

#[test]
fn test_window_end_is_not_sampled() {
    let outcome = scan(&config(20 * STEP, STEP), &VShape).unwrap();
    assert_eq!(outcome.samples, 20);
    assert_eq!(outcome.minimum.time, at_step(10));
}

#[test]
fn test_partial_last_step_is_sampled() {
    let outcome = scan(&config(20 * STEP + 1, STEP), &VShape).unwrap();
    assert_eq!(outcome.samples, 21);
}

#[test]
fn test_duration_shorter_than_step_samples_once() {
    let provider = Fixed::new(
        HorizontalPosition::from_degrees(0.0, 10.0),
        HorizontalPosition::from_degrees(0.0, 40.0),
    );
    let outcome = scan(&config(30, STEP), &provider).unwrap();
    assert_eq!(outcome.samples, 1);
    assert_eq!(provider.calls.get(), 2);
    assert_eq!(outcome.minimum.separation, outcome.maximum.separation);
    assert_approx!(outcome.minimum.separation, 30f64.to_radians(), 1e-12);
    assert_eq!(outcome.minimum.time, start());
    assert_eq!(outcome.maximum.time, start());
}

#[test]
fn test_identical_positions_collapse_to_zero() {
    let p = HorizontalPosition::from_degrees(120.0, 35.0);
    let outcome = scan(&config(3600, STEP), &Fixed::new(p, p)).unwrap();
    assert_eq!(outcome.samples, 60);
    assert_eq!(outcome.minimum.separation, 0.0);
    assert_eq!(outcome.maximum.separation, 0.0);
}

#[test]
fn test_antipodal_positions_keep_start_time() {
    let outcome = scan(
        &config(600, STEP),
        &Fixed::new(
            HorizontalPosition::new(0.0, 0.0),
            HorizontalPosition::new(PI, 0.0),
        ),
    )
    .unwrap();
    assert_approx!(outcome.maximum.separation, PI, 1e-12);
    assert_eq!(outcome.maximum.time, start());
    assert_eq!(outcome.minimum.time, start());
}

#[test]
fn test_scan_is_idempotent() {
    let cfg = config(21 * STEP, STEP);
    let first = scan(&cfg, &VShape).unwrap();
    let second = scan(&cfg, &VShape).unwrap();
    assert_eq!(first, second);
}

// ── Provider errors ──

struct Picky;

impl PositionProvider for Picky {
    fn position_of(
        &self,
        _body: &BodyDescriptor,
        _observer: &Observer,
        _time: DateTime<Utc>,
    ) -> Result<HorizontalPosition, EphemerisError> {
        panic!("position_of must not run after a failed validation");
    }

    fn validate(&self, body: &BodyDescriptor) -> Result<(), EphemerisError> {
        Err(EphemerisError::UnknownBody(body.to_string()))
    }
}

#[test]
fn test_validation_runs_before_sampling() {
    let err = scan(&config(600, STEP), &Picky).unwrap_err();
    assert!(matches!(
        err,
        ScanError::Ephemeris(EphemerisError::UnknownBody(ref name)) if name == "A"
    ));
}

#[test]
fn test_position_error_aborts_scan() {
    let mut cfg = config(600, STEP);
    cfg.objects[1] = BodyDescriptor::Named("Vulcan".to_string());
    let p = HorizontalPosition::new(0.0, 0.0);
    let err = scan(&cfg, &Fixed::new(p, p)).unwrap_err();
    assert_eq!(err.to_string(), "unknown object 'Vulcan'");
}

// ── Report ──

#[test]
fn test_render_setup() {
    let mut cfg = config(1_728_000, 60);
    cfg.objects = [
        BodyDescriptor::Named("Jupiter".to_string()),
        BodyDescriptor::Named("Moon".to_string()),
    ];
    let expected = "\
--------------- setup ---------------
   Objects: [Jupiter, Moon]
  Location: <Observer lat='32:54:10.4' lon='-96:33:50.0' elevation=153.7m>
Start Time: 2017/4/24 16:45:29
  Duration: 1728000
Resolution: 60
";
    assert_eq!(render_setup(&cfg), expected);
}

#[test]
fn test_render_results() {
    let outcome = ScanOutcome {
        minimum: ExtremumRecord {
            separation: (1.0 + 46.0 / 60.0 + 16.36 / 3600.0f64).to_radians(),
            time: Utc.with_ymd_and_hms(2017, 5, 7, 21, 3, 29).unwrap(),
        },
        maximum: ExtremumRecord {
            separation: 177.55702f64.to_radians(),
            time: Utc.with_ymd_and_hms(2017, 4, 25, 3, 41, 29).unwrap(),
        },
        samples: 28_800,
    };
    let expected = "\
--------------- results ---------------
Minimum: 1 degrees 46 minutes 16.36 seconds at 2017/5/7 21:03:29
Maximum: 177 degrees 33 minutes 25.27 seconds at 2017/4/25 03:41:29
";
    assert_eq!(render_results(&outcome), expected);
}

#[test]
fn test_named_observer_display() {
    let observer = Observer::new(32.9029, -96.5639, 153.7).named("rowlett");
    assert_eq!(
        observer.to_string(),
        "<Observer name='rowlett' lat='32:54:10.4' lon='-96:33:50.0' elevation=153.7m>"
    );
}
