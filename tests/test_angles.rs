use std::f64::consts::{FRAC_PI_2, PI};

use conjunction::angles::*;
use conjunction::error::AngleParseError;
use conjunction::types::HorizontalPosition;
use proptest::prelude::*;

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

fn deg(az: f64, alt: f64) -> HorizontalPosition {
    HorizontalPosition::from_degrees(az, alt)
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (720.0, 0.0),
        (-450.0, 270.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_deg_rad_roundtrip() {
    assert_approx!(deg_to_rad(180.0), PI, 1e-12);
    assert_approx!(rad_to_deg(FRAC_PI_2), 90.0, 1e-12);
}

// ── Horizontal coordinates ──

#[test]
fn test_zenith_on_meridian() {
    assert_approx!(zenith_angle(40.0, 0.0, 0.0), 40.0, 1e-9);
    assert_approx!(zenith_angle(40.0, 40.0, 0.0), 0.0, 1e-6);
    assert_approx!(zenith_angle(-30.0, 10.0, 0.0), 40.0, 1e-9);
}

#[test]
fn test_azimuth_on_meridian_faces_south() {
    assert_approx!(azimuth(40.0, 0.0, 0.0), 180.0, 1e-9);
}

#[test]
fn test_azimuth_east_before_transit_west_after() {
    let morning = azimuth(40.0, 10.0, -45.0);
    let evening = azimuth(40.0, 10.0, 45.0);
    assert!(morning > 0.0 && morning < 180.0, "morning={}", morning);
    assert!(evening > 180.0 && evening < 360.0, "evening={}", evening);
}

#[test]
fn test_horizontal_position_in_radians() {
    let pos = horizontal_position(40.0, 0.0, 0.0);
    assert_approx!(pos.altitude, deg_to_rad(50.0), 1e-9);
    assert_approx!(pos.azimuth, PI, 1e-9);
}

// ── Separation ──

#[test]
fn test_separation_identical_is_zero() {
    let a = deg(123.4, 56.7);
    assert_eq!(separation(a, a), 0.0);
}

#[test]
fn test_separation_along_horizon() {
    assert_approx!(separation(deg(0.0, 0.0), deg(90.0, 0.0)), FRAC_PI_2, 1e-12);
    assert_approx!(separation(deg(10.0, 0.0), deg(11.0, 0.0)), deg_to_rad(1.0), 1e-12);
}

#[test]
fn test_separation_wraps_through_north() {
    assert_approx!(separation(deg(359.0, 0.0), deg(1.0, 0.0)), deg_to_rad(2.0), 1e-12);
}

#[test]
fn test_separation_antipodes() {
    assert_approx!(separation(deg(0.0, 90.0), deg(0.0, -90.0)), PI, 1e-12);
    assert_approx!(separation(deg(0.0, 0.0), deg(180.0, 0.0)), PI, 1e-12);
}

#[test]
fn test_separation_zenith_ignores_azimuth() {
    assert_approx!(separation(deg(0.0, 90.0), deg(250.0, 90.0)), 0.0, 1e-12);
    assert_approx!(separation(deg(0.0, 90.0), deg(250.0, 30.0)), deg_to_rad(60.0), 1e-12);
}

proptest! {
    #[test]
    fn prop_separation_bounded_and_symmetric(
        az1 in 0.0..(2.0 * PI), alt1 in -FRAC_PI_2..=FRAC_PI_2,
        az2 in 0.0..(2.0 * PI), alt2 in -FRAC_PI_2..=FRAC_PI_2,
    ) {
        let a = HorizontalPosition::new(az1, alt1);
        let b = HorizontalPosition::new(az2, alt2);
        let ab = separation(a, b);
        let ba = separation(b, a);
        prop_assert!((0.0..=PI).contains(&ab), "ab={}", ab);
        prop_assert!((ab - ba).abs() <= 1e-12, "ab={} ba={}", ab, ba);
        prop_assert_eq!(separation(a, a), 0.0);
    }
}

// ── DMS formatting ──

#[test]
fn test_format_dms_zero() {
    assert_eq!(format_dms(0.0), "0 degrees 0 minutes 0.0 seconds");
}

#[test]
fn test_format_dms_documented_extremes() {
    assert_eq!(format_dms(177.55702), "177 degrees 33 minutes 25.27 seconds");
    let minimum = 1.0 + 46.0 / 60.0 + 16.36 / 3600.0;
    assert_eq!(format_dms(minimum), "1 degrees 46 minutes 16.36 seconds");
}

#[test]
fn test_format_dms_whole_and_half_values() {
    assert_eq!(format_dms(90.5), "90 degrees 30 minutes 0.0 seconds");
    assert_eq!(format_dms(10.25125), "10 degrees 15 minutes 4.5 seconds");
}

#[test]
fn test_format_dms_non_finite_degrades_to_zero() {
    assert_eq!(format_dms(f64::NAN), "0 degrees 0 minutes 0.0 seconds");
    assert_eq!(format_dms(f64::INFINITY), "0 degrees 0 minutes 0.0 seconds");
}

#[test]
fn test_dms_components() {
    let dms = Dms::from_degrees(177.55702);
    assert_eq!(dms.degrees, 177);
    assert_eq!(dms.minutes, 33);
    assert_approx!(dms.seconds, 25.27, 1e-9);
}

// ── Sexagesimal ──

#[test]
fn test_sexagesimal_observer_style() {
    assert_eq!(sexagesimal(32.9029), "32:54:10.4");
    assert_eq!(sexagesimal(-96.5639), "-96:33:50.0");
    assert_eq!(sexagesimal(0.0), "0:00:00.0");
}

#[test]
fn test_parse_sexagesimal_forms() {
    assert_approx!(parse_sexagesimal("12:30:00").unwrap(), 12.5, 1e-12);
    assert_approx!(parse_sexagesimal("12:30").unwrap(), 12.5, 1e-12);
    assert_approx!(parse_sexagesimal("-16:42:58").unwrap(), -16.716111, 1e-6);
    assert_approx!(parse_sexagesimal("+5.25").unwrap(), 5.25, 1e-12);
    assert_approx!(parse_sexagesimal("-0:30").unwrap(), -0.5, 1e-12);
}

#[test]
fn test_parse_sexagesimal_rejects_garbage() {
    assert_eq!(parse_sexagesimal(""), Err(AngleParseError::Empty));
    assert!(matches!(parse_sexagesimal("abc"), Err(AngleParseError::Invalid(_))));
    assert!(matches!(parse_sexagesimal("1:2:3:4"), Err(AngleParseError::Invalid(_))));
    assert!(matches!(parse_sexagesimal("12:60"), Err(AngleParseError::OutOfRange(_))));
}
