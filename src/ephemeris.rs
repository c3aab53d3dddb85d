//! Low-precision built-in ephemeris.
//!
//! Planets and the Sun come from the JPL approximate Keplerian elements
//! (valid 1800-2050, arcminute level for the inner planets), the Moon from a
//! truncated series good to a few tenths of a degree, the Galilean
//! satellites as offsets from Jupiter ([`crate::satellites`]), stars from
//! the [`crate::stars`] catalogue. Everything is reduced to J2000 right
//! ascension and declination and then turned into horizontal coordinates
//! using mean sidereal time. Refraction is ignored.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::angles::{
    deg_to_rad, horizontal_position, normalize_angle, rad_to_deg, DEGREES_PER_HOUR,
};
use crate::body::BodyDescriptor;
use crate::error::EphemerisError;
use crate::satellites::Satellite;
use crate::scan::PositionProvider;
use crate::stars::find_star;
use crate::types::{EquatorialPosition, HorizontalPosition, Observer};

pub const J2000_JD: f64 = 2_451_545.0;
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
pub const OBLIQUITY_J2000: f64 = 23.439_291_1;
/// General precession in longitude, degrees per Julian century.
pub const PRECESSION_PER_CENTURY: f64 = 1.396_971;
pub const AU_KM: f64 = 149_597_870.7;
pub const JUPITER_RADIUS_KM: f64 = 71_492.0;
/// J2000 direction of Jupiter's north pole, degrees.
pub const JUPITER_POLE: (f64, f64) = (268.056_595, 64.495_303);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    pub const ALL: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub fn from_name(name: &str) -> Option<Planet> {
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value at J2000 and rate per Julian century for each element.
/// Angles in degrees, semi-major axis in AU.
struct OrbitalElements {
    a: [f64; 2],
    e: [f64; 2],
    i: [f64; 2],
    l: [f64; 2],
    peri: [f64; 2],
    node: [f64; 2],
}

const EARTH_MOON_BARYCENTER: usize = 2;
const JUPITER: usize = 4;

#[rustfmt::skip]
const ELEMENTS: [OrbitalElements; 9] = [
    // Mercury
    OrbitalElements { a: [0.38709927, 0.00000037], e: [0.20563593, 0.00001906], i: [7.00497902, -0.00594749],
        l: [252.25032350, 149472.67411175], peri: [77.45779628, 0.16047689], node: [48.33076593, -0.12534081] },
    // Venus
    OrbitalElements { a: [0.72333566, 0.00000390], e: [0.00677672, -0.00004107], i: [3.39467605, -0.00078890],
        l: [181.97909950, 58517.81538729], peri: [131.60246718, 0.00268329], node: [76.67984255, -0.27769418] },
    // Earth-Moon barycentre
    OrbitalElements { a: [1.00000261, 0.00000562], e: [0.01671123, -0.00004392], i: [-0.00001531, -0.01294668],
        l: [100.46457166, 35999.37244981], peri: [102.93768193, 0.32327364], node: [0.0, 0.0] },
    // Mars
    OrbitalElements { a: [1.52371034, 0.00001847], e: [0.09339410, 0.00007882], i: [1.84969142, -0.00813131],
        l: [-4.55343205, 19140.30268499], peri: [-23.94362959, 0.44441088], node: [49.55953891, -0.29257343] },
    // Jupiter
    OrbitalElements { a: [5.20288700, -0.00011607], e: [0.04838624, -0.00013253], i: [1.30439695, -0.00183714],
        l: [34.39644051, 3034.74612775], peri: [14.72847983, 0.21252668], node: [100.47390909, 0.20469106] },
    // Saturn
    OrbitalElements { a: [9.53667594, -0.00125060], e: [0.05386179, -0.00050991], i: [2.48599187, 0.00193609],
        l: [49.95424423, 1222.49362201], peri: [92.59887831, -0.41897216], node: [113.66242448, -0.28867794] },
    // Uranus
    OrbitalElements { a: [19.18916464, -0.00196176], e: [0.04725744, -0.00004397], i: [0.77263783, -0.00242939],
        l: [313.23810451, 428.48202785], peri: [170.95427630, 0.40805281], node: [74.01692503, 0.04240589] },
    // Neptune
    OrbitalElements { a: [30.06992276, 0.00026291], e: [0.00859048, 0.00005105], i: [1.77004347, 0.00035372],
        l: [-55.12002969, 218.45945325], peri: [44.96476227, -0.32241464], node: [131.78422574, -0.00508664] },
    // Pluto
    OrbitalElements { a: [39.48211675, -0.00031596], e: [0.24882730, 0.00005170], i: [17.14001206, 0.00004818],
        l: [238.92903833, 145.20780515], peri: [224.06891629, -0.04062942], node: [110.30393684, -0.01183482] },
];

pub fn julian_date(time: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD
        + time.timestamp() as f64 / 86_400.0
        + time.timestamp_subsec_nanos() as f64 / 86_400e9
}

pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = julian_centuries(jd);
    normalize_angle(
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0,
    )
}

/// Local hour angle in degrees for a target at `ra_deg`.
pub fn hour_angle(jd: f64, longitude: f64, ra_deg: f64) -> f64 {
    normalize_angle(greenwich_sidereal_time(jd) + longitude - ra_deg)
}

fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric ecliptic J2000 position in AU.
fn heliocentric(elements: &OrbitalElements, t: f64) -> [f64; 3] {
    let at = |pair: [f64; 2]| pair[0] + pair[1] * t;
    let a = at(elements.a);
    let e = at(elements.e);
    let incl = deg_to_rad(at(elements.i));
    let l = at(elements.l);
    let peri = at(elements.peri);
    let node_deg = at(elements.node);

    let mean_anomaly = deg_to_rad((l - peri + 180.0).rem_euclid(360.0) - 180.0);
    let arg_peri = deg_to_rad(peri - node_deg);
    let node = deg_to_rad(node_deg);

    let ecc = solve_kepler(mean_anomaly, e);
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();
    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

fn ecliptic_to_equatorial(v: [f64; 3]) -> EquatorialPosition {
    let (se, ce) = deg_to_rad(OBLIQUITY_J2000).sin_cos();
    let x = v[0];
    let y = v[1] * ce - v[2] * se;
    let z = v[1] * se + v[2] * ce;
    EquatorialPosition {
        ra: y.atan2(x).rem_euclid(std::f64::consts::TAU),
        dec: z.atan2((x * x + y * y).sqrt()),
    }
}

/// Geocentric ecliptic longitude, latitude and horizontal parallax of the
/// Moon, degrees, referred to the J2000 equinox.
pub fn moon_ecliptic(t: f64) -> (f64, f64, f64) {
    let s = |a: f64, b: f64| deg_to_rad(a + b * t).sin();
    let c = |a: f64, b: f64| deg_to_rad(a + b * t).cos();

    let lon = 218.32
        + 481_267.881 * t
        + 6.29 * s(135.0, 477_198.87)
        - 1.27 * s(259.3, -413_335.36)
        + 0.66 * s(235.7, 890_534.22)
        + 0.21 * s(269.9, 954_397.74)
        - 0.19 * s(357.5, 35_999.05)
        - 0.11 * s(186.5, 966_404.03);
    let lat = 5.13 * s(93.3, 483_202.02)
        + 0.28 * s(228.2, 960_400.89)
        - 0.28 * s(318.3, 6_003.15)
        - 0.17 * s(217.6, -407_332.21);
    let parallax = 0.9508
        + 0.0518 * c(135.0, 477_198.87)
        + 0.0095 * c(259.3, -413_335.36)
        + 0.0078 * c(235.7, 890_534.22)
        + 0.0028 * c(269.9, 954_397.74);

    (
        normalize_angle(lon - PRECESSION_PER_CENTURY * t),
        lat,
        parallax,
    )
}

/// Geocentric ecliptic J2000 vector of a planet, AU.
fn geocentric(elements: &OrbitalElements, t: f64) -> [f64; 3] {
    let earth = heliocentric(&ELEMENTS[EARTH_MOON_BARYCENTER], t);
    let p = heliocentric(elements, t);
    [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]]
}

/// Geocentric J2000 right ascension and declination.
pub fn equatorial_position(planet: Planet, jd: f64) -> EquatorialPosition {
    let t = julian_centuries(jd);
    let elements = match planet {
        Planet::Sun => {
            let earth = heliocentric(&ELEMENTS[EARTH_MOON_BARYCENTER], t);
            return ecliptic_to_equatorial([-earth[0], -earth[1], -earth[2]]);
        }
        Planet::Moon => {
            let (lon, lat, _) = moon_ecliptic(t);
            let (sl, cl) = deg_to_rad(lon).sin_cos();
            let (sb, cb) = deg_to_rad(lat).sin_cos();
            return ecliptic_to_equatorial([cb * cl, cb * sl, sb]);
        }
        Planet::Mercury => &ELEMENTS[0],
        Planet::Venus => &ELEMENTS[1],
        Planet::Mars => &ELEMENTS[3],
        Planet::Jupiter => &ELEMENTS[JUPITER],
        Planet::Saturn => &ELEMENTS[5],
        Planet::Uranus => &ELEMENTS[6],
        Planet::Neptune => &ELEMENTS[7],
        Planet::Pluto => &ELEMENTS[8],
    };
    ecliptic_to_equatorial(geocentric(elements, t))
}

/// Position angle of Jupiter's north pole, radians east of celestial north.
pub fn jupiter_pole_angle(jupiter: EquatorialPosition) -> f64 {
    let ra0 = deg_to_rad(JUPITER_POLE.0);
    let dec0 = deg_to_rad(JUPITER_POLE.1);
    let dra = ra0 - jupiter.ra;
    (dec0.cos() * dra.sin())
        .atan2(dec0.sin() * jupiter.dec.cos() - dec0.cos() * jupiter.dec.sin() * dra.cos())
}

/// Geocentric J2000 position of a Galilean satellite.
pub fn satellite_position(satellite: Satellite, jd: f64) -> EquatorialPosition {
    let v = geocentric(&ELEMENTS[JUPITER], julian_centuries(jd));
    let distance = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    let jupiter = ecliptic_to_equatorial(v);

    let (sp, cp) = jupiter_pole_angle(jupiter).sin_cos();
    let (x, y) = satellite.offset(jd);
    let east = -x * cp + y * sp;
    let north = x * sp + y * cp;
    let scale = JUPITER_RADIUS_KM / (distance * AU_KM);

    EquatorialPosition {
        ra: (jupiter.ra + east * scale / jupiter.dec.cos()).rem_euclid(std::f64::consts::TAU),
        dec: jupiter.dec + north * scale,
    }
}

enum Target {
    Planet(Planet),
    Satellite(Satellite),
    Fixed(EquatorialPosition),
}

fn resolve(body: &BodyDescriptor) -> Result<Target, EphemerisError> {
    match body {
        BodyDescriptor::Coordinates { ra, dec, .. } => Ok(Target::Fixed(EquatorialPosition {
            ra: *ra,
            dec: *dec,
        })),
        BodyDescriptor::Named(name) => {
            if let Some(planet) = Planet::from_name(name) {
                return Ok(Target::Planet(planet));
            }
            if let Some(satellite) = Satellite::from_name(name) {
                return Ok(Target::Satellite(satellite));
            }
            find_star(name)
                .map(|star| {
                    Target::Fixed(EquatorialPosition {
                        ra: deg_to_rad(star.ra_hours * DEGREES_PER_HOUR),
                        dec: deg_to_rad(star.dec_deg),
                    })
                })
                .ok_or_else(|| EphemerisError::UnknownBody(name.clone()))
        }
    }
}

/// The built-in [`PositionProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris;

impl PositionProvider for Ephemeris {
    fn position_of(
        &self,
        body: &BodyDescriptor,
        observer: &Observer,
        time: DateTime<Utc>,
    ) -> Result<HorizontalPosition, EphemerisError> {
        let jd = julian_date(&time);
        let (eq, parallax) = match resolve(body)? {
            Target::Planet(Planet::Moon) => {
                let (_, _, parallax) = moon_ecliptic(julian_centuries(jd));
                (equatorial_position(Planet::Moon, jd), parallax)
            }
            Target::Planet(planet) => (equatorial_position(planet, jd), 0.0),
            Target::Satellite(satellite) => (satellite_position(satellite, jd), 0.0),
            Target::Fixed(eq) => (eq, 0.0),
        };

        let ra_deg = rad_to_deg(eq.ra);
        let ha = hour_angle(jd, observer.longitude, ra_deg);
        let mut pos = horizontal_position(observer.latitude, rad_to_deg(eq.dec), ha);
        if parallax != 0.0 {
            // Topocentric correction: the Moon sits lower than seen from Earth's centre.
            pos.altitude -= (deg_to_rad(parallax).sin() * pos.altitude.cos()).asin();
        }

        if !(pos.azimuth.is_finite() && pos.altitude.is_finite()) {
            return Err(EphemerisError::NonFinite {
                body: body.to_string(),
                time: time.to_rfc3339(),
            });
        }
        Ok(pos)
    }

    fn validate(&self, body: &BodyDescriptor) -> Result<(), EphemerisError> {
        resolve(body).map(|_| ())
    }
}
