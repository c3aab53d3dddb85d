//! Galilean satellites of Jupiter, low-accuracy theory of Meeus,
//! *Astronomical Algorithms*, chapter 44.

use std::fmt;

use crate::angles::deg_to_rad;
use crate::ephemeris::J2000_JD;

/// Light-time, days per AU.
const LIGHT_DAYS_PER_AU: f64 = 1.0 / 173.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Satellite {
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl Satellite {
    pub const ALL: [Satellite; 4] = [
        Satellite::Io,
        Satellite::Europa,
        Satellite::Ganymede,
        Satellite::Callisto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Satellite::Io => "Io",
            Satellite::Europa => "Europa",
            Satellite::Ganymede => "Ganymede",
            Satellite::Callisto => "Callisto",
        }
    }

    pub fn from_name(name: &str) -> Option<Satellite> {
        Satellite::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    fn index(self) -> usize {
        match self {
            Satellite::Io => 0,
            Satellite::Europa => 1,
            Satellite::Ganymede => 2,
            Satellite::Callisto => 3,
        }
    }

    /// Apparent offset from the centre of Jupiter as `(X, Y)` in Jupiter
    /// equatorial radii. X grows to the west along the planet's equator,
    /// Y to the north.
    pub fn offset(self, jd: f64) -> (f64, f64) {
        galilean_offsets(jd)[self.index()]
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(X, Y)` of Io, Europa, Ganymede and Callisto, in that order.
pub fn galilean_offsets(jd: f64) -> [(f64, f64); 4] {
    let d = jd - J2000_JD;
    let sin = |deg: f64| deg_to_rad(deg).sin();
    let cos = |deg: f64| deg_to_rad(deg).cos();

    let v = 172.74 + 0.001_115_88 * d;
    let m = 357.529 + 0.985_600_3 * d;
    let n = 20.020 + 0.083_085_3 * d + 0.329 * sin(v);
    let j = 66.115 + 0.902_517_9 * d - 0.329 * sin(v);
    let a = 1.915 * sin(m) + 0.020 * sin(2.0 * m);
    let b = 5.555 * sin(n) + 0.168 * sin(2.0 * n);
    let k = j + a - b;

    let sun_distance = 1.000_14 - 0.016_71 * cos(m) - 0.000_14 * cos(2.0 * m);
    let jupiter_radius = 5.208_72 - 0.252_08 * cos(n) - 0.006_11 * cos(2.0 * n);
    let delta = (jupiter_radius * jupiter_radius + sun_distance * sun_distance
        - 2.0 * jupiter_radius * sun_distance * cos(k))
    .sqrt();
    let psi = (sun_distance / delta * sin(k)).asin().to_degrees();

    let t = d - delta * LIGHT_DAYS_PER_AU;
    let mut u = [
        163.8069 + 203.405_864_6 * t + psi - b,
        358.4140 + 101.291_633_5 * t + psi - b,
        5.7176 + 50.234_518_0 * t + psi - b,
        224.8092 + 21.487_980_0 * t + psi - b,
    ];
    let g = 331.18 + 50.310_482 * t;
    let h = 87.45 + 21.569_231 * t;

    let radius = [
        5.9057 - 0.0244 * cos(2.0 * (u[0] - u[1])),
        9.3966 - 0.0882 * cos(2.0 * (u[1] - u[2])),
        14.9883 - 0.0216 * cos(g),
        26.3627 - 0.1939 * cos(h),
    ];
    let corrections = [
        0.473 * sin(2.0 * (u[0] - u[1])),
        1.065 * sin(2.0 * (u[1] - u[2])),
        0.165 * sin(g),
        0.843 * sin(h),
    ];
    for (angle, correction) in u.iter_mut().zip(corrections) {
        *angle += correction;
    }

    let lambda = 34.35 + 0.083_091 * d + 0.329 * sin(v) + b;
    let ds = 3.12 * sin(lambda + 42.8);
    let de = ds
        - 2.22 * sin(psi) * cos(lambda + 22.0)
        - 1.30 * (jupiter_radius - delta) / delta * sin(lambda - 100.5);

    let mut out = [(0.0, 0.0); 4];
    for (slot, (angle, r)) in out.iter_mut().zip(u.iter().zip(radius)) {
        *slot = (r * sin(*angle), -r * cos(*angle) * sin(de));
    }
    out
}
