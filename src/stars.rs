//! Named bright stars, J2000 positions.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub name: &'static str,
    pub ra_hours: f64,
    pub dec_deg: f64,
}

#[rustfmt::skip]
pub const STARS: [Star; 85] = [
    Star { name: "Acamar",          ra_hours:  2.971022, dec_deg: -40.30472 },
    Star { name: "Achernar",        ra_hours:  1.628556, dec_deg: -57.23667 },
    Star { name: "Acrux",           ra_hours: 12.443306, dec_deg: -63.09917 },
    Star { name: "Adhara",          ra_hours:  6.977097, dec_deg: -28.97208 },
    Star { name: "Albireo",         ra_hours: 19.512022, dec_deg:  27.95967 },
    Star { name: "Alcyone",         ra_hours:  3.791411, dec_deg:  24.10514 },
    Star { name: "Aldebaran",       ra_hours:  4.598667, dec_deg:  16.50917 },
    Star { name: "Alderamin",       ra_hours: 21.309658, dec_deg:  62.58558 },
    Star { name: "Algenib",         ra_hours:  0.220597, dec_deg:  15.18358 },
    Star { name: "Algieba",         ra_hours: 10.332875, dec_deg:  19.84150 },
    Star { name: "Algol",           ra_hours:  3.136147, dec_deg:  40.95564 },
    Star { name: "Alhena",          ra_hours:  6.628531, dec_deg:  16.39928 },
    Star { name: "Alioth",          ra_hours: 12.900486, dec_deg:  55.95983 },
    Star { name: "Alkaid",          ra_hours: 13.792333, dec_deg:  49.31333 },
    Star { name: "Almach",          ra_hours:  2.064986, dec_deg:  42.32972 },
    Star { name: "Alnair",          ra_hours: 22.137217, dec_deg: -46.96097 },
    Star { name: "Alnilam",         ra_hours:  5.603556, dec_deg:  -1.20194 },
    Star { name: "Alnitak",         ra_hours:  5.679314, dec_deg:  -1.94258 },
    Star { name: "Alphard",         ra_hours:  9.459789, dec_deg:  -8.65861 },
    Star { name: "Alphecca",        ra_hours: 15.578139, dec_deg:  26.71472 },
    Star { name: "Alpheratz",       ra_hours:  0.139794, dec_deg:  29.09044 },
    Star { name: "Altair",          ra_hours: 19.846389, dec_deg:   8.86833 },
    Star { name: "Ankaa",           ra_hours:  0.438069, dec_deg: -42.30606 },
    Star { name: "Antares",         ra_hours: 16.490111, dec_deg: -26.43194 },
    Star { name: "Arcturus",        ra_hours: 14.261028, dec_deg:  19.18250 },
    Star { name: "Atria",           ra_hours: 16.811083, dec_deg: -69.02772 },
    Star { name: "Avior",           ra_hours:  8.375233, dec_deg: -59.50947 },
    Star { name: "Bellatrix",       ra_hours:  5.418861, dec_deg:   6.34972 },
    Star { name: "Betelgeuse",      ra_hours:  5.919528, dec_deg:   7.40694 },
    Star { name: "Canopus",         ra_hours:  6.399194, dec_deg: -52.69556 },
    Star { name: "Capella",         ra_hours:  5.278167, dec_deg:  45.99806 },
    Star { name: "Castor",          ra_hours:  7.576667, dec_deg:  31.88833 },
    Star { name: "Deneb",           ra_hours: 20.690528, dec_deg:  45.28028 },
    Star { name: "Denebola",        ra_hours: 11.817661, dec_deg:  14.57206 },
    Star { name: "Diphda",          ra_hours:  0.726492, dec_deg: -17.98661 },
    Star { name: "Dubhe",           ra_hours: 11.062139, dec_deg:  61.75083 },
    Star { name: "Elnath",          ra_hours:  5.438194, dec_deg:  28.60750 },
    Star { name: "Eltanin",         ra_hours: 17.943436, dec_deg:  51.48889 },
    Star { name: "Enif",            ra_hours: 21.736433, dec_deg:   9.87500 },
    Star { name: "Fomalhaut",       ra_hours: 22.960833, dec_deg: -29.62222 },
    Star { name: "Gacrux",          ra_hours: 12.519433, dec_deg: -57.11322 },
    Star { name: "Hadar",           ra_hours: 14.063722, dec_deg: -60.37306 },
    Star { name: "Hamal",           ra_hours:  2.119558, dec_deg:  23.46242 },
    Star { name: "Izar",            ra_hours: 14.749783, dec_deg:  27.07422 },
    Star { name: "Kaus Australis",  ra_hours: 18.402867, dec_deg: -34.38461 },
    Star { name: "Kochab",          ra_hours: 14.845092, dec_deg:  74.15550 },
    Star { name: "Markab",          ra_hours: 23.079347, dec_deg:  15.20536 },
    Star { name: "Megrez",          ra_hours: 12.257100, dec_deg:  57.03261 },
    Star { name: "Menkalinan",      ra_hours:  5.992144, dec_deg:  44.94744 },
    Star { name: "Menkar",          ra_hours:  3.037992, dec_deg:   4.08975 },
    Star { name: "Merak",           ra_hours: 11.030689, dec_deg:  56.38242 },
    Star { name: "Miaplacidus",     ra_hours:  9.219994, dec_deg: -69.71719 },
    Star { name: "Mimosa",          ra_hours: 12.795361, dec_deg: -59.68861 },
    Star { name: "Mintaka",         ra_hours:  5.533444, dec_deg:  -0.29908 },
    Star { name: "Mirach",          ra_hours:  1.162200, dec_deg:  35.62056 },
    Star { name: "Mirfak",          ra_hours:  3.405381, dec_deg:  49.86117 },
    Star { name: "Mizar",           ra_hours: 13.398761, dec_deg:  54.92536 },
    Star { name: "Muphrid",         ra_hours: 13.911411, dec_deg:  18.39772 },
    Star { name: "Nunki",           ra_hours: 18.921092, dec_deg: -26.29672 },
    Star { name: "Peacock",         ra_hours: 20.427461, dec_deg: -56.73508 },
    Star { name: "Phecda",          ra_hours: 11.897181, dec_deg:  53.69475 },
    Star { name: "Polaris",         ra_hours:  2.530306, dec_deg:  89.26417 },
    Star { name: "Pollux",          ra_hours:  7.755250, dec_deg:  28.02611 },
    Star { name: "Procyon",         ra_hours:  7.655028, dec_deg:   5.22500 },
    Star { name: "Rasalhague",      ra_hours: 17.582250, dec_deg:  12.56000 },
    Star { name: "Regulus",         ra_hours: 10.139528, dec_deg:  11.96722 },
    Star { name: "Rigel",           ra_hours:  5.242306, dec_deg:  -8.20167 },
    Star { name: "Rigil Kentaurus", ra_hours: 14.660136, dec_deg: -60.83397 },
    Star { name: "Sabik",           ra_hours: 17.172969, dec_deg: -15.72492 },
    Star { name: "Sadr",            ra_hours: 20.370472, dec_deg:  40.25667 },
    Star { name: "Saiph",           ra_hours:  5.795942, dec_deg:  -9.66961 },
    Star { name: "Scheat",          ra_hours: 23.062906, dec_deg:  28.08278 },
    Star { name: "Schedar",         ra_hours:  0.675122, dec_deg:  56.53733 },
    Star { name: "Shaula",          ra_hours: 17.560139, dec_deg: -37.10389 },
    Star { name: "Sheratan",        ra_hours:  1.910669, dec_deg:  20.80803 },
    Star { name: "Sirius",          ra_hours:  6.752472, dec_deg: -16.71611 },
    Star { name: "Spica",           ra_hours: 13.419889, dec_deg: -11.16139 },
    Star { name: "Tarazed",         ra_hours: 19.770994, dec_deg:  10.61325 },
    Star { name: "Thuban",          ra_hours: 14.073153, dec_deg:  64.37586 },
    Star { name: "Unukalhai",       ra_hours: 15.737797, dec_deg:   6.42564 },
    Star { name: "Vega",            ra_hours: 18.615639, dec_deg:  38.78361 },
    Star { name: "Vindemiatrix",    ra_hours: 13.036278, dec_deg:  10.95914 },
    Star { name: "Wezen",           ra_hours:  7.139856, dec_deg: -26.39319 },
    Star { name: "Zosma",           ra_hours: 11.235139, dec_deg:  20.52372 },
    Star { name: "Zubenelgenubi",   ra_hours: 14.847975, dec_deg: -16.04178 },
];

pub fn find_star(name: &str) -> Option<&'static Star> {
    STARS.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}
