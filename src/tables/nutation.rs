//! Nutation series (Explanatory Supplement, pp. 44-45), amplitudes in arcseconds.

use crate::series::{term, SeriesTerm};

/// Long-period nutation in longitude, arguments (Ω, 2F, 2D, l').
pub(crate) const LONGITUDE: [SeriesTerm<4>; 6] = [
    term(0.2088, 0.0, [2, 0, 0, 0]),
    term(-1.2730, 0.0, [2, 2, -2, 0]),
    term(0.1258, 0.0, [0, 0, 0, 1]),
    term(-0.0496, 0.0, [2, 2, -2, 1]),
    term(0.0214, 0.0, [2, 2, -2, -1]),
    term(0.0124, 0.0, [1, 2, -2, 0]),
];

/// Long-period nutation in obliquity, arguments (Ω, 2F, 2D, l').
pub(crate) const OBLIQUITY: [SeriesTerm<4>; 6] = [
    term(9.2109, 0.0, [1, 0, 0, 0]),
    term(-0.0904, 0.0, [2, 0, 0, 0]),
    term(0.5519, 0.0, [2, 2, -2, 0]),
    term(0.0215, 0.0, [2, 2, -2, 1]),
    term(-0.0093, 0.0, [2, 2, -2, -1]),
    term(-0.0066, 0.0, [1, 2, -2, 0]),
];

/// Short-period nutation in longitude, arguments (Ω, F, l, D).
pub(crate) const LONGITUDE_SHORT: [SeriesTerm<4>; 10] = [
    term(-0.2037, 0.0, [2, 2, 0, 0]),
    term(0.0675, 0.0, [0, 0, 1, 0]),
    term(-0.0342, 0.0, [1, 2, 0, 0]),
    term(-0.0261, 0.0, [2, 2, 1, 0]),
    term(-0.0149, 0.0, [0, 0, 1, -2]),
    term(0.0114, 0.0, [2, 2, -1, 0]),
    term(0.0060, 0.0, [0, 0, 0, 2]),
    term(0.0058, 0.0, [1, 0, 1, 0]),
    term(-0.0057, 0.0, [1, 0, -1, 0]),
    term(-0.0052, 0.0, [2, 2, -1, 2]),
];

/// Short-period nutation in obliquity, arguments (Ω, F, l).
pub(crate) const OBLIQUITY_SHORT: [SeriesTerm<3>; 4] = [
    term(0.0884, 0.0, [2, 2, 0]),
    term(0.0183, 0.0, [1, 2, 0]),
    term(0.0113, 0.0, [2, 2, 1]),
    term(-0.0050, 0.0, [2, 2, -1]),
];
