//! Perturbations of the Sun's geocentric orbit (Newcomb), arguments in radians.
//!
//! Amplitudes of the anomaly tables are in arcseconds of mean anomaly, longitude and latitude
//! tables in arcseconds, radius tables in units of the decimal logarithm of the radius vector.

use crate::series::{term, SeriesTerm};

/// Long-period corrections to the mean anomaly, cosine terms in (Mars, Earth, Venus, Jupiter).
pub(crate) const ANOMALY_COS: [SeriesTerm<4>; 3] = [
    term(-0.265, 0.0, [4, -7, 3, 0]),
    term(3.760, 0.0, [-8, 4, 0, 3]),
    term(0.200, 0.0, [15, -8, 0, 0]),
];

/// Long-period corrections to the mean anomaly, sine terms in (Mars, Earth, Venus, Jupiter, secular).
pub(crate) const ANOMALY_SIN: [SeriesTerm<5>; 4] = [
    term(-0.021, 0.0, [4, -7, 3, 0, 0]),
    term(5.180, 0.0, [-8, 4, 0, 3, 0]),
    term(1.882, 3.8991, [0, 13, -8, 0, 1]),
    term(-0.030, 0.0, [15, -8, 0, 0, 0]),
];

/// Planetary perturbations in longitude, arguments (Mars, Earth, Venus, Jupiter, Saturn).
pub(crate) const LONGITUDE_PLANETARY: [SeriesTerm<5>; 65] = [
    term(0.075, 5.1766, [0, 0, 1, 0, 0]),
    term(4.838, 5.2203, [0, -1, 1, 0, 0]),
    term(0.074, 3.6285, [0, -2, 1, 0, 0]),
    term(0.116, 2.5988, [0, -1, 2, 0, 0]),
    term(5.526, 2.5885, [0, -2, 2, 0, 0]),
    term(2.497, 5.5143, [0, -3, 2, 0, 0]),
    term(0.044, 5.4350, [0, -4, 2, 0, 0]),
    term(0.666, 3.1016, [0, -3, 3, 0, 0]),
    term(1.559, 6.0258, [0, -4, 3, 0, 0]),
    term(1.024, 5.5527, [0, -5, 3, 0, 0]),
    term(0.210, 3.5989, [0, -4, 4, 0, 0]),
    term(0.144, 3.4104, [0, -5, 4, 0, 0]),
    term(0.152, 6.0004, [0, -6, 4, 0, 0]),
    term(0.084, 4.1120, [0, -5, 5, 0, 0]),
    term(0.037, 3.8711, [0, -6, 5, 0, 0]),
    term(0.123, 3.4086, [0, -7, 5, 0, 0]),
    term(0.154, 6.2762, [0, -8, 5, 0, 0]),
    term(0.038, 4.6094, [0, -6, 6, 0, 0]),
    term(0.020, 5.1313, [0, -7, 7, 0, 0]),
    term(0.042, 4.5239, [0, -12, 8, 0, 0]),
    term(0.032, 0.8517, [0, -14, 8, 0, 0]),
    term(0.273, 3.7996, [-1, 1, 0, 0, 0]),
    term(0.048, 4.5431, [-1, 0, 0, 0, 0]),
    term(0.041, 6.0388, [-2, 3, 0, 0, 0]),
    term(2.043, 6.0020, [-2, 2, 0, 0, 0]),
    term(1.770, 3.4977, [-2, 1, 0, 0, 0]),
    term(0.028, 2.5831, [-2, 0, 0, 0, 0]),
    term(0.129, 5.1348, [-3, 3, 0, 0, 0]),
    term(0.425, 5.9146, [-3, 2, 0, 0, 0]),
    term(0.034, 1.2391, [-4, 4, 0, 0, 0]),
    term(0.500, 1.8357, [-4, 3, 0, 0, 0]),
    term(0.585, 5.8304, [-4, 2, 0, 0, 0]),
    term(0.085, 0.9529, [-5, 4, 0, 0, 0]),
    term(0.204, 1.7593, [-5, 3, 0, 0, 0]),
    term(0.020, 3.2463, [-6, 5, 0, 0, 0]),
    term(0.154, 3.9689, [-6, 4, 0, 0, 0]),
    term(0.101, 1.6808, [-6, 3, 0, 0, 0]),
    term(0.049, 3.0805, [-7, 5, 0, 0, 0]),
    term(0.106, 3.8868, [-7, 4, 0, 0, 0]),
    term(0.052, 6.0895, [-8, 5, 0, 0, 0]),
    term(0.021, 3.7559, [-8, 4, 0, 0, 0]),
    term(0.028, 5.2011, [-9, 6, 0, 0, 0]),
    term(0.062, 6.0388, [-9, 5, 0, 0, 0]),
    term(0.044, 1.8483, [-11, 6, 0, 0, 0]),
    term(0.045, 3.9759, [-13, 7, 0, 0, 0]),
    term(0.021, 5.3931, [-15, 9, 0, 0, 0]),
    term(0.026, 1.9722, [-17, 9, 0, 0, 0]),
    term(0.163, 3.4662, [0, 2, 0, -1, 0]),
    term(7.208, 3.1334, [0, 1, 0, -1, 0]),
    term(2.600, 4.5940, [0, 0, 0, -1, 0]),
    term(0.073, 4.8223, [0, -1, 0, -1, 0]),
    term(0.069, 1.4102, [0, 3, 0, -2, 0]),
    term(2.731, 1.5210, [0, 2, 0, -2, 0]),
    term(1.610, 1.9110, [0, 1, 0, -2, 0]),
    term(0.073, 4.4087, [0, 0, 0, -2, 0]),
    term(0.164, 2.9758, [0, 3, 0, -3, 0]),
    term(0.556, 1.4425, [0, 2, 0, -3, 0]),
    term(0.210, 1.7261, [0, 1, 0, -3, 0]),
    term(0.044, 2.9356, [0, 3, 0, -4, 0]),
    term(0.080, 1.3561, [0, 2, 0, -4, 0]),
    term(0.419, 1.7555, [0, 1, 0, 0, -1]),
    term(0.320, 4.7030, [0, 0, 0, 0, -1]),
    term(0.108, 5.0719, [0, 2, 0, 0, -2]),
    term(0.112, 5.1243, [0, 1, 0, 0, -2]),
    term(0.021, 5.0440, [0, 2, 0, 0, -3]),
];

/// Lunar perturbations in longitude, arguments (D, M_moon, M_earth).
pub(crate) const LONGITUDE_LUNAR: [SeriesTerm<3>; 6] = [
    term(6.454, 0.0, [1, 0, 0]),
    term(0.177, 0.0, [1, 1, 0]),
    term(-0.424, 0.0, [1, -1, 0]),
    term(0.039, 0.0, [3, -1, 0]),
    term(-0.064, 0.0, [1, 0, 1]),
    term(0.172, 0.0, [1, 0, -1]),
];

/// Planetary perturbations in latitude, arguments (Earth, Venus, Jupiter).
pub(crate) const LATITUDE_PLANETARY: [SeriesTerm<3>; 4] = [
    term(-0.092, 1.6354, [-2, 1, 0]),
    term(-0.067, 2.1468, [-3, 2, 0]),
    term(-0.210, 2.6494, [-4, 2, 0]),
    term(-0.166, 4.6338, [1, 0, -2]),
];

/// Lunar perturbations in latitude, arguments (F, M_moon, D).
pub(crate) const LATITUDE_LUNAR: [SeriesTerm<3>; 3] = [
    term(0.576, 0.0, [1, 0, 0]),
    term(-0.047, 0.0, [1, -1, 0]),
    term(0.021, 0.0, [-1, 0, 2]),
];

/// Planetary perturbations in log radius, arguments (Mars, Earth, Venus, Jupiter, Saturn).
pub(crate) const RADIUS_PLANETARY: [SeriesTerm<5>; 17] = [
    term(2.359e-6, 3.6607, [0, -1, 1, 0, 0]),
    term(6.842e-6, 1.0180, [0, -2, 2, 0, 0]),
    term(0.869e-6, 3.9567, [0, -3, 2, 0, 0]),
    term(1.045e-6, 1.5332, [0, -3, 3, 0, 0]),
    term(1.497e-6, 4.4691, [0, -4, 3, 0, 0]),
    term(0.376e-6, 2.0295, [0, -4, 4, 0, 0]),
    term(2.057e-6, 4.0941, [-2, 2, 0, 0, 0]),
    term(0.215e-6, 4.3459, [-3, 2, 0, 0, 0]),
    term(0.478e-6, 0.2648, [-4, 3, 0, 0, 0]),
    term(0.208e-6, 1.9548, [0, 2, 0, -1, 0]),
    term(7.067e-6, 1.5630, [0, 1, 0, -1, 0]),
    term(0.244e-6, 5.9097, [0, 0, 0, -1, 0]),
    term(4.026e-6, 6.2526, [0, 2, 0, -2, 0]),
    term(1.459e-6, 0.3409, [0, 1, 0, -2, 0]),
    term(0.281e-6, 1.4172, [0, 3, 0, -3, 0]),
    term(0.803e-6, 6.1533, [0, 2, 0, -3, 0]),
    term(0.429e-6, 0.1850, [0, 1, 0, 0, -1]),
];

/// Lunar perturbations in log radius, arguments (D, M_moon, M_earth).
pub(crate) const RADIUS_LUNAR: [SeriesTerm<3>; 4] = [
    term(13.36e-6, 0.0, [1, 0, 0]),
    term(-1.33e-6, 0.0, [1, -1, 0]),
    term(0.37e-6, 0.0, [1, 1, 0]),
    term(0.36e-6, 0.0, [1, 0, -1]),
];
