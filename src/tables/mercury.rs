//! Perturbations of Mercury by Venus, the Earth, Jupiter and Saturn.
//!
//! Longitude amplitudes are in arcseconds, radius amplitudes in decimal log-radius units.

use crate::series::{term, SeriesTerm};

/// Longitude perturbations by Venus, arguments (Mercury, -Venus).
pub(crate) const LONGITUDE_VENUS: [SeriesTerm<2>; 55] = [
    term(0.013, 0.6807, [4, 1]),
    term(0.048, 0.6283, [3, 1]),
    term(0.185, 0.6231, [2, 1]),
    term(0.711, 0.6191, [1, 1]),
    term(0.285, 0.5784, [0, 1]),
    term(0.075, 0.5411, [-1, 1]),
    term(0.019, 0.5585, [-2, 1]),
    term(0.010, 2.8449, [6, 2]),
    term(0.039, 2.8117, [5, 2]),
    term(0.147, 2.8135, [4, 2]),
    term(0.552, 2.8126, [3, 2]),
    term(2.100, 2.8126, [2, 2]),
    term(3.724, 2.8046, [1, 2]),
    term(0.729, 2.7883, [0, 2]),
    term(0.186, 2.7890, [-1, 2]),
    term(0.049, 2.7943, [-2, 2]),
    term(0.013, 2.7402, [-3, 2]),
    term(0.033, 1.8361, [5, 3]),
    term(0.118, 1.8396, [4, 3]),
    term(0.431, 1.8391, [3, 3]),
    term(1.329, 1.8288, [2, 3]),
    term(0.539, 4.8686, [1, 3]),
    term(0.111, 4.8904, [0, 3]),
    term(0.027, 4.8956, [-1, 3]),
    term(0.012, 3.9794, [5, 4]),
    term(0.056, 3.9636, [4, 4]),
    term(0.294, 3.9910, [3, 4]),
    term(0.484, 3.9514, [2, 4]),
    term(0.070, 3.9270, [1, 4]),
    term(0.018, 3.9270, [0, 4]),
    term(0.013, 6.1261, [7, 5]),
    term(0.050, 6.1052, [6, 5]),
    term(0.185, 6.1069, [5, 5]),
    term(0.685, 6.1011, [4, 5]),
    term(2.810, 6.1062, [3, 5]),
    term(7.356, 6.0699, [2, 5]),
    term(1.471, 6.0685, [1, 5]),
    term(0.375, 6.0687, [0, 5]),
    term(0.098, 6.0720, [-1, 5]),
    term(0.026, 6.0476, [-2, 5]),
    term(0.062, 5.1540, [4, 6]),
    term(0.122, 5.1191, [3, 6]),
    term(0.011, 0.9076, [5, 7]),
    term(0.074, 1.0123, [4, 7]),
    term(0.106, 0.9372, [3, 7]),
    term(0.017, 0.9425, [2, 7]),
    term(0.020, 0.0506, [5, 8]),
    term(0.052, 0.0384, [4, 8]),
    term(0.052, 3.0281, [3, 8]),
    term(0.012, 3.0543, [2, 8]),
    term(0.011, 2.1642, [5, 9]),
    term(0.016, 2.2340, [4, 9]),
    term(0.040, 4.3912, [5, 10]),
    term(0.080, 4.4262, [4, 10]),
    term(0.016, 4.4506, [3, 10]),
];

/// Longitude perturbations by the Earth, arguments (Mercury, -Earth).
pub(crate) const LONGITUDE_EARTH: [SeriesTerm<2>; 22] = [
    term(0.014, 1.0996, [3, 1]),
    term(0.056, 1.1153, [2, 1]),
    term(0.219, 1.1160, [1, 1]),
    term(0.083, 1.0734, [0, 1]),
    term(0.024, 0.9442, [-1, 1]),
    term(0.018, 3.8432, [4, 2]),
    term(0.070, 3.8293, [3, 2]),
    term(0.256, 3.8230, [2, 2]),
    term(0.443, 3.8132, [1, 2]),
    term(0.080, 3.7647, [0, 2]),
    term(0.020, 3.7734, [-1, 2]),
    term(0.019, 0.0000, [3, 3]),
    term(0.133, 0.1134, [2, 3]),
    term(0.129, 6.2588, [1, 3]),
    term(0.026, 6.2413, [0, 3]),
    term(0.026, 2.6599, [4, 4]),
    term(0.087, 2.6232, [3, 4]),
    term(0.374, 2.6496, [2, 4]),
    term(0.808, 2.5470, [1, 4]),
    term(0.129, 2.5587, [0, 4]),
    term(0.019, 2.5534, [-1, 4]),
    term(0.012, 2.1642, [2, 5]),
];

/// Longitude perturbations by Jupiter, arguments (Mercury, -Jupiter).
pub(crate) const LONGITUDE_JUPITER: [SeriesTerm<2>; 22] = [
    term(0.014, 3.1416, [4, 1]),
    term(0.047, 3.1625, [3, 1]),
    term(0.179, 3.1695, [2, 1]),
    term(0.697, 3.1603, [1, 1]),
    term(0.574, 4.1315, [0, 1]),
    term(0.181, 4.2537, [-1, 1]),
    term(0.047, 4.2481, [-2, 1]),
    term(0.013, 4.2062, [-3, 1]),
    term(0.018, 0.6650, [5, 2]),
    term(0.069, 0.6405, [4, 2]),
    term(0.253, 0.6449, [3, 2]),
    term(0.938, 0.6454, [2, 2]),
    term(3.275, 0.6458, [1, 2]),
    term(0.499, 0.5569, [0, 2]),
    term(0.119, 0.5271, [-1, 2]),
    term(0.032, 0.5184, [-2, 2]),
    term(0.030, 0.4939, [3, 3]),
    term(0.106, 0.4171, [2, 3]),
    term(0.353, 0.4510, [1, 3]),
    term(0.056, 0.3840, [0, 3]),
    term(0.013, 0.3142, [-1, 3]),
    term(0.028, 0.2531, [1, 4]),
];

/// Longitude perturbations by Saturn, arguments (Mercury, -Saturn).
pub(crate) const LONGITUDE_SATURN: [SeriesTerm<2>; 10] = [
    term(0.034, 0.9512, [1, 1]),
    term(0.060, 4.7962, [0, 1]),
    term(0.028, 4.7124, [-1, 1]),
    term(0.028, 4.1836, [3, 2]),
    term(0.102, 4.1871, [2, 2]),
    term(0.380, 4.1864, [1, 2]),
    term(0.059, 4.1818, [0, 2]),
    term(0.015, 4.2185, [-1, 2]),
    term(0.012, 4.1713, [2, 3]),
    term(0.050, 4.1870, [1, 3]),
];

/// Log radius perturbations by Venus.
pub(crate) const RADIUS_VENUS: [SeriesTerm<2>; 26] = [
    term(0.218e-6, 5.3369, [2, 1]),
    term(0.491e-6, 5.3281, [1, 1]),
    term(0.172e-6, 2.1642, [0, 1]),
    term(0.091e-6, 2.1084, [-1, 1]),
    term(0.204e-6, 1.2460, [4, 2]),
    term(0.712e-6, 1.2413, [3, 2]),
    term(2.370e-6, 1.2425, [2, 2]),
    term(0.899e-6, 1.2303, [1, 2]),
    term(0.763e-6, 4.3633, [0, 2]),
    term(0.236e-6, 4.3590, [-1, 2]),
    term(0.163e-6, 0.2705, [4, 3]),
    term(0.541e-6, 0.2710, [3, 3]),
    term(1.157e-6, 0.2590, [2, 3]),
    term(0.099e-6, 0.1798, [0, 3]),
    term(0.360e-6, 2.4237, [3, 4]),
    term(0.234e-6, 2.3740, [2, 4]),
    term(0.253e-6, 4.5365, [5, 5]),
    term(0.849e-6, 4.5293, [4, 5]),
    term(2.954e-6, 4.5364, [3, 5]),
    term(0.282e-6, 4.4581, [2, 5]),
    term(1.550e-6, 1.3570, [1, 5]),
    term(0.472e-6, 1.3561, [0, 5]),
    term(0.135e-6, 1.3579, [-1, 5]),
    term(0.081e-6, 3.5936, [4, 6]),
    term(0.087e-6, 3.5500, [3, 6]),
    term(0.087e-6, 5.7334, [4, 7]),
];

/// Log radius perturbations by the Earth.
pub(crate) const RADIUS_EARTH: [SeriesTerm<2>; 8] = [
    term(0.181e-6, 5.8275, [1, 1]),
    term(0.095e-6, 2.2427, [3, 2]),
    term(0.319e-6, 2.2534, [2, 2]),
    term(0.256e-6, 2.2403, [1, 2]),
    term(0.157e-6, 4.8292, [2, 3]),
    term(0.106e-6, 1.0332, [3, 4]),
    term(0.397e-6, 1.0756, [2, 4]),
    term(0.143e-6, 4.0980, [0, 4]),
];

/// Log radius perturbations by Jupiter.
pub(crate) const RADIUS_JUPITER: [SeriesTerm<2>; 11] = [
    term(0.222e-6, 1.6024, [2, 1]),
    term(0.708e-6, 1.5949, [1, 1]),
    term(0.191e-6, 5.7914, [-1, 1]),
    term(0.100e-6, 5.3564, [4, 2]),
    term(0.347e-6, 5.3548, [3, 2]),
    term(1.185e-6, 5.3576, [2, 2]),
    term(3.268e-6, 5.3579, [1, 2]),
    term(0.371e-6, 2.2148, [0, 2]),
    term(0.160e-6, 2.1241, [-1, 2]),
    term(0.134e-6, 5.1260, [2, 3]),
    term(0.347e-6, 5.1620, [1, 3]),
];
