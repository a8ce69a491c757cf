//! Brown's lunar theory, solar and planetary terms.
//!
//! Each solar term multiplies the four principal arguments (l, l', F, D) of the Moon, in that
//! order; amplitudes are in arcseconds. Planetary terms add a combination of the mean
//! longitudes of the Earth (t0), Venus (v0), Jupiter (j0) and Mars (m0), the lunar node, and a
//! constant phase in degrees.

/// Solar term: amplitude and multipliers of (l, l', F, D).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonTerm {
    pub coefficient: f64,
    pub multipliers: [i32; 4],
}

/// Planetary term of the lunar longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPlanetaryTerm {
    pub coefficient: f64,
    /// Multipliers of (l, l', F, D)
    pub multipliers: [i32; 4],
    /// Multipliers of (t0, v0, j0, m0, node)
    pub planets: [i32; 5],
    /// Constant phase in degrees
    pub phase: f64,
}

const fn moon_term(coefficient: f64, multipliers: [i32; 4]) -> MoonTerm {
    MoonTerm {
        coefficient,
        multipliers,
    }
}

const fn planetary(
    coefficient: f64,
    multipliers: [i32; 4],
    planets: [i32; 5],
    phase: f64,
) -> MoonPlanetaryTerm {
    MoonPlanetaryTerm {
        coefficient,
        multipliers,
        planets,
        phase,
    }
}

/// Solar terms in longitude (sine), arcseconds.
pub(crate) const LONGITUDE: [MoonTerm; 131] = [
    moon_term(0.127, [0, 0, 0, 6]),
    moon_term(13.902, [0, 0, 0, 4]),
    moon_term(2369.912, [0, 0, 0, 2]),
    moon_term(1.979, [1, 0, 0, 4]),
    moon_term(191.953, [1, 0, 0, 2]),
    moon_term(22639.500, [1, 0, 0, 0]),
    moon_term(-4586.465, [1, 0, 0, -2]),
    moon_term(-38.428, [1, 0, 0, -4]),
    moon_term(-0.393, [1, 0, 0, -6]),
    moon_term(-0.289, [0, 1, 0, 4]),
    moon_term(-24.420, [0, 1, 0, 2]),
    moon_term(-668.146, [0, 1, 0, 0]),
    moon_term(-165.145, [0, 1, 0, -2]),
    moon_term(-1.877, [0, 1, 0, -4]),
    moon_term(0.403, [0, 0, 0, 3]),
    moon_term(-125.154, [0, 0, 0, 1]),
    moon_term(0.213, [2, 0, 0, 4]),
    moon_term(14.387, [2, 0, 0, 2]),
    moon_term(769.016, [2, 0, 0, 0]),
    moon_term(-211.656, [2, 0, 0, -2]),
    moon_term(-30.773, [2, 0, 0, -4]),
    moon_term(-0.570, [2, 0, 0, -6]),
    moon_term(-2.921, [1, 1, 0, 2]),
    moon_term(-109.673, [1, 1, 0, 0]),
    moon_term(-205.962, [1, 1, 0, -2]),
    moon_term(-4.391, [1, 1, 0, -4]),
    moon_term(-0.072, [1, 1, 0, -6]),
    moon_term(0.283, [1, -1, 0, 4]),
    moon_term(14.577, [1, -1, 0, 2]),
    moon_term(147.687, [1, -1, 0, 0]),
    moon_term(28.475, [1, -1, 0, -2]),
    moon_term(0.636, [1, -1, 0, -4]),
    moon_term(-0.189, [0, 2, 0, 2]),
    moon_term(-7.486, [0, 2, 0, 0]),
    moon_term(-8.096, [0, 2, 0, -2]),
    moon_term(-0.151, [0, 2, 0, -4]),
    moon_term(-0.085, [0, 0, 2, 4]),
    moon_term(-5.741, [0, 0, 2, 2]),
    moon_term(-411.608, [0, 0, 2, 0]),
    moon_term(-55.173, [0, 0, 2, -2]),
    moon_term(-8.466, [1, 0, 0, 1]),
    moon_term(18.609, [1, 0, 0, -1]),
    moon_term(3.215, [1, 0, 0, -3]),
    moon_term(0.150, [0, 1, 0, 3]),
    moon_term(18.023, [0, 1, 0, 1]),
    moon_term(0.560, [0, 1, 0, -1]),
    moon_term(1.060, [3, 0, 0, 2]),
    moon_term(36.124, [3, 0, 0, 0]),
    moon_term(-13.193, [3, 0, 0, -2]),
    moon_term(-1.187, [3, 0, 0, -4]),
    moon_term(-0.293, [3, 0, 0, -6]),
    moon_term(-0.290, [2, 1, 0, 2]),
    moon_term(-7.649, [2, 1, 0, 0]),
    moon_term(-8.627, [2, 1, 0, -2]),
    moon_term(-2.740, [2, 1, 0, -4]),
    moon_term(-0.091, [2, 1, 0, -6]),
    moon_term(1.181, [2, -1, 0, 2]),
    moon_term(9.703, [2, -1, 0, 0]),
    moon_term(-2.494, [2, -1, 0, -2]),
    moon_term(0.360, [2, -1, 0, -4]),
    moon_term(-1.167, [1, 2, 0, 0]),
    moon_term(-7.412, [1, 2, 0, -2]),
    moon_term(-0.311, [1, 2, 0, -4]),
    moon_term(0.757, [1, -2, 0, 2]),
    moon_term(2.580, [1, -2, 0, 0]),
    moon_term(2.533, [1, -2, 0, -2]),
    moon_term(-0.103, [0, 3, 0, 0]),
    moon_term(-0.344, [0, 3, 0, -2]),
    moon_term(-0.992, [1, 0, 2, 2]),
    moon_term(-45.099, [1, 0, 2, 0]),
    moon_term(-0.179, [1, 0, 2, -2]),
    moon_term(-0.301, [1, 0, 2, -4]),
    moon_term(-6.382, [1, 0, -2, 2]),
    moon_term(39.528, [1, 0, -2, 0]),
    moon_term(9.366, [1, 0, -2, -2]),
    moon_term(0.202, [1, 0, -2, -4]),
    moon_term(0.415, [0, 1, 2, 0]),
    moon_term(-2.152, [0, 1, 2, -2]),
    moon_term(-1.440, [0, 1, -2, 2]),
    moon_term(0.076, [0, 1, -2, 0]),
    moon_term(0.384, [0, 1, -2, -2]),
    moon_term(-0.586, [2, 0, 0, 1]),
    moon_term(1.750, [2, 0, 0, -1]),
    moon_term(1.225, [2, 0, 0, -3]),
    moon_term(1.267, [1, 1, 0, 1]),
    moon_term(0.137, [1, 1, 0, -1]),
    moon_term(0.233, [1, 1, 0, -3]),
    moon_term(-0.122, [1, -1, 0, 1]),
    moon_term(-1.089, [1, -1, 0, -1]),
    moon_term(-0.276, [1, -1, 0, -3]),
    moon_term(0.255, [0, 0, 2, 1]),
    moon_term(0.584, [0, 0, 2, -1]),
    moon_term(0.254, [0, 0, 2, -3]),
    moon_term(0.070, [4, 0, 0, 2]),
    moon_term(1.938, [4, 0, 0, 0]),
    moon_term(-0.952, [4, 0, 0, -2]),
    moon_term(-0.551, [3, 1, 0, 0]),
    moon_term(-0.482, [3, 1, 0, -2]),
    moon_term(-0.100, [3, 1, 0, -4]),
    moon_term(0.088, [3, -1, 0, 2]),
    moon_term(0.681, [3, -1, 0, 0]),
    moon_term(-0.183, [3, -1, 0, -2]),
    moon_term(-0.297, [2, 2, 0, -2]),
    moon_term(-0.161, [2, 2, 0, -4]),
    moon_term(0.197, [2, -2, 0, 0]),
    moon_term(0.254, [2, -2, 0, -2]),
    moon_term(-0.250, [1, 3, 0, -2]),
    moon_term(-0.123, [2, 0, 2, 2]),
    moon_term(-3.996, [2, 0, 2, 0]),
    moon_term(0.557, [2, 0, 2, -2]),
    moon_term(-0.459, [2, 0, -2, 2]),
    moon_term(-1.370, [2, 0, -2, 0]),
    moon_term(0.538, [2, 0, -2, -2]),
    moon_term(0.173, [2, 0, -2, -4]),
    moon_term(0.263, [1, 1, 2, 0]),
    moon_term(0.083, [1, 1, -2, 2]),
    moon_term(-0.083, [1, 1, -2, 0]),
    moon_term(0.426, [1, 1, -2, -2]),
    moon_term(-0.304, [1, -1, 2, 0]),
    moon_term(-0.372, [1, -1, -2, 2]),
    moon_term(0.083, [1, -1, -2, 0]),
    moon_term(0.418, [0, 0, 4, 0]),
    moon_term(0.074, [0, 0, 4, -2]),
    moon_term(0.130, [3, 0, 0, -1]),
    moon_term(0.092, [2, 1, 0, 1]),
    moon_term(0.084, [2, 1, 0, -3]),
    moon_term(-0.352, [2, -1, 0, -1]),
    moon_term(0.113, [5, 0, 0, 0]),
    moon_term(-0.330, [3, 0, 2, 0]),
    moon_term(0.090, [1, 0, 4, 0]),
    moon_term(-0.080, [1, 0, -4, 0]),
];

/// Solar terms in the argument of latitude (sine), arcseconds.
pub(crate) const LATITUDE_ARGUMENT: [MoonTerm; 55] = [
    moon_term(-112.79, [0, 0, 0, 1]),
    moon_term(2373.36, [0, 0, 0, 2]),
    moon_term(-4.01, [0, 0, 0, 3]),
    moon_term(14.06, [0, 0, 0, 4]),
    moon_term(6.98, [1, 0, 0, 4]),
    moon_term(192.72, [1, 0, 0, 2]),
    moon_term(-13.51, [1, 0, 0, 1]),
    moon_term(22609.07, [1, 0, 0, 0]),
    moon_term(3.59, [1, 0, 0, -1]),
    moon_term(-4578.13, [1, 0, 0, -2]),
    moon_term(5.44, [1, 0, 0, -3]),
    moon_term(-38.64, [1, 0, 0, -4]),
    moon_term(14.78, [2, 0, 0, 2]),
    moon_term(767.96, [2, 0, 0, 0]),
    moon_term(2.01, [2, 0, 0, -1]),
    moon_term(-152.53, [2, 0, 0, -2]),
    moon_term(-34.07, [2, 0, 0, -4]),
    moon_term(2.96, [3, 0, 0, 2]),
    moon_term(50.64, [3, 0, 0, 0]),
    moon_term(-16.40, [3, 0, 0, -2]),
    moon_term(3.60, [4, 0, 0, 0]),
    moon_term(-1.58, [4, 0, 0, -2]),
    moon_term(-1.59, [0, 1, 0, 4]),
    moon_term(-25.10, [0, 1, 0, 2]),
    moon_term(17.93, [0, 1, 0, 1]),
    moon_term(-126.98, [0, 1, 0, 0]),
    moon_term(-165.06, [0, 1, 0, -2]),
    moon_term(-6.46, [0, 1, 0, -4]),
    moon_term(-1.68, [0, 2, 0, 2]),
    moon_term(-16.35, [0, 2, 0, -2]),
    moon_term(-11.75, [1, 1, 0, 2]),
    moon_term(1.52, [1, 1, 0, 1]),
    moon_term(-115.18, [1, 1, 0, 0]),
    moon_term(-182.36, [1, 1, 0, -2]),
    moon_term(-9.66, [1, 1, 0, -4]),
    moon_term(-2.27, [-1, 1, 0, 4]),
    moon_term(-23.59, [-1, 1, 0, 2]),
    moon_term(-138.76, [-1, 1, 0, 0]),
    moon_term(-31.70, [-1, 1, 0, -2]),
    moon_term(-1.53, [-1, 1, 0, -4]),
    moon_term(-10.56, [2, 1, 0, 0]),
    moon_term(-7.59, [2, 1, 0, -2]),
    moon_term(-2.54, [2, 1, 0, -4]),
    moon_term(3.32, [2, -1, 0, 2]),
    moon_term(11.67, [2, -1, 0, 0]),
    moon_term(-6.12, [1, 2, 0, -2]),
    moon_term(-2.40, [-1, 2, 0, 2]),
    moon_term(-2.32, [-1, 2, 0, 0]),
    moon_term(-1.82, [-1, 2, 0, -2]),
    moon_term(-52.14, [0, 0, 2, -2]),
    moon_term(-1.67, [0, 0, 2, -4]),
    moon_term(-9.52, [1, 0, 2, -2]),
    moon_term(-85.13, [-1, 0, 2, 0]),
    moon_term(3.37, [-1, 0, 2, -2]),
    moon_term(-2.26, [0, 1, 2, -2]),
];

/// Solar terms scaling the latitude amplitude (cosine), arcseconds.
pub(crate) const LATITUDE_FACTOR: [MoonTerm; 24] = [
    moon_term(-0.725, [0, 0, 0, 1]),
    moon_term(0.601, [0, 0, 0, 2]),
    moon_term(0.394, [0, 0, 0, 3]),
    moon_term(-0.445, [1, 0, 0, 4]),
    moon_term(0.455, [1, 0, 0, 1]),
    moon_term(0.192, [1, 0, 0, -3]),
    moon_term(5.679, [2, 0, 0, -2]),
    moon_term(-0.308, [2, 0, 0, -4]),
    moon_term(-0.166, [3, 0, 0, 2]),
    moon_term(-1.300, [3, 0, 0, 0]),
    moon_term(0.258, [3, 0, 0, -2]),
    moon_term(-1.302, [0, 1, 0, 0]),
    moon_term(-0.416, [0, 1, 0, -4]),
    moon_term(-0.740, [0, 2, 0, -2]),
    moon_term(0.787, [1, 1, 0, 2]),
    moon_term(0.461, [1, 1, 0, 0]),
    moon_term(2.056, [1, 1, 0, -2]),
    moon_term(-0.471, [1, 1, 0, -4]),
    moon_term(-0.443, [-1, 1, 0, 2]),
    moon_term(0.679, [-1, 1, 0, 0]),
    moon_term(-1.540, [-1, 1, 0, -2]),
    moon_term(0.259, [2, 1, 0, 0]),
    moon_term(-0.212, [2, -1, 0, 2]),
    moon_term(-0.151, [2, -1, 0, 0]),
];

/// Solar terms in latitude (sine), arcseconds.
pub(crate) const LATITUDE_NODE: [MoonTerm; 10] = [
    moon_term(-526.069, [0, 0, 1, -2]),
    moon_term(-3.352, [0, 0, 1, -4]),
    moon_term(44.297, [1, 0, 1, -2]),
    moon_term(-6.000, [1, 0, 1, -4]),
    moon_term(20.599, [-1, 0, 1, 0]),
    moon_term(-30.598, [-1, 0, 1, -2]),
    moon_term(-24.649, [-2, 0, 1, 0]),
    moon_term(-2.000, [-2, 0, 1, -2]),
    moon_term(-22.571, [0, 1, 1, -2]),
    moon_term(10.985, [0, -1, 1, -2]),
];

/// Solar terms in horizontal parallax (cosine), arcseconds.
pub(crate) const PARALLAX: [MoonTerm; 56] = [
    moon_term(0.2607, [0, 0, 0, 4]),
    moon_term(28.2333, [0, 0, 0, 2]),
    moon_term(0.0433, [1, 0, 0, 4]),
    moon_term(3.0861, [1, 0, 0, 2]),
    moon_term(186.5398, [1, 0, 0, 0]),
    moon_term(34.3117, [1, 0, 0, -2]),
    moon_term(0.6008, [1, 0, 0, -4]),
    moon_term(-0.3000, [0, 1, 0, 2]),
    moon_term(-0.3997, [0, 1, 0, 0]),
    moon_term(1.9178, [0, 1, 0, -2]),
    moon_term(0.0339, [0, 1, 0, -4]),
    moon_term(-0.9781, [0, 0, 0, 1]),
    moon_term(0.2833, [2, 0, 0, 2]),
    moon_term(10.1657, [2, 0, 0, 0]),
    moon_term(-0.3039, [2, 0, 0, -2]),
    moon_term(0.3722, [2, 0, 0, -4]),
    moon_term(0.0109, [2, 0, 0, -6]),
    moon_term(-0.0484, [1, 1, 0, 2]),
    moon_term(-0.9490, [1, 1, 0, 0]),
    moon_term(1.4437, [1, 1, 0, -2]),
    moon_term(0.0673, [1, 1, 0, -4]),
    moon_term(0.2302, [1, -1, 0, 2]),
    moon_term(1.1528, [1, -1, 0, 0]),
    moon_term(-0.2257, [1, -1, 0, -2]),
    moon_term(-0.0102, [1, -1, 0, -4]),
    moon_term(0.0918, [0, 2, 0, -2]),
    moon_term(-0.0124, [0, 0, 2, 0]),
    moon_term(-0.1052, [0, 0, 2, -2]),
    moon_term(-0.1093, [1, 0, 0, 1]),
    moon_term(0.0118, [1, 0, 0, -1]),
    moon_term(-0.0386, [1, 0, 0, -3]),
    moon_term(0.1494, [0, 1, 0, 1]),
    moon_term(0.0243, [3, 0, 0, 2]),
    moon_term(0.6215, [3, 0, 0, 0]),
    moon_term(-0.1187, [3, 0, 0, -2]),
    moon_term(-0.1038, [2, 1, 0, 0]),
    moon_term(-0.0192, [2, 1, 0, -2]),
    moon_term(0.0324, [2, 1, 0, -4]),
    moon_term(0.0213, [2, -1, 0, 2]),
    moon_term(0.1268, [2, -1, 0, 0]),
    moon_term(-0.0106, [1, 2, 0, 0]),
    moon_term(0.0484, [1, 2, 0, -2]),
    moon_term(0.0112, [1, -2, 0, 2]),
    moon_term(0.0196, [1, -2, 0, 0]),
    moon_term(-0.0212, [1, -2, 0, -2]),
    moon_term(-0.0833, [1, 0, 2, -2]),
    moon_term(-0.0481, [1, 0, -2, 2]),
    moon_term(-0.7136, [1, 0, -2, 0]),
    moon_term(-0.0112, [1, 0, -2, -2]),
    moon_term(-0.0100, [2, 0, 0, 1]),
    moon_term(0.0155, [2, 0, 0, -1]),
    moon_term(0.0164, [1, 1, 0, 1]),
    moon_term(0.0401, [4, 0, 0, 0]),
    moon_term(-0.0130, [4, 0, 0, -2]),
    moon_term(0.0115, [3, -1, 0, 0]),
    moon_term(-0.0141, [2, 0, -2, -2]),
];

/// Planetary terms in longitude, arcseconds.
pub(crate) const LONGITUDE_PLANETARY: [MoonPlanetaryTerm; 40] = [
    planetary(0.822, [0, 0, 0, 0], [1, -1, 0, 0, 0], 0.0),
    planetary(0.307, [0, 0, 0, 0], [2, -2, 0, 0, 0], 179.8),
    planetary(0.348, [0, 0, 0, 0], [3, -2, 0, 0, 0], 272.9),
    planetary(0.176, [0, 0, 0, 0], [4, -3, 0, 0, 0], 271.7),
    planetary(0.092, [0, 0, 0, 0], [5, -3, 0, 0, 0], 199.0),
    planetary(0.129, [1, 0, 0, 0], [-1, 1, 0, 0, 0], 180.0),
    planetary(0.152, [1, 0, 0, 0], [1, -1, 0, 0, 0], 0.0),
    planetary(0.127, [1, 0, 0, 0], [3, -3, 0, 0, 0], 180.0),
    planetary(0.099, [0, 0, 0, 2], [1, -1, 0, 0, 0], 0.0),
    planetary(0.136, [0, 0, 0, 2], [2, -2, 0, 0, 0], 179.5),
    planetary(0.083, [-1, 0, 0, 2], [-4, 4, 0, 0, 0], 180.0),
    planetary(0.662, [-1, 0, 0, 2], [-3, 3, 0, 0, 0], 180.0),
    planetary(0.137, [-1, 0, 0, 2], [-2, 2, 0, 0, 0], 0.0),
    planetary(0.133, [-1, 0, 0, 2], [1, -1, 0, 0, 0], 0.0),
    planetary(0.157, [-1, 0, 0, 2], [2, -2, 0, 0, 0], 179.6),
    planetary(0.079, [-1, 0, 0, 2], [-8, 6, 0, 0, 0], 162.6),
    planetary(0.073, [2, 0, 0, -2], [3, -3, 0, 0, 0], 180.0),
    planetary(0.643, [0, 0, 0, 0], [-1, 0, 1, 0, 0], 178.8),
    planetary(0.187, [0, 0, 0, 0], [-2, 0, 2, 0, 0], 359.6),
    planetary(0.087, [0, 0, 0, 0], [0, 0, 1, 0, 0], 289.9),
    planetary(0.165, [0, 0, 0, 0], [-1, 0, 2, 0, 0], 241.5),
    planetary(0.144, [1, 0, 0, 0], [1, 0, -1, 0, 0], 1.0),
    planetary(0.158, [1, 0, 0, 0], [-1, 0, 1, 0, 0], 179.0),
    planetary(0.190, [1, 0, 0, 0], [-2, 0, 2, 0, 0], 180.0),
    planetary(0.096, [1, 0, 0, 0], [-2, 0, 3, 0, 0], 352.5),
    planetary(0.070, [0, 0, 0, 2], [2, 0, -2, 0, 0], 180.0),
    planetary(0.167, [0, 0, 0, 2], [-1, 0, 1, 0, 0], 178.5),
    planetary(0.085, [0, 0, 0, 2], [-2, 0, 2, 0, 0], 359.2),
    planetary(1.137, [-1, 0, 0, 2], [2, 0, -2, 0, 0], 180.3),
    planetary(0.211, [-1, 0, 0, 2], [-1, 0, 1, 0, 0], 178.4),
    planetary(0.089, [-1, 0, 0, 2], [-2, 0, 2, 0, 0], 359.2),
    planetary(0.436, [-1, 0, 0, 2], [2, 0, -3, 0, 0], 7.5),
    planetary(0.240, [2, 0, 0, -2], [-2, 0, 2, 0, 0], 179.9),
    planetary(0.284, [2, 0, 0, -2], [-2, 0, 3, 0, 0], 172.5),
    planetary(0.195, [0, 0, 0, 0], [-2, 0, 0, 2, 0], 180.2),
    planetary(0.327, [0, 0, 0, 0], [-1, 0, 0, 2, 0], 224.4),
    planetary(0.093, [0, 0, 0, 0], [-2, 0, 0, 4, 0], 244.8),
    planetary(0.073, [1, 0, 0, 0], [-1, 0, 0, 2, 0], 223.3),
    planetary(0.074, [1, 0, 0, 0], [1, 0, 0, -2, 0], 306.3),
    planetary(0.189, [0, 0, 0, 0], [0, 0, 0, 0, 1], 180.0),
];
