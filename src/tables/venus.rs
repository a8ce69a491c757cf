//! Perturbations of Venus by the Earth, Mars and Jupiter.

use crate::series::{term, SeriesTerm};

/// Longitude perturbations, arguments (Venus, Earth, Mars, Jupiter).
pub(crate) const LONGITUDE: [SeriesTerm<4>; 10] = [
    term(4.889, 2.0788, [1, -1, 0, 0]),
    term(11.261, 2.5870, [2, -2, 0, 0]),
    term(7.128, 6.2384, [3, -3, 0, 0]),
    term(3.446, 2.3721, [2, -3, 0, 0]),
    term(1.034, 0.4632, [4, -4, 0, 0]),
    term(1.575, 3.3847, [4, -5, 0, 0]),
    term(1.439, 2.4099, [3, -5, 0, 0]),
    term(1.208, 4.1464, [1, 0, -3, 0]),
    term(2.966, 3.6318, [1, 0, 0, -1]),
    term(1.563, 4.6829, [0, 0, 0, -1]),
];

/// Latitude perturbations, arguments (Venus, Earth, Jupiter).
pub(crate) const LATITUDE: [SeriesTerm<3>; 3] = [
    term(0.122, 4.2726, [0, -1, 0]),
    term(0.300, 0.0218, [4, -5, 0]),
    term(0.159, 1.3491, [1, 0, -2]),
];

/// Log radius perturbations, arguments (Venus, Earth, Mars, Jupiter).
pub(crate) const RADIUS: [SeriesTerm<4>; 10] = [
    term(2.246e-6, 0.5080, [1, -1, 0, 0]),
    term(9.772e-6, 1.0159, [2, -2, 0, 0]),
    term(8.271e-6, 4.6674, [3, -3, 0, 0]),
    term(0.737e-6, 0.8267, [2, -3, 0, 0]),
    term(1.426e-6, 5.1747, [4, -4, 0, 0]),
    term(0.510e-6, 5.7009, [5, -5, 0, 0]),
    term(1.572e-6, 1.8188, [4, -5, 0, 0]),
    term(0.717e-6, 2.2969, [2, 0, -3, 0]),
    term(2.991e-6, 2.0611, [1, 0, 0, -1]),
    term(1.335e-6, 0.9628, [2, 0, 0, -2]),
];
