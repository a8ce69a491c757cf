pub mod almanac;
pub mod almanac_errors;
pub mod bodies;
pub mod catalog;
pub mod constants;
pub mod conversion;
pub mod earth_orientation;
pub mod ephemeris;
pub mod frame;
pub mod kepler;
pub mod observers;
pub mod orbit_type;
pub mod ref_system;
pub mod search;
mod series;
mod tables;
pub mod time;

#[cfg(test)]
pub(crate) mod unit_test_global {
    use std::sync::LazyLock;

    use crate::{
        bodies::{solar_system, CelestialBody},
        ephemeris::SamplingWindow,
        observers::Observer,
    };

    /// Every body sampled over the day starting at J2000, seen from Murray Hill.
    pub(crate) static SAMPLED_J2000: LazyLock<(SamplingWindow, Vec<CelestialBody>)> =
        LazyLock::new(|| {
            let window = SamplingWindow::new(36525.0, 1.0, 0.0, Observer::default(), false);
            let mut bodies = solar_system(None);
            window.sample(&mut bodies);
            (window, bodies)
        });
}
