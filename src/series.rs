//! # Periodic perturbation series
//!
//! The Sun, Mercury, Venus and nutation models correct their mean motion with sums of the form
//!
//! ```text
//! Σ Aₖ · f(φₖ + Σⱼ nₖⱼ · argⱼ)        f ∈ {cos, sin}
//! ```
//!
//! where the amplitudes `A`, phases `φ` and integer multipliers `n` are literal coefficient
//! tables (see [`crate::tables`]) and the arguments are mean anomalies or longitudes of the
//! perturbing bodies, in radians. The argument combination is accumulated term by term in
//! table order so results stay bit-compatible with the reference tables.

/// One term of a periodic series over `N` arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm<const N: usize> {
    /// Amplitude, in the unit of the corrected quantity (arcseconds or log-radius)
    pub amplitude: f64,
    /// Phase offset in radians
    pub phase: f64,
    /// Integer multiplier of each argument
    pub multipliers: [i32; N],
}

/// Table constructor used by the coefficient modules.
pub(crate) const fn term<const N: usize>(
    amplitude: f64,
    phase: f64,
    multipliers: [i32; N],
) -> SeriesTerm<N> {
    SeriesTerm {
        amplitude,
        phase,
        multipliers,
    }
}

impl<const N: usize> SeriesTerm<N> {
    /// Argument `φ + Σ nⱼ·argⱼ` of this term, in radians.
    #[inline]
    pub fn argument(&self, args: &[f64; N]) -> f64 {
        self.multipliers
            .iter()
            .zip(args)
            .fold(self.phase, |acc, (&n, &arg)| acc + f64::from(n) * arg)
    }
}

fn trig_series<const N: usize>(terms: &[SeriesTerm<N>], args: &[f64; N], f: fn(f64) -> f64) -> f64 {
    terms
        .iter()
        .map(|t| t.amplitude * f(t.argument(args)))
        .sum()
}

/// Sum of the cosine series `Σ A·cos(φ + Σ n·arg)`.
pub fn cos_series<const N: usize>(terms: &[SeriesTerm<N>], args: &[f64; N]) -> f64 {
    trig_series(terms, args, f64::cos)
}

/// Sum of the sine series `Σ A·sin(φ + Σ n·arg)`.
pub fn sin_series<const N: usize>(terms: &[SeriesTerm<N>], args: &[f64; N]) -> f64 {
    trig_series(terms, args, f64::sin)
}

#[cfg(test)]
mod series_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const TERMS: [SeriesTerm<2>; 2] = [term(2.0, 0.0, [1, 0]), term(0.5, PI / 2.0, [1, -1])];

    #[test]
    fn test_argument_accumulation() {
        assert_relative_eq!(TERMS[1].argument(&[0.3, 0.1]), PI / 2.0 + 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_cos_and_sin_series() {
        let args = [0.3, 0.1];
        let expected_cos = 2.0 * 0.3_f64.cos() + 0.5 * (PI / 2.0 + 0.2).cos();
        let expected_sin = 2.0 * 0.3_f64.sin() + 0.5 * (PI / 2.0 + 0.2).sin();
        assert_relative_eq!(cos_series(&TERMS, &args), expected_cos, epsilon = 1e-15);
        assert_relative_eq!(sin_series(&TERMS, &args), expected_sin, epsilon = 1e-15);
    }

    #[test]
    fn test_empty_series() {
        let empty: [SeriesTerm<3>; 0] = [];
        assert_eq!(cos_series(&empty, &[1.0, 2.0, 3.0]), 0.0);
    }
}
