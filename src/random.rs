//! Seeded random number generation shared by every operator.
//!
//! The whole pipeline draws from a single caller-owned generator so that a
//! run is reproducible from its seed. Operators receive it as
//! `&mut dyn RngCore`; [`create_rng`] builds the concrete generator.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Creates a seeded generator.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_evolve::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a standard normal deviate `N(0, 1)`.
///
/// Box–Muller transform over two uniform draws. `u1` is taken from
/// `(0, 1]` so the logarithm stays finite.
pub fn gaussian(rng: &mut dyn RngCore) -> f64 {
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Returns an index in `0..len`, consuming no randomness when `len == 1`.
///
/// # Panics
/// Panics if `len == 0`.
pub(crate) fn pick_index(len: usize, rng: &mut dyn RngCore) -> usize {
    assert!(len > 0, "cannot pick from an empty set");
    if len == 1 {
        0
    } else {
        rng.random_range(0..len)
    }
}
