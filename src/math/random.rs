//! Per-thread random sampling.
//!
//! Every thread owns its own generator, seeded from the OS on first use.
//! [`seed_thread_rng`] replaces the current thread's generator with a
//! deterministic one.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Vector3, PI};

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(StdRng::from_rng(&mut rand::rng()));
}

/// Reseeds the calling thread's generator.
pub fn seed_thread_rng(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = StdRng::seed_from_u64(seed));
}

/// Uniform `f32` in `[0, 1)`.
#[must_use]
pub fn frand() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Uniform `f32` in `[min, max)`.
#[must_use]
pub fn frand_range(min: f32, max: f32) -> f32 {
    min + (max - min) * frand()
}

/// Uniform integer in `[min, max)`.
///
/// Returns `min` when the range is empty.
#[must_use]
pub fn dice(min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    RNG.with(|rng| rng.borrow_mut().random_range(min..max))
}

/// Uniformly distributed direction on the unit sphere.
#[must_use]
pub fn random_unit_vector() -> Vector3 {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        let azimuth = 2.0 * PI * rng.random::<f32>();
        let cos_polar = 2.0 * rng.random::<f32>() - 1.0;
        let sin_polar = (1.0 - cos_polar * cos_polar).sqrt();
        Vector3::new(sin_polar * azimuth.cos(), sin_polar * azimuth.sin(), cos_polar)
    })
}

/// Random direction scaled to length `radius`.
#[must_use]
pub fn random_vector(radius: f32) -> Vector3 {
    random_unit_vector() * radius
}
