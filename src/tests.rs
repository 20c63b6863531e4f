//! Test utils.

use std::f64::consts::TAU;

use rand::distr::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{Body, Vec2};

pub fn total_momentum(a: &Body, b: &Body) -> Vec2 {
    a.momentum() + b.momentum()
}

pub fn total_kinetic_energy(a: &Body, b: &Body) -> f64 {
    a.kinetic_energy() + b.kinetic_energy()
}

/// Reproducible stream of valid body pairs: positive masses and distinct
/// centers, with velocities covering all quadrants.
pub fn body_pairs(seed: u64, count: usize) -> Vec<(Body, Body)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let component = Uniform::new(-10.0, 10.0).unwrap();
    let mass = Uniform::new(0.1, 5.0).unwrap();
    let direction = Uniform::new(0.0, TAU).unwrap();
    let distance = Uniform::new(0.5, 3.0).unwrap();

    (0..count)
        .map(|_| {
            let center_a = Vec2::new(component.sample(&mut rng), component.sample(&mut rng));
            let angle = direction.sample(&mut rng);
            let center_b =
                center_a + Vec2::new(angle.cos(), angle.sin()) * distance.sample(&mut rng);
            let a = Body::new(
                Vec2::new(component.sample(&mut rng), component.sample(&mut rng)),
                mass.sample(&mut rng),
                center_a,
            );
            let b = Body::new(
                Vec2::new(component.sample(&mut rng), component.sample(&mut rng)),
                mass.sample(&mut rng),
                center_b,
            );
            (a, b)
        })
        .collect()
}
