//! Post-collision velocities for two point masses undergoing a perfectly
//! elastic 2D collision.
//!
//! Two independent closed-form derivations are provided: [`trigonometric`]
//! works in polar form via the contact angle and each velocity's heading
//! angle, [`angle_free`] projects the relative velocity onto the line
//! connecting the two centers. Both conserve momentum and kinetic energy
//! and agree on every non-degenerate input.

mod angle_free;
mod trigonometric;

use thiserror::Error;

use crate::basis::Vec2;

/// One colliding point mass at the moment of contact.
///
/// The mass must be strictly positive for a physically meaningful result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub velocity: Vec2,
    pub mass: f64,
    pub center: Vec2,
}

impl Body {
    pub const fn new(velocity: Vec2, mass: f64, center: Vec2) -> Self {
        Self {
            velocity,
            mass,
            center,
        }
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// The two post-collision velocities, in the same order as the input bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResult {
    pub velocity_a: Vec2,
    pub velocity_b: Vec2,
}

#[derive(Error, Debug, PartialEq)]
pub enum CollisionError {
    #[error("combined mass {0} is not strictly positive")]
    NonPositiveMass(f64),
    #[error("collider centers coincide")]
    CoincidentCenters,
}

/// Solves the collision with the trigonometric method.
///
/// A body with zero velocity is tolerated: its heading angle degenerates to
/// a sentinel that never reaches the output (every term derived from it is
/// scaled by the zero speed).
pub fn solve_trigonometric(a: &Body, b: &Body) -> Result<CollisionResult, CollisionError> {
    trigonometric::solve(a, b)
}

/// Solves the collision with the angle-free method.
///
/// The two centers must not coincide; the projection onto the line of
/// centers is undefined for zero distance and such inputs are rejected with
/// [`CollisionError::CoincidentCenters`].
pub fn solve_angle_free(a: &Body, b: &Body) -> Result<CollisionResult, CollisionError> {
    angle_free::solve(a, b)
}

/// Raw-parts call shape of [`solve_angle_free`] for callers that do not
/// keep aggregate body records.
pub fn solve_angle_free_parts(
    velocity_a: Vec2,
    velocity_b: Vec2,
    mass_a: f64,
    mass_b: f64,
    center_a: Vec2,
    center_b: Vec2,
) -> Result<CollisionResult, CollisionError> {
    angle_free::solve(
        &Body::new(velocity_a, mass_a, center_a),
        &Body::new(velocity_b, mass_b, center_b),
    )
}

fn combined_mass(a: &Body, b: &Body) -> Result<f64, CollisionError> {
    let total = a.mass + b.mass;
    if total > 0.0 {
        Ok(total)
    } else {
        Err(CollisionError::NonPositiveMass(total))
    }
}
