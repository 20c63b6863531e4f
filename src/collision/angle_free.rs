//! Angle-free solution: projects the relative velocity onto the line
//! connecting the two centers, avoiding explicit angle computation.

use super::{combined_mass, Body, CollisionError, CollisionResult};
use crate::basis::Vec2;

pub fn solve(a: &Body, b: &Body) -> Result<CollisionResult, CollisionError> {
    combined_mass(a, b)?;
    if (a.center - b.center).length_squared() == 0.0 {
        return Err(CollisionError::CoincidentCenters);
    }

    Ok(CollisionResult {
        velocity_a: deflected_velocity(a.velocity, b.velocity, a.mass, b.mass, a.center, b.center),
        velocity_b: deflected_velocity(b.velocity, a.velocity, b.mass, a.mass, b.center, a.center),
    })
}

/// Post-collision velocity of the body with velocity `v1` at `x1`; the
/// `2`-suffixed arguments belong to the other body. The caller has already
/// ruled out coincident centers, so the division is well-defined.
fn deflected_velocity(v1: Vec2, v2: Vec2, m1: f64, m2: f64, x1: Vec2, x2: Vec2) -> Vec2 {
    let scale = 2.0 * m2 / (m1 + m2);
    let v12 = v1 - v2;
    let x12 = x1 - x2;
    let d = v12.dot(x12);
    v1 - x12 * (scale * d / x12.length_squared())
}
