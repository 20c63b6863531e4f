//! Trigonometric solution: derives the contact angle and each velocity's
//! heading angle, then evaluates the elastic exchange in polar form.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{combined_mass, Body, CollisionError, CollisionResult};
use crate::basis::Vec2;

pub fn solve(a: &Body, b: &Body) -> Result<CollisionResult, CollisionError> {
    combined_mass(a, b)?;

    let phi = contact_angle(a.center, b.center);
    let theta_a = heading_angle(a.velocity);
    let theta_b = heading_angle(b.velocity);
    let speed_a = a.velocity.length();
    let speed_b = b.velocity.length();

    Ok(CollisionResult {
        velocity_a: exchanged_velocity(speed_a, speed_b, theta_a, theta_b, phi, a.mass, b.mass),
        velocity_b: exchanged_velocity(speed_b, speed_a, theta_b, theta_a, phi, b.mass, a.mass),
    })
}

/// Angle of the line from the first center to the second, in the (-2π, 0]
/// branch: a positive atan2 result is shifted down by one full turn.
///
/// Only sin and cos of the angle feed the exchange formulas, so the branch
/// does not change the outcome.
fn contact_angle(center_a: Vec2, center_b: Vec2) -> f64 {
    let phi = (center_b.y - center_a.y).atan2(center_b.x - center_a.x);
    if phi > 0.0 {
        phi - 2.0 * PI
    } else {
        phi
    }
}

/// Heading of a velocity vector relative to the positive x-axis, clamped
/// into [-π, π].
///
/// A zero-length vector has no heading; -1.0 is returned as a stand-in. The
/// exchange formulas scale every term derived from it by the (zero) speed,
/// so the bogus angle never reaches the output.
fn heading_angle(vector: Vec2) -> f64 {
    let length = vector.length();
    if length == 0.0 {
        return -1.0;
    }

    let mut theta = (vector.x / length).acos();
    if vector.y < 0.0 {
        theta = -theta;
    }
    theta.clamp(-PI, PI)
}

/// Post-collision velocity of the body with speed `v1` and heading
/// `theta1`; the `2`-suffixed arguments belong to the other body. `phi` is
/// the contact angle from the first input body to the second in both
/// halves of the exchange.
fn exchanged_velocity(
    v1: f64,
    v2: f64,
    theta1: f64,
    theta2: f64,
    phi: f64,
    m1: f64,
    m2: f64,
) -> Vec2 {
    let total_mass = m1 + m2;
    let theta1_phi = theta1 - phi;
    let numerator = v1 * theta1_phi.cos() * (m1 - m2) + 2.0 * m2 * v2 * (theta2 - phi).cos();
    Vec2::new(
        numerator * phi.cos() / total_mass + v1 * theta1_phi.sin() * (phi + FRAC_PI_2).cos(),
        numerator * phi.sin() / total_mass + v1 * theta1_phi.sin() * (phi + FRAC_PI_2).sin(),
    )
}
