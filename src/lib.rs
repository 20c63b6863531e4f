//! Post-collision velocities for perfectly elastic collisions between two
//! point masses in 2D.
//!
//! The crate is a pure numerical kernel: the caller detects the contact,
//! hands over each body's velocity, mass, and center at the moment of
//! impact, and receives the pair of outgoing velocities. Detection,
//! integration over time, and rendering stay with the caller.
//!
//! Two independent closed-form methods are provided. [`solve_trigonometric`]
//! works in polar form via the contact angle and the heading angle of each
//! velocity; [`solve_angle_free`] projects the relative velocity onto the
//! line connecting the two centers. Both conserve momentum and kinetic
//! energy and agree on every non-degenerate input.
//!
//! By minimizing hard dependencies, the kernel remains independent of any
//! particular engine's math types.
//!
//! ```
//! use elastic_collision::{solve_angle_free, Body, Vec2};
//!
//! let a = Body::new(Vec2::new(1.0, 0.0), 1.0, Vec2::new(0.0, 0.0));
//! let b = Body::new(Vec2::new(-1.0, 0.0), 1.0, Vec2::new(2.0, 0.0));
//! let result = solve_angle_free(&a, &b)?;
//! assert!((result.velocity_a.x + 1.0).abs() < 1e-9);
//! assert!((result.velocity_b.x - 1.0).abs() < 1e-9);
//! # Ok::<(), elastic_collision::CollisionError>(())
//! ```

#[cfg(test)]
mod tests;

mod basis;
mod collision;

pub use basis::Vec2;
pub use collision::{
    solve_angle_free, solve_angle_free_parts, solve_trigonometric, Body, CollisionError,
    CollisionResult,
};
