//! Easing curves for the roll animations.
//!
//! Both curves map normalized elapsed time to normalized progress and
//! decelerate: fast start, slow finish. Inputs outside [0, 1] are clamped.

/// Quartic ease-out, used for the long tumble phase.
pub fn quartic_out(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u * u
}

/// Quadratic ease-out, used for the short face-align phase.
pub fn quadratic_out(t: f32) -> f32 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u
}
