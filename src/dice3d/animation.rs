//! Per-die animation state machine.
//!
//! The original tween chain (a long tumble whose completion kicks off a
//! short face-align tween) is expressed as an explicit state slot on each
//! die, advanced by a single frame-tick system. Starting a new tumble while
//! another animation is in flight overwrites it: last writer wins, nothing
//! is queued.

use bevy::prelude::*;

use super::easing::{quadratic_out, quartic_out};
use super::roll::{align_target, orientation_quat, resolve_visible_face};
use super::settings::RollSettings;
use super::types::Die;

/// Idle -> Tumbling (quartic-out) -> Aligning (quadratic-out) -> Idle.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub enum RollAnimation {
    #[default]
    Idle,
    Tumbling {
        start: Vec3,
        target: Vec3,
        elapsed: f32,
    },
    Aligning {
        start: Vec3,
        target: Vec3,
        elapsed: f32,
    },
}

impl RollAnimation {
    /// Begin a tumble toward `target`, superseding any active animation.
    pub fn start_tumble(&mut self, from: Vec3, target: Vec3) {
        *self = RollAnimation::Tumbling {
            start: from,
            target,
            elapsed: 0.0,
        };
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RollAnimation::Idle)
    }
}

/// Advance one animation by `dt` seconds, writing the interpolated rotation.
///
/// Returns the resolved face index on the Tumbling -> Aligning edge. The
/// align phase ends back at `Idle` with the rotation snapped exactly onto
/// the corrective target.
pub fn step_animation(
    anim: &mut RollAnimation,
    rotation: &mut Vec3,
    dt: f32,
    settings: &RollSettings,
) -> Option<usize> {
    match anim {
        RollAnimation::Idle => None,
        RollAnimation::Tumbling {
            start,
            target,
            elapsed,
        } => {
            *elapsed += dt;
            let duration = settings.tumble_seconds();
            if *elapsed >= duration {
                *rotation = *target;
                let face = resolve_visible_face(*rotation);
                *anim = RollAnimation::Aligning {
                    start: *rotation,
                    target: align_target(face),
                    elapsed: 0.0,
                };
                Some(face)
            } else {
                let t = quartic_out(*elapsed / duration);
                *rotation = *start + (*target - *start) * t;
                None
            }
        }
        RollAnimation::Aligning {
            start,
            target,
            elapsed,
        } => {
            *elapsed += dt;
            let duration = settings.align_seconds();
            if *elapsed >= duration {
                *rotation = *target;
                *anim = RollAnimation::Idle;
            } else {
                let t = quadratic_out(*elapsed / duration);
                *rotation = *start + (*target - *start) * t;
            }
            None
        }
    }
}

/// Advance every die's animation by the frame delta.
pub fn tick_roll_animations(
    time: Res<Time>,
    settings: Res<RollSettings>,
    mut dice: Query<(&mut Die, &mut RollAnimation)>,
) {
    let dt = time.delta_seconds();
    for (mut die, mut anim) in dice.iter_mut() {
        let die = die.as_mut();
        if let Some(face) = step_animation(&mut anim, &mut die.rotation, dt, &settings) {
            die.last_face = Some(face);
            debug!("die settled on face {}", face + 1);
        }
    }
}

/// Mirror each die's Euler rotation into its render transform.
pub fn sync_die_transforms(mut dice: Query<(&Die, &mut Transform)>) {
    for (die, mut transform) in dice.iter_mut() {
        transform.rotation = orientation_quat(die.rotation);
    }
}
