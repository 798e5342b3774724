//! End-to-end roll sequences driven without the render loop.

use bevy::math::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::FRAC_PI_2;

use tumbledice::dice3d::{
    align_target, random_roll_target, step_animation, RollAnimation, RollSettings,
};

const DT: f32 = 1.0 / 60.0;

/// Run one full animation to rest, returning the resolved face and the
/// number of ticks spent in each phase.
fn run_to_rest(
    rotation: &mut Vec3,
    anim: &mut RollAnimation,
    settings: &RollSettings,
) -> (usize, u32, u32) {
    let mut tumble_ticks = 0;
    let mut align_ticks = 0;
    let mut resolved = None;

    for _ in 0..10_000 {
        match anim {
            RollAnimation::Tumbling { .. } => tumble_ticks += 1,
            RollAnimation::Aligning { .. } => align_ticks += 1,
            RollAnimation::Idle => break,
        }
        if let Some(face) = step_animation(anim, rotation, DT, settings) {
            resolved = Some(face);
        }
    }

    assert!(anim.is_idle(), "animation never settled");
    let face = resolved.expect("tumble completion should resolve a face");
    (face, tumble_ticks, align_ticks)
}

#[test]
fn full_roll_runs_tumble_then_align_then_idle() {
    let settings = RollSettings::default();
    let mut rng = StdRng::seed_from_u64(42);

    let mut rotation = Vec3::ZERO;
    let mut anim = RollAnimation::default();
    anim.start_tumble(rotation, random_roll_target(&mut rng));

    let (face, tumble_ticks, align_ticks) = run_to_rest(&mut rotation, &mut anim, &settings);

    assert!(face < 6);
    assert_eq!(rotation, align_target(face));

    // Both phases ran for their configured durations, within a tick or two.
    let tumble_secs = tumble_ticks as f32 * DT;
    assert!(
        (tumble_secs - 2.0).abs() <= 2.0 * DT,
        "tumble took {tumble_secs}s"
    );
    let align_secs = align_ticks as f32 * DT;
    assert!(
        (align_secs - 0.5).abs() <= 2.0 * DT,
        "align took {align_secs}s"
    );
}

#[test]
fn rest_pose_is_a_multiple_of_quarter_turn() {
    let settings = RollSettings::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let mut rotation = Vec3::ZERO;
        let mut anim = RollAnimation::default();
        anim.start_tumble(rotation, random_roll_target(&mut rng));
        run_to_rest(&mut rotation, &mut anim, &settings);

        for component in rotation.to_array() {
            assert!(
                component == 0.0 || component.abs() == FRAC_PI_2,
                "unexpected rest angle {component}"
            );
        }
    }
}

#[test]
fn repeated_rolls_do_not_compound() {
    let settings = RollSettings::default();
    let mut rng = StdRng::seed_from_u64(11);

    let mut rotation = Vec3::ZERO;
    let mut anim = RollAnimation::default();

    // Roll to rest twice from whatever pose the first roll left behind; the
    // target is absolute, so the second roll settles just like the first.
    for _ in 0..2 {
        anim.start_tumble(rotation, random_roll_target(&mut rng));
        let (face, _, _) = run_to_rest(&mut rotation, &mut anim, &settings);
        assert_eq!(rotation, align_target(face));
    }
}

#[test]
fn custom_durations_scale_the_phases() {
    let settings = RollSettings {
        tumble_duration_ms: 600,
        align_duration_ms: 120,
        ..RollSettings::default()
    };
    let mut rng = StdRng::seed_from_u64(23);

    let mut rotation = Vec3::ZERO;
    let mut anim = RollAnimation::default();
    anim.start_tumble(rotation, random_roll_target(&mut rng));

    let (_, tumble_ticks, align_ticks) = run_to_rest(&mut rotation, &mut anim, &settings);
    assert!((tumble_ticks as f32 * DT - 0.6).abs() <= 2.0 * DT);
    assert!((align_ticks as f32 * DT - 0.12).abs() <= 2.0 * DT);
}
