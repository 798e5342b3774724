//! Die registry operations, roll kickoff, and the status display.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

use crate::dice3d::animation::RollAnimation;
use crate::dice3d::roll::{random_roll_target, FACE_NORMALS};
use crate::dice3d::settings::RollSettings;
use crate::dice3d::types::*;

use super::rendering::{face_orientation, FACE_OFFSET};

/// Spawn a die at a uniformly random position and attach it to the scene:
/// a cube body with one textured quad child per face.
pub fn spawn_die(
    commands: &mut Commands,
    assets: &DiceAssets,
    settings: &RollSettings,
    rng: &mut StdRng,
) -> Entity {
    let extent = settings.spawn_extent;
    let position = if extent > 0.0 {
        Vec3::new(
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
        )
    } else {
        Vec3::ZERO
    };

    commands
        .spawn((
            PbrBundle {
                mesh: assets.body_mesh.clone(),
                material: assets.body_material.clone(),
                transform: Transform::from_translation(position),
                ..default()
            },
            Die::default(),
            RollAnimation::default(),
        ))
        .with_children(|parent| {
            for (normal, index) in FACE_NORMALS {
                parent.spawn(PbrBundle {
                    mesh: assets.face_mesh.clone(),
                    material: assets.face_materials[index].clone(),
                    transform: Transform::from_translation(normal * FACE_OFFSET)
                        .with_rotation(face_orientation(normal)),
                    ..default()
                });
            }
        })
        .id()
}

/// Append a new die to the registry and the scene graph.
pub fn handle_add_requests(
    mut requests: EventReader<AddDieRequest>,
    mut commands: Commands,
    mut registry: ResMut<DiceRegistry>,
    assets: Res<DiceAssets>,
    settings: Res<RollSettings>,
    mut rng: ResMut<RollRng>,
) {
    for _ in requests.read() {
        let entity = spawn_die(&mut commands, &assets, &settings, &mut rng.0);
        registry.push(entity);
        info!("added die ({} in play)", registry.len());
    }
}

/// Detach the most recently added die; no-op when the registry is empty.
pub fn handle_remove_requests(
    mut requests: EventReader<RemoveDieRequest>,
    mut commands: Commands,
    mut registry: ResMut<DiceRegistry>,
) {
    for _ in requests.read() {
        if let Some(entity) = registry.pop() {
            commands.entity(entity).despawn_recursive();
            info!("removed die ({} in play)", registry.len());
        }
    }
}

/// Start a fresh tumble on every registered die, superseding whatever
/// animation is already in flight. Rolling zero dice is a no-op.
pub fn start_requested_rolls(
    mut requests: EventReader<RollRequest>,
    mut rng: ResMut<RollRng>,
    mut dice: Query<(&mut Die, &mut RollAnimation)>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let mut rolled = 0;
    for (mut die, mut anim) in dice.iter_mut() {
        die.last_face = None;
        let target = random_roll_target(&mut rng.0);
        anim.start_tumble(die.rotation, target);
        rolled += 1;
    }
    if rolled > 0 {
        info!("rolling {} dice", rolled);
    }
}

/// Refresh the status line: die count, controls, and the settled face
/// values once every die has come to rest.
pub fn update_hud(
    registry: Res<DiceRegistry>,
    dice: Query<(&Die, &RollAnimation)>,
    mut text: Query<&mut Text, With<HudText>>,
) {
    let all_idle = dice.iter().all(|(_, anim)| anim.is_idle());
    let faces: Vec<usize> = if all_idle {
        dice.iter().filter_map(|(die, _)| die.last_face).collect()
    } else {
        Vec::new()
    };

    for mut text in text.iter_mut() {
        text.sections[0].value = hud_line(registry.len(), &faces);
    }
}

fn hud_line(count: usize, faces: &[usize]) -> String {
    let mut line = format!("Dice: {}  |  SPACE roll - A add - R remove", count);
    if !faces.is_empty() {
        let values: Vec<String> = faces.iter().map(|face| (face + 1).to_string()).collect();
        line.push_str(&format!("\nShowing: {}", values.join(" ")));
    }
    line
}
