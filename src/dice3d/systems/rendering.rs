//! Mesh and material construction for dice bodies and their face quads.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::dice3d::types::DiceAssets;

/// Die body edge length.
pub const DIE_SIZE: f32 = 1.0;

/// Face quads sit just off the body surface to avoid z-fighting.
pub const FACE_OFFSET: f32 = DIE_SIZE / 2.0 + 0.001;

/// Texture path for a face index, resolved under the assets directory.
pub fn face_texture_path(index: usize) -> String {
    format!("dice{}.png", index + 1)
}

/// Per-face tint, visible whenever the face texture has not loaded.
fn face_fallback_color(index: usize) -> Color {
    match index {
        0 => Color::srgb(0.93, 0.91, 0.85),
        1 => Color::srgb(0.85, 0.89, 0.93),
        2 => Color::srgb(0.87, 0.93, 0.85),
        3 => Color::srgb(0.93, 0.87, 0.85),
        4 => Color::srgb(0.91, 0.85, 0.93),
        _ => Color::srgb(0.93, 0.93, 0.83),
    }
}

fn body_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(0.06, 0.06, 0.09),
        unlit: true,
        ..default()
    }
}

/// Build the shared dice assets, requesting one texture per face. A failed
/// texture load is non-fatal: the material keeps rendering its fallback
/// tint.
pub fn load_dice_assets(
    asset_server: &AssetServer,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> DiceAssets {
    let face_materials = std::array::from_fn(|index| {
        let texture: Handle<Image> = asset_server.load(face_texture_path(index));
        materials.add(StandardMaterial {
            base_color: face_fallback_color(index),
            base_color_texture: Some(texture),
            unlit: true,
            ..default()
        })
    });

    DiceAssets {
        body_mesh: meshes.add(Cuboid::new(DIE_SIZE, DIE_SIZE, DIE_SIZE)),
        face_mesh: meshes.add(Rectangle::new(DIE_SIZE, DIE_SIZE)),
        body_material: materials.add(body_material()),
        face_materials,
    }
}

/// Untextured variant of the dice assets, for headless use and as the
/// all-fallback appearance.
pub fn untextured_dice_assets(
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> DiceAssets {
    let face_materials = std::array::from_fn(|index| {
        materials.add(StandardMaterial {
            base_color: face_fallback_color(index),
            unlit: true,
            ..default()
        })
    });

    DiceAssets {
        body_mesh: meshes.add(Cuboid::new(DIE_SIZE, DIE_SIZE, DIE_SIZE)),
        face_mesh: meshes.add(Rectangle::new(DIE_SIZE, DIE_SIZE)),
        body_material: materials.add(body_material()),
        face_materials,
    }
}

/// Orient a face quad so its +Z normal points along the face normal.
/// The straight-up and straight-down faces are special-cased to dodge the
/// degenerate rotation arc.
pub fn face_orientation(normal: Vec3) -> Quat {
    if normal.y.abs() > 0.99 {
        if normal.y > 0.0 {
            Quat::from_rotation_x(-FRAC_PI_2)
        } else {
            Quat::from_rotation_x(FRAC_PI_2)
        }
    } else {
        Quat::from_rotation_arc(Vec3::Z, normal)
    }
}
