//! Scene setup: camera, HUD, shared dice assets, and the initial dice.

use bevy::prelude::*;

use crate::dice3d::settings::RollSettings;
use crate::dice3d::types::*;

use super::dice::spawn_die;
use super::rendering::load_dice_assets;

pub fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<RollSettings>,
    mut registry: ResMut<DiceRegistry>,
    mut rng: ResMut<RollRng>,
) {
    commands.spawn((
        Camera3dBundle {
            projection: PerspectiveProjection {
                fov: 75.0_f32.to_radians(),
                near: 0.1,
                far: 1000.0,
                ..default()
            }
            .into(),
            transform: Transform::from_xyz(0.0, 0.0, settings.camera_distance),
            ..default()
        },
        MainCamera,
    ));

    let assets = load_dice_assets(&asset_server, &mut meshes, &mut materials);

    for _ in 0..settings.initial_dice {
        let entity = spawn_die(&mut commands, &assets, &settings, &mut rng.0);
        registry.push(entity);
    }
    info!("spawned {} dice", registry.len());

    commands.insert_resource(assets);

    commands.spawn((
        TextBundle::from_section(
            String::new(),
            TextStyle {
                font_size: 22.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
        HudText,
    ));
}
