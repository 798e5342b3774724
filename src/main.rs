use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use tumbledice::dice3d::{
    handle_add_requests, handle_input, handle_remove_requests, setup, start_requested_rolls,
    sync_die_transforms, tick_roll_animations, update_hud, AddDieRequest, DiceRegistry,
    RemoveDieRequest, RollRequest, RollRng, RollSettings,
};

/// Animated 3D dice: tumble each die to a random orientation, then snap the
/// face most visible to the camera toward the viewer.
#[derive(Parser)]
#[command(name = "tumbledice")]
#[command(version, about = "Animated 3D dice roller")]
struct Cli {
    /// Number of dice to start with (overrides the settings file)
    #[arg(short, long)]
    dice: Option<usize>,

    /// Path to the roll settings RON file
    #[arg(short = 'f', long = "file", default_value = "dice_settings.ron")]
    settings_file: PathBuf,

    /// Seed the random source for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let mut settings =
        RollSettings::load_from_file(cli.settings_file.to_str().unwrap_or("dice_settings.ron"));
    if let Some(dice) = cli.dice {
        settings.initial_dice = dice;
    }

    let rng = match cli.seed {
        Some(seed) => RollRng::seeded(seed),
        None => RollRng::from_entropy(),
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tumbledice".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                // Keep app logs at info, silence the graphics stack.
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .insert_resource(settings)
        .insert_resource(rng)
        .init_resource::<DiceRegistry>()
        .add_event::<RollRequest>()
        .add_event::<AddDieRequest>()
        .add_event::<RemoveDieRequest>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                handle_input,
                handle_add_requests,
                handle_remove_requests,
                start_requested_rolls,
                tick_roll_animations,
                sync_die_transforms,
            )
                .chain(),
        )
        .add_systems(Update, update_hud.after(tick_roll_animations))
        .run();
}
