//! Keyboard bindings for the three user-facing entry points.

use bevy::prelude::*;

use crate::dice3d::types::{AddDieRequest, RemoveDieRequest, RollRequest};

/// SPACE rolls, A adds a die, R removes the last one.
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut roll: EventWriter<RollRequest>,
    mut add: EventWriter<AddDieRequest>,
    mut remove: EventWriter<RemoveDieRequest>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        roll.send(RollRequest);
    }
    if keyboard.just_pressed(KeyCode::KeyA) {
        add.send(AddDieRequest);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        remove.send(RemoveDieRequest);
    }
}
