use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A die tracked by the registry.
///
/// Rotation is kept as an unbounded Euler triple (radians) instead of the
/// `Transform` quaternion: tumble targets carry extra full revolutions, and
/// a quaternion would collapse the winding before the tween finishes.
/// `sync_die_transforms` mirrors it into the `Transform` every frame.
#[derive(Component, Debug, Clone, Default)]
pub struct Die {
    pub rotation: Vec3,
    /// Face resolved by the most recent completed tumble, cleared when a
    /// new roll starts.
    pub last_face: Option<usize>,
}

#[derive(Component)]
pub struct MainCamera;

/// Marker for the on-screen status text.
#[derive(Component)]
pub struct HudText;

/// Ordered collection of live dice: insertion order is creation order,
/// removal is last-in-first-out. Never holds the same entity twice.
#[derive(Resource, Default)]
pub struct DiceRegistry {
    dice: Vec<Entity>,
}

impl DiceRegistry {
    pub fn push(&mut self, entity: Entity) {
        debug_assert!(!self.dice.contains(&entity));
        self.dice.push(entity);
    }

    /// Remove and return the most recently added die, if any.
    pub fn pop(&mut self) -> Option<Entity> {
        self.dice.pop()
    }

    pub fn last(&self) -> Option<Entity> {
        self.dice.last().copied()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.dice
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

/// Shared mesh/material handles for spawning dice.
///
/// Built once at startup, either textured from the asset server or from the
/// untextured fallback palette when no textures are available.
#[derive(Resource, Clone)]
pub struct DiceAssets {
    pub body_mesh: Handle<Mesh>,
    pub face_mesh: Handle<Mesh>,
    pub body_material: Handle<StandardMaterial>,
    pub face_materials: [Handle<StandardMaterial>; 6],
}

/// Process-wide random source for roll targets and spawn positions.
#[derive(Resource)]
pub struct RollRng(pub StdRng);

impl RollRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Deterministic source for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Start a fresh tumble on every registered die.
#[derive(Event, Debug, Clone, Copy)]
pub struct RollRequest;

/// Spawn a new die at a random position.
#[derive(Event, Debug, Clone, Copy)]
pub struct AddDieRequest;

/// Despawn the most recently added die; no-op when none are left.
#[derive(Event, Debug, Clone, Copy)]
pub struct RemoveDieRequest;
