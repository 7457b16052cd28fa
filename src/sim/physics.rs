//! Physics collaborator interface
//!
//! The player body (gravity, ground collision, integration) belongs to an
//! external physics engine. The simulation reads the body through this
//! port, issues velocity and hitbox commands, and consumes one overlap
//! report per tick - the explicit per-tick collision query that replaces
//! callback-based overlap subscriptions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::EntityId;

/// Axis-aligned collision box, offset into the sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Collider group the physics engine filed the contact under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Coin,
    Enemy,
    Projectile,
    PowerUp,
}

/// A player-vs-entity contact reported for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub entity: EntityId,
    pub kind: ContactKind,
}

/// Narrow seam to the physics engine, implemented by the host
pub trait PhysicsPort {
    /// Player body position in world units
    fn player_position(&self) -> Vec2;
    /// Player vertical velocity (y grows downward; negative = rising)
    fn player_velocity_y(&self) -> f32;
    /// Whether the player body rests on ground this tick
    fn player_grounded(&self) -> bool;
    /// Set horizontal velocity (run / stop)
    fn set_player_velocity_x(&mut self, vx: f32);
    /// Set both velocity components (jump, death impulse)
    fn set_player_velocity(&mut self, vx: f32, vy: f32);
    /// Swap the player collision box (stand / crouch)
    fn set_player_hitbox(&mut self, hitbox: Hitbox);
    /// Player-vs-entity contacts detected since the last tick
    fn overlaps(&self) -> Vec<Overlap>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Scriptable physics stub for unit tests
    #[derive(Debug, Clone, Default)]
    pub struct TestPhysics {
        pub position: Vec2,
        pub velocity: Vec2,
        pub grounded: bool,
        pub hitbox: Option<Hitbox>,
        pub pending_overlaps: Vec<Overlap>,
    }

    impl TestPhysics {
        pub fn grounded_at(x: f32, y: f32) -> Self {
            Self {
                position: Vec2::new(x, y),
                grounded: true,
                ..Default::default()
            }
        }
    }

    impl PhysicsPort for TestPhysics {
        fn player_position(&self) -> Vec2 {
            self.position
        }

        fn player_velocity_y(&self) -> f32 {
            self.velocity.y
        }

        fn player_grounded(&self) -> bool {
            self.grounded
        }

        fn set_player_velocity_x(&mut self, vx: f32) {
            self.velocity.x = vx;
        }

        fn set_player_velocity(&mut self, vx: f32, vy: f32) {
            self.velocity = Vec2::new(vx, vy);
        }

        fn set_player_hitbox(&mut self, hitbox: Hitbox) {
            self.hitbox = Some(hitbox);
        }

        fn overlaps(&self) -> Vec<Overlap> {
            self.pending_overlaps.clone()
        }
    }
}
