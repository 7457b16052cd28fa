//! Oak Woods - a side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, world, spawning, combat)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, physics integration, audio and UI are host collaborators.
//! Each frame the host builds a [`sim::TickInput`] from its key state,
//! calls [`sim::tick`] with its [`sim::PhysicsPort`] implementation, then
//! reads [`sim::GameState`] for drawing and drains the frame events for
//! sounds, HUD text and tilemap placement.

pub mod sim;
pub mod tuning;

pub use sim::{GamePhase, GameState, PhysicsPort, TickInput, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use crate::sim::Hitbox;

    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Ground tile size in world units
    pub const TILE_SIZE: f32 = 24.0;
    /// Absolute world width cap, in tiles
    pub const WORLD_WIDTH_TILES: u32 = 500;
    /// Tiles kept generated ahead of the player
    pub const GROUND_LOOKAHEAD_TILES: u32 = 20;
    /// Tiles present before the first tick
    pub const INITIAL_GROUND_TILES: u32 = 20;
    /// Row of the walkable strip within the tile layer
    pub const GROUND_ROW: u32 = 7;
    /// Vertical offset of the tile layer in world units
    pub const GROUND_LAYER_OFFSET_Y: f32 = 16.0;

    /// Viewport height in world units (y grows downward)
    pub const WORLD_HEIGHT: f32 = 180.0;
    /// Downward gravity the physics collaborator applies to the player body
    pub const WORLD_GRAVITY_Y: f32 = 500.0;

    /// Player spawn point
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 120.0;

    /// Standing collision box (offset into the sprite frame)
    pub const PLAYER_STANDING_HITBOX: Hitbox = Hitbox {
        width: 20.0,
        height: 38.0,
        offset_x: 18.0,
        offset_y: 16.0,
    };
    /// Crouching collision box
    pub const PLAYER_CROUCHING_HITBOX: Hitbox = Hitbox {
        width: 20.0,
        height: 25.0,
        offset_x: 18.0,
        offset_y: 29.0,
    };
}

/// Tile index covering a world x coordinate
#[inline]
pub fn world_to_tile_x(x: f32) -> u32 {
    (x / consts::TILE_SIZE).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_tile_x() {
        assert_eq!(world_to_tile_x(0.0), 0);
        assert_eq!(world_to_tile_x(23.9), 0);
        assert_eq!(world_to_tile_x(24.0), 1);
        assert_eq!(world_to_tile_x(100.0), 4);
        // Positions left of the world clamp to tile 0
        assert_eq!(world_to_tile_x(-50.0), 0);
    }
}
