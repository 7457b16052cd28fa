//! Procedural ground strip
//!
//! The walkable ground is a single tile row extended ahead of the player
//! as they advance, up to a fixed world-width cap. Tiles are never
//! regenerated or removed; the frontier only moves forward.

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_GROUND_TILES, WORLD_WIDTH_TILES};

/// Ground generation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    /// Ground exists for every tile index below this; never decreases
    frontier: u32,
}

impl Default for WorldState {
    fn default() -> Self {
        Self {
            frontier: INITIAL_GROUND_TILES,
        }
    }
}

impl WorldState {
    pub fn frontier(&self) -> u32 {
        self.frontier
    }

    pub fn ground_at(&self, tile_x: u32) -> bool {
        tile_x < self.frontier
    }

    /// Extend ground so it covers `lookahead` tiles past the player,
    /// bounded by the world cap. Returns the newly generated tile range,
    /// or `None` when the player has not advanced past the trigger
    /// threshold. Idempotent for a non-advancing player.
    pub fn ensure_generated(&mut self, player_tile_x: u32, lookahead: u32) -> Option<(u32, u32)> {
        let target = player_tile_x.saturating_add(lookahead).min(WORLD_WIDTH_TILES);
        if target <= self.frontier {
            return None;
        }
        let from = self.frontier;
        self.frontier = target;
        Some((from, target))
    }
}
