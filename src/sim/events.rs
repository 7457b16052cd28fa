//! Per-tick frame events for host collaborators
//!
//! One-shot effects the simulation cannot perform itself (sounds, HUD
//! refresh, tilemap placement, transient VFX) are queued on the game
//! state and drained by the host after each tick.

/// Named sound effects for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Pickup chirp
    CoinPickup,
    /// Roar played when an enemy spawns
    EnemyRoar,
}

/// One-shot event raised during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    PlaySound(Sound),
    /// Ground tiles `[from_tile, to_tile)` were generated; the tilemap
    /// collaborator should place them on the ground row
    GroundExtended { from_tile: u32, to_tile: u32 },
    /// Sparkle at a collected coin's position
    CoinSparkle { x: f32, y: f32 },
    /// Floating "+1" indicator above a consumed health power-up
    HealPopup { x: f32, y: f32 },
    /// Health or score changed this tick; refresh hearts and score text.
    /// `health` is already clamped for display.
    HudChanged {
        health: i32,
        max_health: i32,
        score: u64,
    },
    /// The run ended; present the terminal view with the final score
    GameOver { score: u64 },
}
