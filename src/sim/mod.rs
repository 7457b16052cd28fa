//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (arena slot order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod enemy;
pub mod events;
pub mod physics;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use arena::{Arena, CoinTier, Entity, EntityId, EntityKind, PowerUpKind};
pub use enemy::Enemy;
pub use events::{FrameEvent, Sound};
pub use physics::{ContactKind, Hitbox, Overlap, PhysicsPort};
pub use spawn::Spawners;
pub use state::{Activity, AnimClip, Facing, GamePhase, GameState, PlayerState, Posture};
pub use tick::{TickInput, tick};
pub use world::WorldState;
