//! Timed entity spawning
//!
//! Three independent accumulator clocks lay out coins, enemies and health
//! power-ups ahead of the player. A fired clock resets to zero - residual
//! time is discarded rather than carried into the next interval.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::{CoinTier, EntityKind, PowerUpKind};
use super::enemy::Enemy;
use super::events::{FrameEvent, Sound};
use super::state::GameState;
use crate::tuning::Tuning;

/// Spawn clocks and the coin forward track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawners {
    /// Seconds accumulated toward the next coin
    pub coin_timer: f32,
    pub enemy_timer: f32,
    pub powerup_timer: f32,
    /// Next coin x on the precomputed forward track, independent of the
    /// player's current position
    pub next_coin_x: f32,
}

impl Spawners {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            coin_timer: 0.0,
            enemy_timer: 0.0,
            powerup_timer: 0.0,
            next_coin_x: tuning.coin_track_start_x,
        }
    }
}

/// Advance all three spawn clocks by one tick
pub(crate) fn advance(state: &mut GameState, player_x: f32, dt: f32) {
    advance_coins(state, dt);
    advance_enemies(state, player_x, dt);
    advance_powerups(state, player_x, dt);
}

fn advance_coins(state: &mut GameState, dt: f32) {
    state.spawners.coin_timer += dt;
    if state.spawners.coin_timer < state.tuning.coin_interval {
        return;
    }
    state.spawners.coin_timer = 0.0;
    spawn_coin(state);
    bump_difficulty(state);
}

fn spawn_coin(state: &mut GameState) {
    let tier = match state.rng.random_range(0..4u8) {
        0 => CoinTier::Ground,
        1 => CoinTier::Low,
        2 => CoinTier::Mid,
        _ => CoinTier::High,
    };
    let x = state.spawners.next_coin_x;
    let y = coin_height(tier, state.difficulty_level, &state.tuning);
    state.entities.insert(Vec2::new(x, y), EntityKind::Coin { tier });

    let jitter = state.tuning.coin_jitter;
    let step = if jitter > 0.0 {
        state.tuning.coin_step + state.rng.random_range(-jitter..=jitter)
    } else {
        state.tuning.coin_step
    };
    state.spawners.next_coin_x = x + step;
}

/// Coin y for a tier at a difficulty level. The high tier climbs as the
/// level rises, demanding harder jumps.
pub fn coin_height(tier: CoinTier, level: u32, tuning: &Tuning) -> f32 {
    match tier {
        CoinTier::Ground => tuning.coin_y_ground,
        CoinTier::Low => tuning.coin_y_low,
        CoinTier::Mid => tuning.coin_y_mid,
        CoinTier::High => tuning.coin_y_high_base - tuning.coin_y_high_per_level * level as f32,
    }
}

/// Step the difficulty level off the collected-coin counter. Latched so
/// each multiple of `coins_per_level` raises the level exactly once, no
/// matter how many spawn intervals pass before the next pickup.
fn bump_difficulty(state: &mut GameState) {
    let target = state.coins_collected / state.tuning.coins_per_level + 1;
    if target > state.difficulty_level {
        log::info!(
            "difficulty level {} -> {} ({} coins collected)",
            state.difficulty_level,
            target,
            state.coins_collected
        );
        state.difficulty_level = target;
    }
}

fn advance_enemies(state: &mut GameState, player_x: f32, dt: f32) {
    state.spawners.enemy_timer += dt;
    if state.spawners.enemy_timer < state.tuning.enemy_interval {
        return;
    }
    state.spawners.enemy_timer = 0.0;

    let x = player_x + state.tuning.enemy_spawn_lead_x;
    let enemy = Enemy::new(x, state.difficulty_level, &state.tuning);
    log::info!(
        "enemy spawned at x={:.0} (level {}, hp {}, speed {:.0})",
        x,
        state.difficulty_level,
        enemy.health,
        enemy.speed
    );
    state
        .entities
        .insert(Vec2::new(x, state.tuning.enemy_spawn_y), EntityKind::Enemy(enemy));
    state.emit(FrameEvent::PlaySound(Sound::EnemyRoar));
}

fn advance_powerups(state: &mut GameState, player_x: f32, dt: f32) {
    state.spawners.powerup_timer += dt;
    if state.spawners.powerup_timer < state.tuning.powerup_interval {
        return;
    }
    state.spawners.powerup_timer = 0.0;

    let pos = Vec2::new(
        player_x + state.tuning.powerup_spawn_lead_x,
        state.tuning.powerup_spawn_y,
    );
    state.entities.insert(
        pos,
        EntityKind::PowerUp {
            kind: PowerUpKind::Health,
        },
    );
}
