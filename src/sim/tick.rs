//! Fixed timestep simulation tick
//!
//! One `tick` per rendered frame, in a fixed order: player intent,
//! world generation, spawn clocks, enemy and projectile update, overlap
//! consumption, HUD refresh. All timers are accumulators advanced by
//! `dt`; nothing suspends or blocks.

use super::arena::{EntityId, EntityKind};
use super::events::{FrameEvent, Sound};
use super::physics::{ContactKind, PhysicsPort};
use super::state::{GamePhase, GameState};
use super::{enemy, player, spawn};
use crate::consts::GROUND_LOOKAHEAD_TILES;
use crate::world_to_tile_x;

/// Input actions for a single tick, sampled by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held: run left
    pub left: bool,
    /// Held: run right
    pub right: bool,
    /// Held: jump (level-triggered by design, unlike attack)
    pub up: bool,
    /// Held: crouch
    pub down: bool,
    /// Edge: attack key went down this frame
    pub attack_pressed: bool,
    /// Edge: restart from the game-over screen
    pub restart_pressed: bool,
    /// Edge: development shortcut, apply one damage
    pub debug_damage_pressed: bool,
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, physics: &mut dyn PhysicsPort, dt: f32) {
    let hud_before = (state.player.health(), state.score);

    match state.phase {
        GamePhase::Playing => {
            state.time_ticks += 1;
            let player_x = physics.player_position().x;

            player::update(state, input, physics, dt);
            player::update_invincibility(state, dt);

            if let Some((from, to)) = state
                .world
                .ensure_generated(world_to_tile_x(player_x), GROUND_LOOKAHEAD_TILES)
            {
                log::debug!("ground extended to tile {to}");
                state.emit(FrameEvent::GroundExtended {
                    from_tile: from,
                    to_tile: to,
                });
            }

            spawn::advance(state, player_x, dt);
            enemy::update_enemies(state, dt);
            enemy::update_projectiles(state, player_x, dt);

            apply_overlaps(state, physics);
        }
        GamePhase::Dying => {
            state.time_ticks += 1;
            player::update_death(state, dt);
        }
        GamePhase::GameOver => {
            if input.restart_pressed {
                state.restart();
            }
        }
    }

    if (state.player.health(), state.score) != hud_before {
        state.emit(FrameEvent::HudChanged {
            health: state.player.health(),
            max_health: state.player.max_health,
            score: state.score,
        });
    }
}

fn contact_kind(kind: &EntityKind) -> ContactKind {
    match kind {
        EntityKind::Coin { .. } => ContactKind::Coin,
        EntityKind::Enemy(_) => ContactKind::Enemy,
        EntityKind::Projectile { .. } => ContactKind::Projectile,
        EntityKind::PowerUp { .. } => ContactKind::PowerUp,
    }
}

/// Consume this tick's overlap report. Attack swings resolve first; the
/// remaining contacts (pickups, damage) mutate disjoint state and apply
/// in report order. Handles gone stale earlier in the tick are skipped.
fn apply_overlaps(state: &mut GameState, physics: &mut dyn PhysicsPort) {
    let overlaps = physics.overlaps();

    if state.player.attacking() {
        for overlap in &overlaps {
            let is_enemy = state
                .entities
                .get(overlap.entity)
                .is_some_and(|entity| matches!(entity.kind, EntityKind::Enemy(_)));
            if overlap.kind == ContactKind::Enemy && is_enemy {
                enemy::strike(state, overlap.entity);
            }
        }
    }

    for overlap in overlaps {
        let Some(entity) = state.entities.get(overlap.entity) else {
            continue;
        };
        // The arena record is authoritative; a mismatched group tag means
        // the report is outdated
        if contact_kind(&entity.kind) != overlap.kind {
            continue;
        }
        match entity.kind {
            EntityKind::Coin { .. } => collect_coin(state, overlap.entity),
            EntityKind::PowerUp { .. } => {
                let pos = entity.pos;
                state.entities.remove(overlap.entity);
                player::collect_power_up(state, pos.x, pos.y);
            }
            EntityKind::Projectile { .. } => {
                state.entities.remove(overlap.entity);
                player::take_damage(state, physics, 1);
            }
            EntityKind::Enemy(_) => {
                player::take_damage(state, physics, 1);
            }
        }
    }
}

/// Coin pickup: score, counter and feedback. The difficulty check runs in
/// the coin spawner off the same counter.
fn collect_coin(state: &mut GameState, id: EntityId) {
    let Some(entity) = state.entities.remove(id) else {
        return;
    };
    state.score += state.tuning.coin_score;
    state.coins_collected += 1;
    state.emit(FrameEvent::PlaySound(Sound::CoinPickup));
    state.emit(FrameEvent::CoinSparkle {
        x: entity.pos.x,
        y: entity.pos.y,
    });
}
