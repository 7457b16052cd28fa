//! Enemy patrol and combat
//!
//! Enemies walk a fixed patrol around their spawn point and trade hits
//! with the player's attack swings. Projectiles are part of the enemy
//! contract, though no current spawn policy fires them automatically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Entity, EntityId, EntityKind};
use super::state::GameState;
use crate::tuning::Tuning;

/// A patrolling enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Hit points; removed from the arena at zero
    pub health: i32,
    /// Patrol speed in world units per second
    pub speed: f32,
    /// Patrol direction, -1 (left) or +1 (right)
    pub direction: f32,
    /// Patrol anchor (spawn x)
    pub origin_x: f32,
    /// Maximum displacement from the anchor before turning
    pub patrol_radius: f32,
    /// Post-hit feedback window; cannot be struck again while > 0
    pub hit_flash_left: f32,
}

impl Enemy {
    /// Stats scale with the current difficulty level
    pub fn new(origin_x: f32, level: u32, tuning: &Tuning) -> Self {
        Self {
            health: tuning.enemy_base_health + (level / tuning.enemy_health_level_step) as i32,
            speed: tuning.enemy_base_speed + tuning.enemy_speed_per_level * level as f32,
            direction: -1.0,
            origin_x,
            patrol_radius: tuning.enemy_patrol_radius,
            hit_flash_left: 0.0,
        }
    }

    /// The art faces left; mirror the sprite when walking right
    pub fn flip_x(&self) -> bool {
        self.direction > 0.0
    }

    /// Renderer tint while the post-hit window runs
    pub fn hit_flashing(&self) -> bool {
        self.hit_flash_left > 0.0
    }
}

/// Advance every live enemy's patrol and decay hit feedback
pub(crate) fn update_enemies(state: &mut GameState, dt: f32) {
    for (_, entity) in state.entities.iter_mut() {
        let Entity { pos, kind } = entity;
        let EntityKind::Enemy(enemy) = kind else {
            continue;
        };

        pos.x += enemy.speed * enemy.direction * dt;

        // Turn around at the patrol limits
        if enemy.direction < 0.0 && pos.x <= enemy.origin_x - enemy.patrol_radius {
            enemy.direction = 1.0;
        } else if enemy.direction > 0.0 && pos.x >= enemy.origin_x + enemy.patrol_radius {
            enemy.direction = -1.0;
        }

        if enemy.hit_flash_left > 0.0 {
            enemy.hit_flash_left = (enemy.hit_flash_left - dt).max(0.0);
        }
    }
}

/// Apply one attack swing to an enemy. Idempotent while the post-hit
/// window is pending, so one swing cannot land twice.
pub(crate) fn strike(state: &mut GameState, id: EntityId) {
    let Some(entity) = state.entities.get_mut(id) else {
        return;
    };
    let EntityKind::Enemy(enemy) = &mut entity.kind else {
        return;
    };
    if enemy.hit_flash_left > 0.0 {
        return;
    }

    enemy.health -= 1;
    enemy.hit_flash_left = state.tuning.enemy_hit_flash;
    let defeated = enemy.health <= 0;

    if defeated {
        state.entities.remove(id);
        state.enemies_defeated += 1;
        state.score += state.tuning.enemy_score;
        log::info!("enemy defeated ({} total)", state.enemies_defeated);
    }
}

/// Fire a projectile from an enemy toward the player's side of the
/// patrol. Exposed for extension; returns the projectile handle.
pub fn fire_projectile(state: &mut GameState, enemy_id: EntityId) -> Option<EntityId> {
    let entity = state.entities.get(enemy_id)?;
    let EntityKind::Enemy(enemy) = &entity.kind else {
        return None;
    };
    let pos = entity.pos;
    let vel = Vec2::new(enemy.direction * -state.tuning.projectile_speed, 0.0);
    let ttl = state.tuning.projectile_lifetime;
    Some(state.entities.insert(pos, EntityKind::Projectile { vel, ttl }))
}

/// Integrate projectiles, culling expired ones and those left too far
/// behind the player
pub(crate) fn update_projectiles(state: &mut GameState, player_x: f32, dt: f32) {
    for (_, entity) in state.entities.iter_mut() {
        let Entity { pos, kind } = entity;
        let EntityKind::Projectile { vel, ttl } = kind else {
            continue;
        };
        *pos += *vel * dt;
        *ttl -= dt;
    }

    let cull_behind = state.tuning.projectile_cull_behind;
    state.entities.retain(|_, entity| match &entity.kind {
        EntityKind::Projectile { ttl, .. } => {
            *ttl > 0.0 && entity.pos.x >= player_x - cull_behind
        }
        _ => true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_enemy(state: &mut GameState, x: f32, level: u32) -> EntityId {
        let enemy = Enemy::new(x, level, &state.tuning);
        state
            .entities
            .insert(Vec2::new(x, 140.0), EntityKind::Enemy(enemy))
    }

    fn enemy_of(state: &GameState, id: EntityId) -> &Enemy {
        match &state.entities.get(id).unwrap().kind {
            EntityKind::Enemy(enemy) => enemy,
            other => panic!("expected enemy, got {other:?}"),
        }
    }

    #[test]
    fn test_stats_scale_with_difficulty() {
        let tuning = Tuning::default();
        let enemy = Enemy::new(0.0, 6, &tuning);
        assert_eq!(enemy.health, 4); // 2 + 6/3
        assert_eq!(enemy.speed, 60.0); // 30 + 5*6
        assert_eq!(enemy.direction, -1.0);

        let rookie = Enemy::new(0.0, 1, &tuning);
        assert_eq!(rookie.health, 2);
        assert_eq!(rookie.speed, 35.0);
    }

    #[test]
    fn test_patrol_turns_at_limits() {
        let mut state = GameState::new(1);
        let id = spawn_enemy(&mut state, 1000.0, 1);

        // Walk left until the near limit flips the direction
        for _ in 0..400 {
            update_enemies(&mut state, 1.0 / 60.0);
        }
        let entity = state.entities.get(id).unwrap();
        let EntityKind::Enemy(enemy) = &entity.kind else {
            unreachable!()
        };
        assert_eq!(enemy.direction, 1.0);
        assert!(entity.pos.x >= 800.0 - 1.0);
        assert!(enemy.flip_x());

        // And back right until the far limit
        for _ in 0..800 {
            update_enemies(&mut state, 1.0 / 60.0);
        }
        let entity = state.entities.get(id).unwrap();
        let EntityKind::Enemy(enemy) = &entity.kind else {
            unreachable!()
        };
        assert_eq!(enemy.direction, -1.0);
        assert!(entity.pos.x <= 1200.0 + 1.0);
    }

    #[test]
    fn test_strike_is_idempotent_during_flash() {
        let mut state = GameState::new(1);
        let id = spawn_enemy(&mut state, 500.0, 1);
        assert_eq!(enemy_of(&state, id).health, 2);

        strike(&mut state, id);
        assert_eq!(enemy_of(&state, id).health, 1);
        assert!(enemy_of(&state, id).hit_flashing());

        // Re-reported overlap inside the same swing does nothing
        strike(&mut state, id);
        assert_eq!(enemy_of(&state, id).health, 1);

        // After the window the next swing lands and defeats it
        update_enemies(&mut state, 0.11);
        strike(&mut state, id);
        assert!(state.entities.get(id).is_none());
        assert_eq!(state.enemies_defeated, 1);
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_strike_on_stale_handle_is_noop() {
        let mut state = GameState::new(1);
        let id = spawn_enemy(&mut state, 500.0, 1);
        state.entities.remove(id);
        strike(&mut state, id);
        assert_eq!(state.enemies_defeated, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_projectile_flies_and_expires() {
        let mut state = GameState::new(1);
        let id = spawn_enemy(&mut state, 500.0, 1);
        let projectile = fire_projectile(&mut state, id).unwrap();

        // Enemy walks left, so the shot goes right at projectile speed
        let EntityKind::Projectile { vel, .. } = state.entities.get(projectile).unwrap().kind
        else {
            panic!("expected projectile");
        };
        assert_eq!(vel.x, 150.0);

        // Lifetime bound
        update_projectiles(&mut state, 500.0, 3.1);
        assert!(state.entities.get(projectile).is_none());
    }

    #[test]
    fn test_projectile_culled_behind_player() {
        let mut state = GameState::new(1);
        let id = spawn_enemy(&mut state, 100.0, 1);
        let projectile = fire_projectile(&mut state, id).unwrap();

        // Player far ahead: the shot is more than 200 units behind
        update_projectiles(&mut state, 400.0, 1.0 / 60.0);
        assert!(state.entities.get(projectile).is_none());
    }
}
