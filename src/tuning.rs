//! Data-driven game balance
//!
//! Every number that is a balance decision rather than a structural
//! invariant lives here, so hosts can override it from JSON without
//! touching the simulation. Unspecified fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Gameplay balance values. Times are seconds, distances world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal run speed
    pub run_speed: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_velocity: f32,
    /// Attack clip length (6 frames at 12 fps); the attack flag clears
    /// when this countdown expires
    pub attack_duration: f32,
    pub max_health: i32,

    // === Damage / invincibility ===
    /// Half-cycles in the post-hit visibility flash; the flash sequence
    /// is the invincibility window
    pub invincibility_flashes: u32,
    /// Length of one flash half-cycle
    pub flash_half_cycle: f32,
    /// Delay between the fatal hit and the game-over screen
    pub death_delay: f32,
    /// Upward pop applied to the body on death
    pub death_impulse_y: f32,

    // === Spawn clocks ===
    pub coin_interval: f32,
    pub enemy_interval: f32,
    pub powerup_interval: f32,

    // === Coin track ===
    /// First coin position on the forward track
    pub coin_track_start_x: f32,
    /// Track advance per coin
    pub coin_step: f32,
    /// Uniform jitter applied to each advance
    pub coin_jitter: f32,
    /// Tier heights; the high tier drops by `coin_y_high_per_level` each
    /// difficulty level
    pub coin_y_ground: f32,
    pub coin_y_low: f32,
    pub coin_y_mid: f32,
    pub coin_y_high_base: f32,
    pub coin_y_high_per_level: f32,

    // === Enemies ===
    /// Spawn offset ahead of the player
    pub enemy_spawn_lead_x: f32,
    pub enemy_spawn_y: f32,
    pub enemy_base_health: i32,
    /// Levels per extra hit point
    pub enemy_health_level_step: u32,
    pub enemy_base_speed: f32,
    pub enemy_speed_per_level: f32,
    pub enemy_patrol_radius: f32,
    /// Post-hit feedback window; the enemy cannot be struck again inside it
    pub enemy_hit_flash: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    /// Projectiles this far behind the player are culled
    pub projectile_cull_behind: f32,

    // === Power-ups ===
    pub powerup_spawn_lead_x: f32,
    pub powerup_spawn_y: f32,

    // === Scoring / difficulty ===
    pub coin_score: u64,
    pub enemy_score: u64,
    /// Collected coins per difficulty level
    pub coins_per_level: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: 100.0,
            jump_velocity: -250.0,
            attack_duration: 0.5,
            max_health: 3,

            invincibility_flashes: 11,
            flash_half_cycle: 0.1,
            death_delay: 1.0,
            death_impulse_y: -200.0,

            coin_interval: 1.0,
            enemy_interval: 8.0,
            powerup_interval: 6.0,

            coin_track_start_x: 400.0,
            coin_step: 150.0,
            coin_jitter: 30.0,
            coin_y_ground: 155.0,
            coin_y_low: 165.0,
            coin_y_mid: 135.0,
            coin_y_high_base: 100.0,
            coin_y_high_per_level: 5.0,

            enemy_spawn_lead_x: 400.0,
            enemy_spawn_y: 140.0,
            enemy_base_health: 2,
            enemy_health_level_step: 3,
            enemy_base_speed: 30.0,
            enemy_speed_per_level: 5.0,
            enemy_patrol_radius: 200.0,
            enemy_hit_flash: 0.1,
            projectile_speed: 150.0,
            projectile_lifetime: 3.0,
            projectile_cull_behind: 200.0,

            powerup_spawn_lead_x: 300.0,
            powerup_spawn_y: 140.0,

            coin_score: 10,
            enemy_score: 50,
            coins_per_level: 5,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse tuning from JSON, logging and falling back to defaults on a
    /// bad document
    pub fn load_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("Invalid tuning JSON, using defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "coin_interval": 2.5, "max_health": 5 }"#).unwrap();
        assert_eq!(tuning.coin_interval, 2.5);
        assert_eq!(tuning.max_health, 5);
        // Untouched fields fall back to defaults
        assert_eq!(tuning.enemy_interval, 8.0);
        assert_eq!(tuning.coin_step, 150.0);
    }

    #[test]
    fn test_bad_json_falls_back() {
        let tuning = Tuning::load_or_default("not json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_default_matches_reference_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.coin_interval, 1.0);
        assert_eq!(tuning.enemy_interval, 8.0);
        assert_eq!(tuning.powerup_interval, 6.0);
        assert_eq!(tuning.invincibility_flashes, 11);
        assert_eq!(tuning.max_health, 3);
    }
}
