//! Game state and core simulation types
//!
//! Everything the simulation owns lives in [`GameState`]; there are no
//! globals. The player body's position and velocity are the one
//! exception - those belong to the physics collaborator and are read
//! through the physics port each tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::events::FrameEvent;
use super::spawn::Spawners;
use super::world::WorldState;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Fatal hit landed; control frozen until the game-over screen
    Dying,
    /// Run ended, waiting for the restart action
    GameOver,
}

/// Player stance while grounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    Standing,
    Crouching,
}

/// What the player is doing; exactly one holds per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Idle,
    Running,
    Jumping,
    Falling,
    Attacking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Animation clips the renderer can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimClip {
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
    Crouch,
}

impl AnimClip {
    pub fn name(self) -> &'static str {
        match self {
            AnimClip::Idle => "idle",
            AnimClip::Run => "run",
            AnimClip::Jump => "jump",
            AnimClip::Fall => "fall",
            AnimClip::Attack => "attack",
            AnimClip::Crouch => "crouch",
        }
    }
}

/// Player simulation state (body position lives in the physics engine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub posture: Posture,
    pub activity: Activity,
    pub facing: Facing,
    /// Raw hit points; may dip below zero between a hit and the death
    /// check. Display through [`PlayerState::health`], which clamps.
    pub(crate) health: i32,
    pub max_health: i32,
    /// Seconds left on the running attack clip; attacking while > 0
    pub attack_left: f32,
    /// Invincibility flash half-cycles remaining; invincible while > 0
    pub flashes_left: u32,
    /// Seconds left in the current half-cycle
    pub flash_timer: f32,
    /// Seconds until the game-over screen once dying
    pub death_timer: f32,
}

impl PlayerState {
    pub fn new(max_health: i32) -> Self {
        Self {
            posture: Posture::Standing,
            activity: Activity::Idle,
            facing: Facing::Right,
            health: max_health,
            max_health,
            attack_left: 0.0,
            flashes_left: 0,
            flash_timer: 0.0,
            death_timer: 0.0,
        }
    }

    /// Observable health, clamped to `[0, max_health]`
    pub fn health(&self) -> i32 {
        self.health.clamp(0, self.max_health)
    }

    pub(crate) fn health_raw(&self) -> i32 {
        self.health
    }

    /// Damage is ignored while the flash sequence runs
    pub fn invincible(&self) -> bool {
        self.flashes_left > 0
    }

    pub fn attacking(&self) -> bool {
        self.attack_left > 0.0
    }

    pub fn crouching(&self) -> bool {
        self.posture == Posture::Crouching
    }

    /// Sprite visibility during the invincibility flash; dim on odd
    /// half-cycles, restored when the sequence ends
    pub fn visible(&self) -> bool {
        self.flashes_left % 2 == 0
    }

    /// Clip the renderer should play this frame
    pub fn clip(&self) -> AnimClip {
        if self.attacking() {
            AnimClip::Attack
        } else if self.crouching() {
            AnimClip::Crouch
        } else {
            match self.activity {
                Activity::Idle => AnimClip::Idle,
                Activity::Running => AnimClip::Run,
                Activity::Jumping => AnimClip::Jump,
                Activity::Falling => AnimClip::Fall,
                Activity::Attacking => AnimClip::Attack,
            }
        }
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (coin tiers, track jitter)
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,

    pub player: PlayerState,
    /// Spawned coins, enemies, projectiles and power-ups
    pub entities: Arena,
    pub world: WorldState,
    pub spawners: Spawners,

    /// Monotone within a life
    pub score: u64,
    pub coins_collected: u32,
    pub enemies_defeated: u32,
    /// Never decreases; +1 per `coins_per_level` coins collected
    pub difficulty_level: u32,

    /// One-shot events for the host, drained after each tick
    #[serde(skip)]
    pub(crate) events: Vec<FrameEvent>,
}

impl GameState {
    /// Fresh run with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: PlayerState::new(tuning.max_health),
            entities: Arena::new(),
            world: WorldState::default(),
            spawners: Spawners::new(&tuning),
            score: 0,
            coins_collected: 0,
            enemies_defeated: 0,
            difficulty_level: 1,
            events: Vec::new(),
            tuning,
        }
    }

    /// Reset the run after game over. The RNG is reseeded so the new run
    /// does not replay the previous coin track.
    pub fn restart(&mut self) {
        *self = Self::with_tuning(self.seed.wrapping_add(1), self.tuning.clone());
    }

    pub(crate) fn emit(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    /// Take this tick's events for the host collaborators
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.health(), 3);
        assert_eq!(state.difficulty_level, 1);
        assert!(state.entities.is_empty());
        assert_eq!(state.world.frontier(), crate::consts::INITIAL_GROUND_TILES);
    }

    #[test]
    fn test_observable_health_clamps() {
        let mut player = PlayerState::new(3);
        player.health = -2;
        assert_eq!(player.health(), 0);
        assert_eq!(player.health_raw(), -2);
        player.health = 99;
        assert_eq!(player.health(), 3);
    }

    #[test]
    fn test_clip_priority() {
        let mut player = PlayerState::new(3);
        player.activity = Activity::Running;
        assert_eq!(player.clip(), AnimClip::Run);

        player.posture = Posture::Crouching;
        assert_eq!(player.clip(), AnimClip::Crouch);

        // Attack outranks everything else
        player.attack_left = 0.3;
        assert_eq!(player.clip(), AnimClip::Attack);
    }

    #[test]
    fn test_flash_visibility_alternates() {
        let mut player = PlayerState::new(3);
        assert!(player.visible());
        player.flashes_left = 11;
        assert!(!player.visible());
        player.flashes_left = 10;
        assert!(player.visible());
        player.flashes_left = 0;
        assert!(player.visible());
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(3);
        state.score = 500;
        state.phase = GamePhase::GameOver;
        state.player.health = 0;

        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.health(), 3);
        // New run, new RNG stream
        assert_eq!(state.seed, 4);
    }
}
