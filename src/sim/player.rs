//! Player controller: input intent, posture, attack gating and damage
//!
//! Runs first in the tick order. Movement commands go to the physics
//! collaborator; the animation clip selected here is what the renderer
//! plays this frame. Illegal transition attempts (jump while crouched,
//! attack mid-swing) are silently ignored by the guards, never errors.

use super::events::FrameEvent;
use super::physics::PhysicsPort;
use super::state::{Activity, Facing, GamePhase, GameState, Posture};
use super::tick::TickInput;
use crate::consts::{PLAYER_CROUCHING_HITBOX, PLAYER_STANDING_HITBOX};

/// Resolve input into movement, posture and the animation state machine
pub(crate) fn update(
    state: &mut GameState,
    input: &TickInput,
    physics: &mut dyn PhysicsPort,
    dt: f32,
) {
    let grounded = physics.player_grounded();
    let velocity_y = physics.player_velocity_y();

    let player = &mut state.player;

    // Attack clip countdown; the attack flag is the countdown itself
    if player.attack_left > 0.0 {
        player.attack_left = (player.attack_left - dt).max(0.0);
    }

    // Horizontal intent; facing follows the held direction
    let mut vx = 0.0;
    if input.left {
        vx = -state.tuning.run_speed;
        player.facing = Facing::Left;
    } else if input.right {
        vx = state.tuning.run_speed;
        player.facing = Facing::Right;
    }

    // Crouch: grounded and not mid-swing. Movement stops and the hitbox
    // shrinks; standing back up restores it.
    let want_crouch = input.down && grounded && !player.attacking();
    if want_crouch && !player.crouching() {
        player.posture = Posture::Crouching;
        physics.set_player_hitbox(PLAYER_CROUCHING_HITBOX);
    } else if !want_crouch && player.crouching() {
        player.posture = Posture::Standing;
        physics.set_player_hitbox(PLAYER_STANDING_HITBOX);
    }
    if player.crouching() {
        vx = 0.0;
    }
    physics.set_player_velocity_x(vx);

    // Jump is level-triggered (held), unlike the edge-triggered attack
    if input.up && grounded && !player.attacking() && !player.crouching() {
        physics.set_player_velocity(vx, state.tuning.jump_velocity);
    }

    // Attack: edge-triggered, grounded, standing; uninterruptible until
    // the countdown clears it
    if input.attack_pressed && grounded && !player.attacking() && !player.crouching() {
        player.attack_left = state.tuning.attack_duration;
        physics.set_player_velocity_x(0.0);
    }

    // Animation state machine, highest priority first
    let airborne = !grounded;
    let player = &mut state.player;
    player.activity = if player.attacking() {
        Activity::Attacking
    } else if player.crouching() {
        Activity::Idle
    } else if airborne {
        if velocity_y < 0.0 {
            Activity::Jumping
        } else {
            Activity::Falling
        }
    } else if input.left || input.right {
        Activity::Running
    } else {
        Activity::Idle
    };

    // Development shortcut
    if input.debug_damage_pressed {
        take_damage(state, physics, 1);
    }
}

/// Advance the invincibility flash sequence; when the last half-cycle
/// ends, visibility is restored and damage applies again
pub(crate) fn update_invincibility(state: &mut GameState, dt: f32) {
    let player = &mut state.player;
    if player.flashes_left == 0 {
        return;
    }
    player.flash_timer -= dt;
    while player.flash_timer <= 0.0 && player.flashes_left > 0 {
        player.flashes_left -= 1;
        player.flash_timer += state.tuning.flash_half_cycle;
    }
    if player.flashes_left == 0 {
        player.flash_timer = 0.0;
    }
}

/// Apply damage unless an invincibility window is active. Fatal damage
/// starts the death transition; anything else starts the flash window.
pub(crate) fn take_damage(state: &mut GameState, physics: &mut dyn PhysicsPort, amount: i32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.player.invincible() {
        return;
    }

    state.player.health -= amount;
    if state.player.health_raw() <= 0 {
        die(state, physics);
        return;
    }

    // The flash sequence IS the invincibility window
    state.player.flashes_left = state.tuning.invincibility_flashes;
    state.player.flash_timer = state.tuning.flash_half_cycle;
}

/// Fatal-hit transition: freeze control, pop the body upward, schedule
/// the game-over screen. Cancels any pending flash sequence.
fn die(state: &mut GameState, physics: &mut dyn PhysicsPort) {
    state.phase = GamePhase::Dying;
    state.player.flashes_left = 0;
    state.player.flash_timer = 0.0;
    state.player.attack_left = 0.0;
    state.player.death_timer = state.tuning.death_delay;
    physics.set_player_velocity(0.0, state.tuning.death_impulse_y);
    log::info!("player died with score {}", state.score);
}

/// Count down the dying pause, then present the terminal screen
pub(crate) fn update_death(state: &mut GameState, dt: f32) {
    state.player.death_timer -= dt;
    if state.player.death_timer <= 0.0 {
        state.phase = GamePhase::GameOver;
        state.emit(FrameEvent::GameOver { score: state.score });
        log::info!("game over, final score {}", state.score);
    }
}

/// Consume a health power-up: heal one heart when below max. The pickup
/// feedback only plays when something was actually restored.
pub(crate) fn collect_power_up(state: &mut GameState, x: f32, y: f32) {
    if state.player.health() < state.player.max_health {
        state.player.health += 1;
        state.emit(FrameEvent::HealPopup { x, y });
    }
}
