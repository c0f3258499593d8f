//! Invader-wave generation and the bomb-emission timing policy.

use rand::Rng;

use crate::entities::{GameState, Invader};

// ── Bomb-counter policy ──────────────────────────────────────────────────────

/// Counter reset range. Fresh counters are drawn uniformly from
/// `[BOMB_COUNTER_MIN, BOMB_COUNTER_MAX)`.
pub const BOMB_COUNTER_MIN: f32 = 0.8;
pub const BOMB_COUNTER_MAX: f32 = 0.85;
/// Countdown applied to every counter each eligible tick.
pub const BOMB_COUNTER_STEP: f32 = 0.01;
/// Per-tick emission probability once a counter has expired. Combined
/// with the counter this gives each invader an irregular, invader-specific
/// bombing cadence rather than a fixed timer.
pub const BOMB_CHANCE: f64 = 0.05;

/// Draw a fresh bomb counter.
pub fn initial_bomb_counter(rng: &mut impl Rng) -> f32 {
    rng.gen_range(BOMB_COUNTER_MIN..BOMB_COUNTER_MAX)
}

// ── Wave spawning ────────────────────────────────────────────────────────────

/// True iff some invader still occupies the spawn row.
pub fn top_row_occupied(state: &GameState) -> bool {
    state.invaders.iter().any(|inv| inv.y == 0)
}

/// Append one wave of invaders along the top row.
///
/// Spawns `min(wave_size, max_invaders - invaders_spawned)` invaders laid
/// out left to right, direction +1, counters freshly drawn. A no-op once
/// the lifetime budget is exhausted.
pub fn spawn_wave(state: &GameState, rng: &mut impl Rng) -> GameState {
    let remaining = state.config.max_invaders - state.invaders_spawned;
    let count = state.config.wave_size.min(remaining);

    let size = state.config.invader_size;
    let mut invaders = state.invaders.clone();
    for i in 0..count {
        invaders.push(Invader {
            x: (size.width + state.config.invader_gap) * i as i32,
            y: 0,
            direction: 1,
            width: size.width,
            height: size.height,
            bomb_counter: initial_bomb_counter(rng),
        });
    }

    if count > 0 {
        log::debug!(
            "spawned wave of {} ({}/{} total)",
            count,
            state.invaders_spawned + count,
            state.config.max_invaders
        );
    }

    GameState {
        invaders,
        invaders_spawned: state.invaders_spawned + count,
        ..state.clone()
    }
}
