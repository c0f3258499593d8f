//! All game entity types — pure data, no logic.

use crate::config::Config;
use crate::geometry::Rect;

/// Simulation status. `Won` and `Lost` are terminal: once reached, no
/// further position or score mutation occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

// ── Player side ──────────────────────────────────────────────────────────────

/// The player's ship. Exactly one instance, created at game start and
/// never removed; losing is a status transition, not a despawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Defender {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// An upward projectile fired by the defender.
#[derive(Clone, Debug, PartialEq)]
pub struct Missile {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

// ── Invader side ─────────────────────────────────────────────────────────────

/// One member of the advancing formation.
#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub x: i32,
    pub y: i32,
    /// Horizontal direction, +1 or -1.
    pub direction: i32,
    pub width: i32,
    pub height: i32,
    /// Countdown controlling bomb-emission eligibility; re-drawn on each
    /// emission (see `spawn`).
    pub bomb_counter: f32,
}

/// A downward projectile dropped by an invader.
#[derive(Clone, Debug, PartialEq)]
pub struct Bomb {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Defender {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

impl Missile {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

impl Bomb {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire simulation state. Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub defender: Defender,
    /// Live invaders, in creation order.
    pub invaders: Vec<Invader>,
    pub bombs: Vec<Bomb>,
    pub missiles: Vec<Missile>,
    /// One point per invader destroyed by a missile.
    pub score: u32,
    pub status: GameStatus,
    /// Total invaders ever created; never exceeds `config.max_invaders`.
    pub invaders_spawned: u32,
    pub config: Config,
}
