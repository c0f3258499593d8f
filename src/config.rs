//! Fixed configuration: field dimensions, caps, speeds, sprite sizes.
//!
//! Everything here is supplied before the first tick and never mutated by
//! the simulation. Sprite sizes stand in for the asset loader's image
//! dimensions; the defaults mirror a small pixel-art sprite sheet.

// ── Tunables ─────────────────────────────────────────────────────────────────

/// Max missiles in the air at once.
pub const MAX_MISSILES: usize = 2;
/// Max bombs in the air at once (soft cap, see `compute::tick`).
pub const MAX_BOMBS: usize = 8;
/// Total invaders the spawner may ever create.
pub const MAX_INVADERS: u32 = 40;
/// Invaders spawned per wave while the budget lasts.
pub const WAVE_SIZE: u32 = 4;
/// Horizontal gap between invaders in a freshly spawned wave.
pub const INVADER_GAP: i32 = 10;

/// Horizontal invader speed per tick.
pub const INVADER_SPEED: i32 = 8;
/// Vertical drop when an invader bounces off a field edge.
pub const DESCENT_STEP: i32 = 40;
/// Defender displacement per move command.
pub const DEFENDER_STEP: i32 = 20;
/// Bomb descent per tick.
pub const BOMB_SPEED: i32 = 5;
/// Missile ascent per tick.
pub const MISSILE_SPEED: i32 = 10;

pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;

// ── Types ────────────────────────────────────────────────────────────────────

/// Width/height of one sprite class, in field units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: i32,
    pub height: i32,
}

/// Complete simulation configuration. Treated as immutable input.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub max_missiles: usize,
    pub max_bombs: usize,
    pub max_invaders: u32,
    pub wave_size: u32,
    pub invader_gap: i32,
    pub invader_speed: i32,
    pub descent_step: i32,
    pub defender_step: i32,
    pub bomb_speed: i32,
    pub missile_speed: i32,
    pub defender_size: SpriteSize,
    pub invader_size: SpriteSize,
    pub bomb_size: SpriteSize,
    pub missile_size: SpriteSize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            max_missiles: MAX_MISSILES,
            max_bombs: MAX_BOMBS,
            max_invaders: MAX_INVADERS,
            wave_size: WAVE_SIZE,
            invader_gap: INVADER_GAP,
            invader_speed: INVADER_SPEED,
            descent_step: DESCENT_STEP,
            defender_step: DEFENDER_STEP,
            bomb_speed: BOMB_SPEED,
            missile_speed: MISSILE_SPEED,
            defender_size: SpriteSize { width: 20, height: 16 },
            invader_size: SpriteSize { width: 30, height: 20 },
            bomb_size: SpriteSize { width: 8, height: 14 },
            missile_size: SpriteSize { width: 4, height: 12 },
        }
    }
}

impl Config {
    /// Assert startup preconditions. A malformed configuration is a fatal
    /// initialization error, never a mid-simulation condition.
    pub fn validate(&self) {
        assert!(
            self.field_width > 0 && self.field_height > 0,
            "field dimensions must be positive"
        );
        for size in [
            self.defender_size,
            self.invader_size,
            self.bomb_size,
            self.missile_size,
        ] {
            assert!(
                size.width > 0 && size.height > 0,
                "sprite sizes must be positive"
            );
        }
        assert!(
            self.invader_speed > 0
                && self.descent_step > 0
                && self.defender_step > 0
                && self.bomb_speed > 0
                && self.missile_speed > 0,
            "speeds must be positive"
        );
        assert!(
            self.defender_size.width <= self.field_width
                && self.invader_size.width <= self.field_width,
            "sprites must fit the field"
        );
    }
}
