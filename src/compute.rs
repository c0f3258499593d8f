//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`. Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::Config;
use crate::entities::{Bomb, Defender, GameState, GameStatus, Invader, Missile};
use crate::geometry::overlaps;
use crate::spawn;

// ── Constructor ──────────────────────────────────────────────────────────────

/// Build the initial game state: defender centered on the bottom edge,
/// empty field, `Running`. Panics on a malformed configuration.
pub fn init_state(config: Config) -> GameState {
    config.validate();
    let size = config.defender_size;
    GameState {
        defender: Defender {
            x: (config.field_width - size.width) / 2,
            y: config.field_height - size.height,
            width: size.width,
            height: size.height,
        },
        invaders: Vec::new(),
        bombs: Vec::new(),
        missiles: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        invaders_spawned: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn move_defender_left(state: &GameState) -> GameState {
    let new_x = (state.defender.x - state.config.defender_step).max(0);
    GameState {
        defender: Defender { x: new_x, ..state.defender.clone() },
        ..state.clone()
    }
}

pub fn move_defender_right(state: &GameState) -> GameState {
    let limit = state.config.field_width - state.defender.width;
    let new_x = (state.defender.x + state.config.defender_step).min(limit);
    GameState {
        defender: Defender { x: new_x, ..state.defender.clone() },
        ..state.clone()
    }
}

/// Fire a missile from the defender's top-center — capped at
/// `max_missiles` simultaneous missiles.
pub fn fire_missile(state: &GameState) -> GameState {
    if state.missiles.len() >= state.config.max_missiles {
        return state.clone();
    }
    let size = state.config.missile_size;
    let new_missile = Missile {
        x: state.defender.x + (state.defender.width - size.width) / 2,
        y: state.defender.y - size.height,
        width: size.width,
        height: size.height,
    };
    let mut missiles = state.missiles.clone();
    missiles.push(new_missile);
    GameState { missiles, ..state.clone() }
}

// ── Per-tick update (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick. All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Phases run in a fixed order; a losing transition aborts the remaining
/// phases for that tick. On a terminal state this is a no-op.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    let mut next = state.clone();

    // ── 1. Spawn a wave once the top row is clear ────────────────────────────
    if !spawn::top_row_occupied(&next) {
        next = spawn::spawn_wave(&next, rng);
    }

    // ── 2. Advance invaders; bounce and descend per invader ──────────────────
    let field_width = next.config.field_width;
    let descent = next.config.descent_step;
    let speed = next.config.invader_speed;
    for inv in &mut next.invaders {
        inv.x += inv.direction * speed;
        // Each invader detects its own boundary crossing; several can
        // invert in the same tick.
        if inv.x < 0 || inv.x > field_width - inv.width {
            inv.y += descent;
            inv.direction = -inv.direction;
        }
    }

    // ── 3. Invader reaching the floor loses the game ─────────────────────────
    let field_height = next.config.field_height;
    if next.invaders.iter().any(|inv| inv.y + inv.height >= field_height) {
        log::info!("invader reached the floor, score {}", next.score);
        next.status = GameStatus::Lost;
        return next;
    }

    // ── 4. Invader ramming the defender loses the game ───────────────────────
    let defender_rect = next.defender.rect();
    if next.invaders.iter().any(|inv| overlaps(inv.rect(), defender_rect)) {
        log::info!("invader rammed the defender, score {}", next.score);
        next.status = GameStatus::Lost;
        return next;
    }

    // ── 5. Bomb emission ─────────────────────────────────────────────────────
    // The countdown phase is gated once, on the bomb count observed before
    // any bomb moved this tick. Emission also stops at the cap so a tick in
    // which several counters expire cannot overshoot it.
    if next.bombs.len() < next.config.max_bombs {
        let max_bombs = next.config.max_bombs;
        let live = next.bombs.len();
        let bomb_size = next.config.bomb_size;
        let mut emitted: Vec<Bomb> = Vec::new();
        for inv in &mut next.invaders {
            inv.bomb_counter -= spawn::BOMB_COUNTER_STEP;
            if inv.bomb_counter <= 0.0
                && rng.gen_bool(spawn::BOMB_CHANCE)
                && live + emitted.len() < max_bombs
            {
                emitted.push(Bomb {
                    x: inv.x + (inv.width - bomb_size.width) / 2,
                    y: inv.y + inv.height,
                    width: bomb_size.width,
                    height: bomb_size.height,
                });
                inv.bomb_counter = spawn::initial_bomb_counter(rng);
            }
        }
        next.bombs.extend(emitted);
    }

    // ── 6. Advance bombs; cull at the bottom; defender hit loses ─────────────
    let bomb_speed = next.config.bomb_speed;
    let mut bombs: Vec<Bomb> = Vec::with_capacity(next.bombs.len());
    let mut defender_struck = false;
    for (i, bomb) in next.bombs.iter().enumerate() {
        let mut bomb = bomb.clone();
        bomb.y += bomb_speed;
        if bomb.y + bomb.height >= field_height {
            continue; // fell off the field
        }
        if overlaps(bomb.rect(), defender_rect) {
            // The striking bomb is dropped; bombs after it keep their
            // pre-move positions since the tick aborts here.
            defender_struck = true;
            bombs.extend(next.bombs[i + 1..].iter().cloned());
            break;
        }
        bombs.push(bomb);
    }
    next.bombs = bombs;
    if defender_struck {
        log::info!("defender destroyed by a bomb, score {}", next.score);
        next.status = GameStatus::Lost;
        return next;
    }

    // ── 7. Advance missiles; resolve hits in creation order ──────────────────
    let missile_speed = next.config.missile_speed;
    let mut missiles: Vec<Missile> = Vec::with_capacity(next.missiles.len());
    let mut killed: Vec<usize> = Vec::new();
    for missile in &next.missiles {
        let mut missile = missile.clone();
        missile.y -= missile_speed;
        if missile.y < 0 {
            continue; // left the top of the field, no score
        }
        let hit = next
            .invaders
            .iter()
            .enumerate()
            .find(|(i, inv)| !killed.contains(i) && overlaps(missile.rect(), inv.rect()))
            .map(|(i, _)| i);
        match hit {
            // At most one invader dies per missile per tick
            Some(i) => {
                killed.push(i);
                next.score += 1;
            }
            None => missiles.push(missile),
        }
    }
    next.missiles = missiles;
    if !killed.is_empty() {
        let survivors: Vec<Invader> = next
            .invaders
            .iter()
            .enumerate()
            .filter(|(i, _)| !killed.contains(i))
            .map(|(_, inv)| inv.clone())
            .collect();
        next.invaders = survivors;
    }

    // ── 8. Cleared field wins ────────────────────────────────────────────────
    if next.invaders.is_empty() {
        log::info!("all invaders destroyed, score {}", next.score);
        next.status = GameStatus::Won;
    }

    next
}
