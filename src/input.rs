//! Input adapter: discrete key events mapped onto simulation commands.

use crate::compute;
use crate::entities::{GameState, GameStatus};

/// One discrete input signal from the event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
}

/// Single handler entry point, consuming one command at a time.
///
/// Movement is a step impulse per event (not continuous velocity), clamped
/// to the field; `Fire` is subject to the missile cap. Every command is
/// ignored once the game has reached a terminal state.
pub fn apply(state: &GameState, cmd: Command) -> GameState {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    match cmd {
        Command::MoveLeft => compute::move_defender_left(state),
        Command::MoveRight => compute::move_defender_right(state),
        Command::Fire => compute::fire_missile(state),
    }
}
