//! Once-per-turn decision engine: pick the single best move for the acting hero.
//! This module exists to tie goal evaluation, threat costing and path search
//! into one synchronous decision per snapshot.
//! It does not own transport, turn pacing or presentation.

mod cost;
mod danger;
mod goals;
mod pathfinding;
#[cfg(test)]
mod test_support;

use std::time::Instant;

use crate::protocol::RawState;
use crate::state::{GameState, SnapshotError, manhattan, neighbors};
use crate::types::*;

use cost::tile_cost;
use danger::tile_danger;
use pathfinding::search;

pub use goals::choose_goal;

/// Fixed per-hit damage of the underlying game rules; not tunable.
const HIT_DAMAGE: i32 = 20;

/// Decide the current turn: record the best goal (and timing) into the
/// state's diagnostic context and return the move that starts it, or
/// [`Dir::Stay`] when no goal is reachable.
pub fn decide(state: &mut GameState) -> Dir {
    let start = Instant::now();
    let goal = choose_goal(state);
    let dir = match goal.as_ref().and_then(|g| g.path.first()) {
        Some(&next) => step_dir(state.me().pos, next),
        None => Dir::Stay,
    };
    state.context = TurnContext { goal, elapsed: start.elapsed() };
    dir
}

/// Engine entry point for the turn driver: augment the raw snapshot, decide
/// on it, and hand back the augmented state for reporting. The recorded
/// timing covers augmentation as well.
pub fn take_turn(raw: &RawState) -> Result<(Dir, GameState), SnapshotError> {
    let start = Instant::now();
    let mut state = GameState::from_snapshot(raw)?;
    let dir = decide(&mut state);
    state.context.elapsed = start.elapsed();
    Ok((dir, state))
}

fn step_dir(from: Pos, to: Pos) -> Dir {
    match (to.x - from.x, to.y - from.y) {
        (-1, 0) => Dir::North,
        (0, 1) => Dir::East,
        (1, 0) => Dir::South,
        (0, -1) => Dir::West,
        _ => Dir::Stay,
    }
}
