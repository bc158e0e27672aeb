//! Shared test fixtures for the engine submodule test suites.
//! This module exists to avoid repeating board and hero setup across tests.
//! It does not own production decision logic.

use super::*;
use crate::protocol::RawBoard;
use crate::state::{Board, Hero};

/// Build a board from rows of two-character tile codes. The row count is
/// the board size, so every fixture is square.
pub(super) fn board_from_rows(rows: &[&str]) -> Board {
    Board::parse(&RawBoard { size: rows.len(), tiles: rows.concat() })
        .expect("fixture board must parse")
}

/// An all-free square arena enclosed by walls.
pub(super) fn open_arena(size: usize) -> Board {
    let wall = "##".repeat(size);
    let lane = format!("##{}##", "  ".repeat(size - 2));
    let mut rows = vec![wall.clone()];
    for _ in 1..size - 1 {
        rows.push(lane.clone());
    }
    rows.push(wall);
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    board_from_rows(&refs)
}

/// A full-life hero with no gold and no mines, spawned where it stands.
pub(super) fn hero_at(id: u8, pos: Pos) -> Hero {
    Hero {
        id: HeroId(id),
        name: format!("hero{id}"),
        life: 100,
        gold: 0,
        pos,
        spawn_pos: pos,
        mine_count: 0,
        mines: Vec::new(),
        crashed: false,
    }
}

/// State acting as the first hero in `heroes`.
pub(super) fn state_of(board: Board, heroes: Vec<Hero>) -> GameState {
    GameState {
        board,
        heroes,
        hero_idx: 0,
        turn: 0,
        max_turns: 1200,
        context: TurnContext::default(),
    }
}
