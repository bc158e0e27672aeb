//! Generic best-path search over the tile grid.
//! This module exists so goal evaluation and the danger heuristic share one traversal.
//! It does not own cost policy; callers supply a per-step cost function.

use std::collections::{BTreeMap, BTreeSet};

use super::*;

/// Per-step cost for routing through a tile, given the search goal and the
/// previous tile in the path.
pub(super) type CostFn = fn(&GameState, Pos, Pos, Pos) -> u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    cost: u32,
    steps: u32,
    x: i32,
    y: i32,
}

/// Cheapest path from `start` to `goal`, exclusive of `start`.
///
/// Only free tiles are transit tiles; the goal itself may be any non-wall
/// tile, since mines, taverns and heroes are reached by bumping into them.
/// Without a cost function every step costs 1. `max_depth` caps the path
/// length in steps. No path is a normal outcome, not an error.
pub(super) fn search(
    state: &GameState,
    start: Pos,
    goal: Pos,
    cost_fn: Option<CostFn>,
    max_depth: Option<u32>,
) -> Option<Vec<Pos>> {
    let board = &state.board;
    if board.tile_at(goal) == TileKind::Wall {
        return None;
    }
    if start == goal {
        return Some(vec![]);
    }

    let mut open = BTreeSet::new();
    let mut best = BTreeMap::new();
    let mut came_from = BTreeMap::new();
    open.insert(OpenNode { cost: 0, steps: 0, x: start.x, y: start.y });
    best.insert(start, 0u32);

    while let Some(node) = open.pop_first() {
        let p = Pos { x: node.x, y: node.y };
        if p == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }
        if node.cost > *best.get(&p).expect("expanded node must have a recorded cost") {
            continue; // superseded by a cheaper route to the same tile
        }
        if max_depth.is_some_and(|cap| node.steps >= cap) {
            continue;
        }
        for n in neighbors(p) {
            if !(board.tile_at(n).is_free() || n == goal) {
                continue;
            }
            let cost = node.cost + cost_fn.map_or(1, |f| f(state, n, goal, p));
            if cost < *best.get(&n).unwrap_or(&u32::MAX) {
                came_from.insert(n, p);
                best.insert(n, cost);
                open.insert(OpenNode { cost, steps: node.steps + 1, x: n.x, y: n.y });
            }
        }
    }
    None
}

fn reconstruct_path(came: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut p = goal;
    let mut path = vec![p];
    while p != start {
        p = *came.get(&p).expect("path must be reconstructible");
        path.push(p);
    }
    path.reverse();
    path.remove(0);
    path
}

#[cfg(test)]
mod tests {
    #![allow(unused_imports)]

    use super::*;
    use crate::engine::test_support::*;

    fn corridor_state() -> GameState {
        let board = board_from_rows(&[
            "############", //
            "##        ##",
            "############",
            "############",
            "############",
            "############",
        ]);
        state_of(board, vec![hero_at(1, Pos { x: 1, y: 1 })])
    }

    #[test]
    fn finds_the_shortest_path_exclusive_of_start() {
        let state = corridor_state();
        let path = search(&state, Pos { x: 1, y: 1 }, Pos { x: 1, y: 4 }, None, None)
            .expect("corridor should be traversable");
        assert_eq!(path, vec![Pos { x: 1, y: 2 }, Pos { x: 1, y: 3 }, Pos { x: 1, y: 4 }]);
    }

    #[test]
    fn start_equal_to_goal_yields_an_empty_path() {
        let state = corridor_state();
        let path = search(&state, Pos { x: 1, y: 2 }, Pos { x: 1, y: 2 }, None, None);
        assert_eq!(path, Some(vec![]));
    }

    #[test]
    fn walls_block_and_are_never_goals() {
        let board = board_from_rows(&[
            "############", //
            "##  ##    ##",
            "############",
            "############",
            "############",
            "############",
        ]);
        let state = state_of(board, vec![hero_at(1, Pos { x: 1, y: 1 })]);
        assert_eq!(search(&state, Pos { x: 1, y: 1 }, Pos { x: 1, y: 3 }, None, None), None);
        assert_eq!(search(&state, Pos { x: 1, y: 1 }, Pos { x: 1, y: 2 }, None, None), None);
    }

    #[test]
    fn tavern_is_a_valid_goal_but_not_a_transit_tile() {
        let board = board_from_rows(&[
            "##########", //
            "##  []  ##",
            "##########",
            "##########",
            "##########",
        ]);
        let state = state_of(board, vec![hero_at(1, Pos { x: 1, y: 1 })]);

        let to_tavern = search(&state, Pos { x: 1, y: 1 }, Pos { x: 1, y: 2 }, None, None)
            .expect("tavern should be targetable directly");
        assert_eq!(to_tavern, vec![Pos { x: 1, y: 2 }]);
        // The only route to the far side runs through the tavern.
        assert_eq!(search(&state, Pos { x: 1, y: 1 }, Pos { x: 1, y: 3 }, None, None), None);
    }

    #[test]
    fn max_depth_caps_path_length_in_steps() {
        let state = corridor_state();
        let start = Pos { x: 1, y: 1 };
        let goal = Pos { x: 1, y: 4 };
        assert_eq!(search(&state, start, goal, None, Some(2)), None);
        let path = search(&state, start, goal, None, Some(3)).expect("cap of 3 fits 3 steps");
        assert_eq!(path.len(), 3);
    }

    fn avoid_upper_corner(_state: &GameState, tile: Pos, _goal: Pos, _from: Pos) -> u32 {
        if tile == (Pos { x: 1, y: 2 }) { 100 } else { 1 }
    }

    #[test]
    fn cost_function_steers_the_route() {
        let board = board_from_rows(&[
            "########", //
            "##    ##",
            "##    ##",
            "########",
        ]);
        let state = state_of(board, vec![hero_at(1, Pos { x: 1, y: 1 })]);

        let path =
            search(&state, Pos { x: 1, y: 1 }, Pos { x: 2, y: 2 }, Some(avoid_upper_corner), None)
                .expect("room should be traversable");
        assert_eq!(path, vec![Pos { x: 2, y: 1 }, Pos { x: 2, y: 2 }]);
    }
}
