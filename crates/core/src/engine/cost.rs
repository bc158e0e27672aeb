//! Per-step traversal cost for goal pathing.
//! This module exists to translate the threat heuristic into route costs.
//! It does not own the search itself.

use super::*;

/// Cost of routing through `tile` toward `goal`, coming from `from`.
///
/// Danger is probed on `tile` itself when it is free, otherwise on `from`:
/// an occupied tile is either about to be vacated or will only ever be
/// bumped into, so its own threat reading is meaningless. Stepping onto a
/// mine is costed as if the capture's life toll were already paid. The
/// multiplier keeps any threatened tile more expensive than a board-wide
/// detour, so the search only crosses danger when no safer route exists.
pub(super) fn tile_cost(state: &GameState, tile: Pos, goal: Pos, from: Pos) -> u32 {
    let kind = state.board.tile_at(tile);
    let probe = if kind.is_free() { tile } else { from };
    let life_penalty = if kind.is_mine() { HIT_DAMAGE } else { 0 };
    manhattan(tile, goal) + tile_danger(state, probe, life_penalty) as u32 * 50
}

#[cfg(test)]
mod tests {
    #![allow(unused_imports)]

    use super::*;
    use crate::engine::test_support::*;

    #[test]
    fn cost_is_distance_to_goal_when_nothing_threatens() {
        let board = open_arena(8);
        let state = state_of(board, vec![hero_at(1, Pos { x: 1, y: 1 })]);

        let goal = Pos { x: 1, y: 5 };
        assert_eq!(tile_cost(&state, Pos { x: 1, y: 2 }, goal, Pos { x: 1, y: 1 }), 3);
        assert_eq!(tile_cost(&state, goal, goal, Pos { x: 1, y: 4 }), 0);
    }

    #[test]
    fn mines_are_costed_with_the_capture_toll_already_paid() {
        let board = board_from_rows(&[
            "############", //
            "##$-      ##",
            "############",
            "############",
            "############",
            "############",
        ]);
        let mine = Pos { x: 1, y: 1 };
        let from = Pos { x: 1, y: 2 };
        let mut me = hero_at(1, from);
        me.life = 60;
        let mut rival = hero_at(2, Pos { x: 1, y: 4 });
        rival.life = 45;
        let state = state_of(board, vec![me, rival]);

        // 45 exceeds 60 - 20 but not 60: only the penalized probe reacts.
        assert_eq!(tile_danger(&state, from, 0), 0);
        assert_eq!(tile_cost(&state, mine, mine, from), 100);
    }

    #[test]
    fn occupied_tiles_are_probed_at_the_previous_tile() {
        let board = board_from_rows(&[
            "##############", //
            "##@2    @3  ##",
            "##############",
            "##############",
            "##############",
            "##############",
            "##############",
        ]);
        let occupied = Pos { x: 1, y: 4 };
        let from = Pos { x: 1, y: 5 };
        let mut me = hero_at(1, from);
        me.life = 50;
        let mut rival = hero_at(2, Pos { x: 1, y: 1 });
        rival.life = 90;
        let mut bystander = hero_at(3, occupied);
        bystander.life = 10;
        let state = state_of(board, vec![me, rival, bystander]);

        // The occupied tile itself reads as dangerous, but `from` is walled
        // off from the rival by the occupant, so the cost must not see it.
        assert_eq!(tile_danger(&state, occupied, 0), 1);
        assert_eq!(tile_cost(&state, occupied, occupied, from), 0);
    }
}
