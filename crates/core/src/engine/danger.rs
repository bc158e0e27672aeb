//! Rival threat heuristic.
//! This module exists to keep the threat model in one place for both route
//! costing and goal gating.
//! It does not own pathfinding or goal scoring.

use super::*;

/// Accumulated threat at `tile`, assuming the acting hero has already paid
/// `life_penalty` life. Always non-negative.
///
/// Rivals at 20 life or below cannot win a fight and are ignored; the rest
/// only count while within three moves of `tile`. A rival one step away and
/// standing next to a tavern adds a flat 5: it can strike and re-heal
/// immediately. Every other contribution follows the running-max rule, the
/// accumulator gaining `max(accumulator, 4 - distance)`, so one strong
/// nearby rival outweighs several distant ones. Collapsing this to a plain
/// sum changes bot behavior materially; keep the rule as is.
pub(super) fn tile_danger(state: &GameState, tile: Pos, life_penalty: i32) -> i32 {
    let board = &state.board;
    let mut own_life = state.me().life - life_penalty;
    if board.is_near(tile, TileKind::is_tavern) {
        // A tavern next door means we can recover right after trading hits.
        own_life += 50;
    }

    let mut res = 0;
    for rival in state.rivals() {
        if rival.life <= 20 {
            continue;
        }
        let Some(path) = search(state, rival.pos, tile, None, Some(3)) else {
            continue;
        };
        let dist = path.len() as i32;
        if dist == 1 && board.is_near(rival.pos, TileKind::is_tavern) {
            res += 5;
        } else {
            let mut safe_life = own_life;
            if dist == 3 {
                // A rival exactly three moves out closes the gap and lands a
                // full hit before we can react.
                safe_life -= HIT_DAMAGE;
            }
            if rival.life > safe_life {
                res += res.max(4 - dist);
            }
        }
    }
    res
}
