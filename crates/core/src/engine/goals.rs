//! Goal discovery, scoring and selection.
//! This module exists to keep candidate gating and the best-goal fold in one pass.
//! It does not own pathfinding or the threat model.

use super::*;

/// Evaluate every candidate objective and return the best reachable one.
///
/// Candidates are generated in fixed precedence (heal, then mine, then
/// kill) and retained only on a strictly greater score, so ties keep the
/// earliest candidate. An unreachable candidate is skipped, never an error.
pub fn choose_goal(state: &GameState) -> Option<Goal> {
    let me = state.me();
    let board = &state.board;

    let mut best: Option<Goal> = None;
    let mut consider = |action: GoalAction, target: Pos, path: Vec<Pos>, score: i32| {
        if best.as_ref().is_some_and(|b| b.score >= score) {
            return;
        }
        best = Some(Goal { action, target, path, score });
    };

    // Head for a tavern to heal, or to dodge rivals hunting our mines.
    let should_flee = me.mine_count > 0 && tile_danger(state, me.pos, 0) > 0;
    let should_heal = me.life <= 80 && (me.gold >= 2 || me.mine_count > 0);
    if should_flee || should_heal {
        for &tavern in &board.taverns {
            if let Some(path) = search(state, me.pos, tavern, Some(tile_cost), None) {
                // Fleeing anchors at 100 so survival outranks every other goal.
                let score = (if should_flee { 100 } else { 80 - me.life }) - path.len() as i32;
                consider(GoalAction::Heal, tavern, path, score);
            }
        }
    }

    if me.life > 20 {
        for &mine in &board.mines {
            if board.mine_owner(mine) == Some(me.id) {
                continue;
            }
            if let Some(path) = search(state, me.pos, mine, Some(tile_cost), None) {
                let score = (11 - path.len() as i32).max(1) * 4;
                consider(GoalAction::Mine, mine, path, score);
            }
        }

        for rival in state.rivals() {
            // Nothing to gain from a mineless rival.
            if rival.mine_count == 0 {
                continue;
            }
            // A healthy rival stronger than us wins that fight.
            if rival.life > 20 && rival.life > me.life {
                continue;
            }
            if let Some(path) = search(state, me.pos, rival.pos, Some(tile_cost), None) {
                let dist = path.len() as i32;
                // At exactly three moves the rival strikes first; skip the
                // fight unless it cannot afford to lose the opener.
                if rival.life > 20 && dist == 3 && rival.life > me.life - HIT_DAMAGE {
                    continue;
                }
                let score = (11 - dist).max(0) * 5;
                consider(GoalAction::Kill, rival.pos, path, score);
            }
        }
    }

    best
}
