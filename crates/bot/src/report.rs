//! Turn summary and ranking formatting.
//! This module exists to keep presentation out of the replay loop.
//! It does not own any decision logic or I/O.

use std::cmp::Reverse;

use vindi_core::{Dir, Hero, TurnReport};

pub const TURN_HEADER: &str =
    " --T------HP--------GP----POSITION-------GOAL--------SCORE---MOVE--- ";

/// One table row for a decided turn.
pub fn turn_line(report: &TurnReport, dir: Dir) -> String {
    let mut line = format!(
        "|{:3}     {:3}     {:4}     ({:2},{:2})       ",
        report.round, report.life, report.gold, report.pos.x, report.pos.y
    );
    match &report.goal {
        Some(goal) => line.push_str(&format!(
            "{:>5}  ({:2},{:2})  {:4}",
            goal.action.as_str(),
            goal.target.x,
            goal.target.y,
            goal.score
        )),
        None => line.push_str(" idle               "),
    }
    line.push_str(&format!("  {:>5} |", dir.as_str()));
    line
}

/// Final standings, heroes sorted by gold. Ties keep server order.
pub fn ranking(heroes: &[Hero]) -> Vec<String> {
    let mut order: Vec<&Hero> = heroes.iter().collect();
    order.sort_by_key(|h| Reverse(h.gold));
    order
        .iter()
        .enumerate()
        .map(|(i, h)| format!("#{} {} {}g", i + 1, h.name, h.gold))
        .collect()
}
