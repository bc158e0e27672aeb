use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Grid coordinate. Following the server convention, `x` is the row index
/// (grows southward) and `y` is the column index (grows eastward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Free,
    Wall,
    Tavern,
    Mine(Option<HeroId>),
    Hero(HeroId),
}

impl TileKind {
    pub fn is_free(self) -> bool {
        self == TileKind::Free
    }

    pub fn is_tavern(self) -> bool {
        self == TileKind::Tavern
    }

    pub fn is_mine(self) -> bool {
        matches!(self, TileKind::Mine(_))
    }
}

/// One of the four server move commands, or staying put.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Stay,
    North,
    East,
    South,
    West,
}

impl Dir {
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Stay => "Stay",
            Dir::North => "North",
            Dir::East => "East",
            Dir::South => "South",
            Dir::West => "West",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalAction {
    Heal,
    Mine,
    Kill,
}

impl GoalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalAction::Heal => "heal",
            GoalAction::Mine => "mine",
            GoalAction::Kill => "kill",
        }
    }
}

/// A scored objective for the current turn. `path` is the tile sequence from
/// the acting hero's tile to `target`, exclusive of the start tile; its first
/// element is the move to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    pub action: GoalAction,
    pub target: Pos,
    pub path: Vec<Pos>,
    pub score: i32,
}

/// Per-turn diagnostics recorded by the engine for the turn driver.
/// Decision logic never reads this.
#[derive(Clone, Debug, Default)]
pub struct TurnContext {
    pub goal: Option<Goal>,
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalSummary {
    pub action: GoalAction,
    pub target: Pos,
    pub score: i32,
}

/// Display-ready snapshot of one decided turn. Pure data; formatting lives
/// in the turn driver.
#[derive(Clone, Debug)]
pub struct TurnReport {
    /// Game turn scaled down by the number of heroes (one round = everyone moved).
    pub round: u32,
    pub life: i32,
    pub gold: i32,
    pub pos: Pos,
    pub goal: Option<GoalSummary>,
    pub elapsed: Duration,
}
