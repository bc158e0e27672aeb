pub mod engine;
pub mod protocol;
pub mod state;
pub mod types;

pub use engine::{choose_goal, decide, take_turn};
pub use protocol::{RawBoard, RawGame, RawHero, RawState};
pub use state::{Board, GameState, Hero, ParseBoardError, SnapshotError};
pub use types::*;
