//! Wire types for the per-turn snapshot the game server sends.
//!
//! The snapshot is a single JSON document with camelCase keys:
//! - `game`: turn counters, the full hero list and the board payload.
//! - `hero`: a copy of the acting hero's entry, used only to learn our id.
//! - `board.tiles`: the grid as a string of two-character codes, row-major
//!   on `x` (see [`crate::state::Board::parse`] for the code table).
//!
//! These structs mirror the wire shape exactly and carry no behavior;
//! decoding into engine structures happens in [`crate::state`].

use serde::{Deserialize, Serialize};

use crate::types::{HeroId, Pos};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawState {
    pub game: RawGame,
    pub hero: RawHero,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default)]
    pub play_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    pub id: String,
    pub turn: u32,
    pub max_turns: u32,
    pub heroes: Vec<RawHero>,
    pub board: RawBoard,
    pub finished: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHero {
    pub id: HeroId,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub elo: Option<u32>,
    pub pos: Pos,
    pub life: i32,
    pub gold: i32,
    pub mine_count: u32,
    pub spawn_pos: Pos,
    #[serde(default)]
    pub crashed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawBoard {
    pub size: usize,
    pub tiles: String,
}
