use std::error::Error;
use std::fmt;

use crate::protocol::{RawBoard, RawState};
use crate::types::{GoalSummary, HeroId, Pos, TileKind, TurnContext, TurnReport};

/// Decoded tile grid for one turn, plus the global tavern and mine lists.
/// Rebuilt fresh from every snapshot, never patched in place.
#[derive(Clone, Debug)]
pub struct Board {
    pub size: usize,
    tiles: Vec<TileKind>,
    pub taverns: Vec<Pos>,
    pub mines: Vec<Pos>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    /// `tiles` is not exactly `size * size` two-character codes.
    WrongLength { size: usize, len: usize },
    UnknownCode { code: String, at: Pos },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::WrongLength { size, len } => {
                write!(f, "board payload of {len} chars does not fit a {size}x{size} grid")
            }
            ParseBoardError::UnknownCode { code, at } => {
                write!(f, "unknown tile code {code:?} at ({},{})", at.x, at.y)
            }
        }
    }
}

impl Error for ParseBoardError {}

impl Board {
    /// Decode the raw board payload: a string of two-character codes,
    /// row-major on `x`.
    ///
    /// - `"  "` free, `"##"` wall, `"[]"` tavern;
    /// - `"$-"` unowned mine, `"$N"` mine owned by hero N;
    /// - `"@N"` tile occupied by hero N.
    ///
    /// Tavern and mine lists are collected in decode order, which fixes the
    /// enumeration order of goal candidates downstream.
    pub fn parse(raw: &RawBoard) -> Result<Board, ParseBoardError> {
        let size = raw.size;
        let bytes = raw.tiles.as_bytes();
        if bytes.len() != size * size * 2 {
            return Err(ParseBoardError::WrongLength { size, len: bytes.len() });
        }

        let mut tiles = Vec::with_capacity(size * size);
        let mut taverns = Vec::new();
        let mut mines = Vec::new();

        for (i, code) in bytes.chunks_exact(2).enumerate() {
            let pos = Pos { x: (i / size) as i32, y: (i % size) as i32 };
            let kind = match code {
                b"  " => TileKind::Free,
                b"##" => TileKind::Wall,
                b"[]" => TileKind::Tavern,
                [b'$', b'-'] => TileKind::Mine(None),
                [b'$', d @ b'0'..=b'9'] => TileKind::Mine(Some(HeroId(d - b'0'))),
                [b'@', d @ b'0'..=b'9'] => TileKind::Hero(HeroId(d - b'0')),
                other => {
                    return Err(ParseBoardError::UnknownCode {
                        code: String::from_utf8_lossy(other).into_owned(),
                        at: pos,
                    });
                }
            };
            match kind {
                TileKind::Tavern => taverns.push(pos),
                TileKind::Mine(_) => mines.push(pos),
                _ => {}
            }
            tiles.push(kind);
        }

        Ok(Board { size, tiles, taverns, mines })
    }

    /// Tile content at `pos`; out-of-bounds coordinates read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[(pos.x as usize) * self.size + (pos.y as usize)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// True if any orthogonal neighbour of `pos` matches `class`.
    pub fn is_near(&self, pos: Pos, class: fn(TileKind) -> bool) -> bool {
        neighbors(pos).iter().any(|&n| class(self.tile_at(n)))
    }

    pub fn mine_owner(&self, pos: Pos) -> Option<HeroId> {
        match self.tile_at(pos) {
            TileKind::Mine(owner) => owner,
            _ => None,
        }
    }
}

/// Orthogonal neighbours in fixed N/E/S/W order.
pub fn neighbors(p: Pos) -> [Pos; 4] {
    [
        Pos { x: p.x - 1, y: p.y },
        Pos { x: p.x, y: p.y + 1 },
        Pos { x: p.x + 1, y: p.y },
        Pos { x: p.x, y: p.y - 1 },
    ]
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Per-turn hero record with the derived fields the engine needs resolved
/// up front: board-backed positions and the owned-mine list.
#[derive(Clone, Debug)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub life: i32,
    pub gold: i32,
    pub pos: Pos,
    pub spawn_pos: Pos,
    pub mine_count: u32,
    pub mines: Vec<Pos>,
    pub crashed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    Board(ParseBoardError),
    /// The snapshot's own hero id does not appear in the hero list.
    UnknownSelfHero(HeroId),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Board(e) => write!(f, "bad board payload: {e}"),
            SnapshotError::UnknownSelfHero(id) => {
                write!(f, "self hero id {} missing from hero list", id.0)
            }
        }
    }
}

impl Error for SnapshotError {}

impl From<ParseBoardError> for SnapshotError {
    fn from(e: ParseBoardError) -> Self {
        SnapshotError::Board(e)
    }
}

/// The per-turn aggregate the engine decides over.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    /// Full hero list in server order; `hero_idx` points at the acting hero.
    pub heroes: Vec<Hero>,
    pub hero_idx: usize,
    pub turn: u32,
    pub max_turns: u32,
    pub context: TurnContext,
}

impl GameState {
    /// Build the augmented state for one turn from the raw snapshot.
    ///
    /// This is a pure transformation: the snapshot is never mutated, and
    /// nothing is carried over from previous turns. Beyond the board decode
    /// and the self-hero lookup the snapshot is trusted; inconsistencies
    /// (say, a hero standing on a tile the board calls a wall) propagate
    /// downstream undetected.
    pub fn from_snapshot(raw: &RawState) -> Result<GameState, SnapshotError> {
        let board = Board::parse(&raw.game.board)?;

        let heroes: Vec<Hero> = raw
            .game
            .heroes
            .iter()
            .map(|h| Hero {
                id: h.id,
                name: h.name.clone(),
                life: h.life,
                gold: h.gold,
                pos: h.pos,
                spawn_pos: h.spawn_pos,
                mine_count: h.mine_count,
                mines: board
                    .mines
                    .iter()
                    .copied()
                    .filter(|&m| board.mine_owner(m) == Some(h.id))
                    .collect(),
                crashed: h.crashed,
            })
            .collect();

        let hero_idx = heroes
            .iter()
            .position(|h| h.id == raw.hero.id)
            .ok_or(SnapshotError::UnknownSelfHero(raw.hero.id))?;

        Ok(GameState {
            board,
            heroes,
            hero_idx,
            turn: raw.game.turn,
            max_turns: raw.game.max_turns,
            context: TurnContext::default(),
        })
    }

    /// The acting hero.
    pub fn me(&self) -> &Hero {
        &self.heroes[self.hero_idx]
    }

    /// Every hero except the acting one, in server order.
    pub fn rivals(&self) -> impl Iterator<Item = &Hero> {
        let own = self.hero_idx;
        self.heroes.iter().enumerate().filter_map(move |(i, h)| (i != own).then_some(h))
    }

    pub fn report(&self) -> TurnReport {
        let me = self.me();
        TurnReport {
            round: self.turn / (self.heroes.len().max(1) as u32),
            life: me.life,
            gold: me.gold,
            pos: me.pos,
            goal: self.context.goal.as_ref().map(|g| GoalSummary {
                action: g.action,
                target: g.target,
                score: g.score,
            }),
            elapsed: self.context.elapsed,
        }
    }
}
