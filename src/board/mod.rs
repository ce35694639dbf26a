//! Rules-engine seam.
//!
//! The selector never implements chess legality itself. It talks to a
//! [`Rules`] backend that owns the position, enumerates legal moves and
//! applies/undoes them in LIFO order. Two backends exist: [`cozy::Position`]
//! (default) and `pleco::RevBoard` behind the `board-pleco` feature.
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod cozy;
#[cfg(feature = "board-pleco")]
pub mod pleco;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side { White, Black }

impl Side {
    pub fn opposite(self) -> Side {
        match self { Side::White => Side::Black, Side::Black => Side::White }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::White => "White", Side::Black => "Black" })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind { Pawn, Knight, Bishop, Rook, Queen, King }

impl PieceKind {
    fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColoredPiece {
    pub kind: PieceKind,
    pub side: Side,
}

impl ColoredPiece {
    pub fn new(kind: PieceKind, side: Side) -> Self { Self { kind, side } }
}

/// Piece placement as an 8x8 grid. Row 0 is rank 8, column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BoardState {
    cells: [[Option<ColoredPiece>; 8]; 8],
}

impl BoardState {
    pub fn empty() -> Self { Self::default() }

    pub fn get(&self, row: usize, col: usize) -> Option<ColoredPiece> { self.cells[row][col] }

    pub fn set(&mut self, row: usize, col: usize, piece: Option<ColoredPiece>) { self.cells[row][col] = piece; }

    /// Occupied squares as `(row, col, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, ColoredPiece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| cell.map(|p| (r, c, p)))
        })
    }

    /// Colors swapped and rows flipped: the same position seen from the other side.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::empty();
        for (r, c, p) in self.pieces() {
            out.cells[7 - r][c] = Some(ColoredPiece::new(p.kind, p.side.opposite()));
        }
        out
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - r)?;
            for cell in row.iter() {
                let ch = match cell {
                    None => '.',
                    Some(p) if p.side == Side::White => p.kind.letter().to_ascii_uppercase(),
                    Some(p) => p.kind.letter(),
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Contract the selector consumes from a chess rules engine.
pub trait Rules {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// All legal moves for the side to move, in a stable order.
    fn legal_moves(&self) -> Vec<Self::Move>;
    /// Fails with [`crate::Error::IllegalMove`] when `mv` is not legal here.
    fn apply(&mut self, mv: Self::Move) -> Result<()>;
    /// Reverts the most recent `apply`. No-op when nothing has been applied.
    fn undo(&mut self);
    fn is_checkmate(&self) -> bool;
    fn is_draw(&self) -> bool;
    fn is_in_check(&self) -> bool;
    fn side_to_move(&self) -> Side;
    fn board_state(&self) -> BoardState;
    /// Long algebraic notation (`e2e4`, `e7e8q`, `e1g1`).
    fn parse_move(&self, uci: &str) -> Option<Self::Move>;

    fn is_game_over(&self) -> bool { self.is_checkmate() || self.is_draw() }
}

/// A move applied for the lifetime of the guard; dropping it undoes the move.
pub struct MoveGuard<'a, R: Rules> {
    rules: &'a mut R,
}

impl<'a, R: Rules> MoveGuard<'a, R> {
    pub fn apply(rules: &'a mut R, mv: R::Move) -> Result<Self> {
        rules.apply(mv)?;
        Ok(Self { rules })
    }
}

impl<R: Rules> Deref for MoveGuard<'_, R> {
    type Target = R;
    fn deref(&self) -> &R { self.rules }
}

impl<R: Rules> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R { self.rules }
}

impl<R: Rules> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) { self.rules.undo(); }
}
