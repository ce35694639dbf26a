#![cfg(feature = "board-pleco")]
use pleco::{BitMove, Board as PlecoBoard, PieceType, Player, SQ};

use crate::board::{BoardState, ColoredPiece, PieceKind, Rules, Side};
use crate::error::{Error, Result};

/// Pleco board driven through its native make/unmake.
pub struct RevBoard {
    board: PlecoBoard,
    stack: Vec<BitMove>,
}

impl Default for RevBoard {
    fn default() -> Self { Self::startpos() }
}

impl RevBoard {
    pub fn from_fen(fen: &str) -> Result<Self> {
        PlecoBoard::from_fen(fen)
            .map(|b| Self { board: b, stack: Vec::with_capacity(128) })
            .map_err(|e| Error::InvalidFen(format!("{fen}: {e:?}")))
    }
    pub fn startpos() -> Self { Self { board: PlecoBoard::start_pos(), stack: Vec::with_capacity(128) } }
    pub fn fen(&self) -> String { self.board.fen() }
    pub fn ply_count(&self) -> usize { self.stack.len() }
}

fn kind_of(pt: PieceType) -> Option<PieceKind> {
    match pt {
        PieceType::P => Some(PieceKind::Pawn),
        PieceType::N => Some(PieceKind::Knight),
        PieceType::B => Some(PieceKind::Bishop),
        PieceType::R => Some(PieceKind::Rook),
        PieceType::Q => Some(PieceKind::Queen),
        PieceType::K => Some(PieceKind::King),
        _ => None,
    }
}

fn side_of(p: Player) -> Side {
    if p == Player::White { Side::White } else { Side::Black }
}

impl Rules for RevBoard {
    type Move = BitMove;

    fn legal_moves(&self) -> Vec<BitMove> { self.board.generate_moves().iter().copied().collect() }

    fn apply(&mut self, mv: BitMove) -> Result<()> {
        if !self.board.generate_moves().iter().any(|&m| m == mv) {
            return Err(Error::IllegalMove(format!("{}", mv)));
        }
        self.board.apply_move(mv);
        self.stack.push(mv);
        Ok(())
    }

    fn undo(&mut self) { if self.stack.pop().is_some() { self.board.undo_move(); } }

    fn is_checkmate(&self) -> bool { self.board.checkmate() }

    fn is_draw(&self) -> bool { self.board.stalemate() || self.board.rule_50() >= 100 }

    fn is_in_check(&self) -> bool { self.board.in_check() }

    fn side_to_move(&self) -> Side { side_of(self.board.turn()) }

    fn board_state(&self) -> BoardState {
        let mut state = BoardState::empty();
        for idx in 0u8..64 {
            let piece = self.board.piece_at_sq(SQ(idx));
            if let Some(kind) = kind_of(piece.type_of()) {
                let row = 7 - (idx / 8) as usize;
                let col = (idx % 8) as usize;
                state.set(row, col, Some(ColoredPiece::new(kind, side_of(piece.player_lossy()))));
            }
        }
        state
    }

    fn parse_move(&self, uci: &str) -> Option<BitMove> {
        let uci = uci.trim();
        self.board.generate_moves().iter().copied().find(|m| format!("{}", m) == uci)
    }
}
