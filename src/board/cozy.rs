use cozy_chess::{Board as CozyBoard, Color, File, GameStatus, Move, Piece, Rank, Square};

use crate::board::{BoardState, ColoredPiece, PieceKind, Rules, Side};
use crate::error::{Error, Result};

/// cozy-chess board with an undo stack of prior boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: CozyBoard,
    history: Vec<CozyBoard>,
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        CozyBoard::from_fen(fen, false)
            .map(|b| Self { board: b, history: Vec::with_capacity(128) })
            .map_err(|e| Error::InvalidFen(format!("{fen}: {e:?}")))
    }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    /// Number of applied moves that `undo` can still revert.
    pub fn ply_count(&self) -> usize { self.history.len() }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<()> {
        match self.parse_move(mv_uci) {
            Some(m) => self.apply(m),
            None => Err(Error::IllegalMove(mv_uci.to_string())),
        }
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    /// Long algebraic form with castling written as the king's two-square move.
    /// cozy-chess encodes castling as "king takes own rook".
    pub fn uci(&self, mv: Move) -> String {
        let stm = self.board.side_to_move();
        let castles = self.board.piece_on(mv.from) == Some(Piece::King) && self.board.color_on(mv.to) == Some(stm);
        if castles {
            let file = if mv.to.file() as usize > mv.from.file() as usize { File::G } else { File::C };
            let to = Square::new(file, mv.from.rank());
            return format!("{}{}", mv.from, to);
        }
        format!("{}", mv)
    }

    fn is_threefold(&self) -> bool {
        let key = self.board.hash();
        let seen = self.history.iter().filter(|b| b.hash() == key).count();
        seen >= 2
    }

    fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 { return true; }
        // Any number of bishops, no knights, every bishop on one square color.
        if !knights.is_empty() { return false; }
        let light = bishops.into_iter().filter(|&sq| (sq.file() as usize + sq.rank() as usize) % 2 == 1).count();
        light == 0 || light == bishops.len() as usize
    }
}

fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn side_of(color: Color) -> Side {
    if color == Color::White { Side::White } else { Side::Black }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.board.generate_moves(|moves| { out.extend(moves); false });
        out
    }

    fn apply(&mut self, mv: Move) -> Result<()> {
        if !self.board.is_legal(mv) {
            return Err(Error::IllegalMove(self.uci(mv)));
        }
        self.history.push(self.board.clone());
        self.board.play_unchecked(mv);
        Ok(())
    }

    fn undo(&mut self) {
        if let Some(prev) = self.history.pop() { self.board = prev; }
    }

    fn is_checkmate(&self) -> bool { self.board.status() == GameStatus::Won }

    fn is_draw(&self) -> bool {
        self.board.status() == GameStatus::Drawn || self.is_threefold() || self.is_insufficient_material()
    }

    fn is_in_check(&self) -> bool { !self.board.checkers().is_empty() }

    fn side_to_move(&self) -> Side { side_of(self.board.side_to_move()) }

    fn board_state(&self) -> BoardState {
        let mut state = BoardState::empty();
        for (row, &rank) in Rank::ALL.iter().rev().enumerate() {
            for (col, &file) in File::ALL.iter().enumerate() {
                let sq = Square::new(file, rank);
                if let Some((piece, color)) = self.board.piece_on(sq).zip(self.board.color_on(sq)) {
                    state.set(row, col, Some(ColoredPiece::new(kind_of(piece), side_of(color))));
                }
            }
        }
        state
    }

    fn parse_move(&self, uci: &str) -> Option<Move> {
        let uci = uci.trim();
        self.legal_moves().into_iter().find(|&m| self.uci(m) == uci || format!("{}", m) == uci)
    }
}
