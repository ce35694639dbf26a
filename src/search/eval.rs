use crate::board::{BoardState, PieceKind, Rules, Side};

/// Centi-units: a pawn is 100, the central bonus peaks at 3 per piece.
pub type Score = i32;

const PAWN: Score = 100;
const KNIGHT: Score = 300;
const BISHOP: Score = 300;
const ROOK: Score = 500;
const QUEEN: Score = 900;
const KING: Score = 9000;

pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => PAWN,
        PieceKind::Knight => KNIGHT,
        PieceKind::Bishop => BISHOP,
        PieceKind::Rook => ROOK,
        PieceKind::Queen => QUEEN,
        PieceKind::King => KING,
    }
}

/// `4 - |3.5 - row| - |3.5 - col|` tenths of a pawn, kept integral by
/// working in doubled coordinates.
pub fn position_bonus(row: usize, col: usize) -> Score {
    let dr = (7 - 2 * row as Score).abs();
    let dc = (7 - 2 * col as Score).abs();
    4 - (dr + dc) / 2
}

// White-positive: material plus centrality, negated as a whole for Black pieces.
pub fn evaluate(board: &BoardState) -> Score {
    board.pieces().map(|(row, col, p)| {
        let v = piece_value(p.kind) + position_bonus(row, col);
        if p.side == Side::White { v } else { -v }
    }).sum()
}

pub fn evaluate_position<R: Rules>(rules: &R) -> Score {
    evaluate(&rules.board_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColoredPiece;

    #[test]
    fn bonus_peaks_in_center() {
        assert_eq!(position_bonus(3, 3), 3);
        assert_eq!(position_bonus(4, 4), 3);
        assert_eq!(position_bonus(0, 0), -3);
        assert_eq!(position_bonus(7, 0), -3);
        assert_eq!(position_bonus(0, 3), 0);
    }

    #[test]
    fn single_piece_scores() {
        let mut b = BoardState::empty();
        b.set(4, 3, Some(ColoredPiece::new(PieceKind::Knight, Side::White)));
        assert_eq!(evaluate(&b), 303);
        b.set(0, 0, Some(ColoredPiece::new(PieceKind::Rook, Side::Black)));
        assert_eq!(evaluate(&b), 303 - (500 - 3));
    }
}
