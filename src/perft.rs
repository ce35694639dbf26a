use crate::board::{MoveGuard, Rules};
use crate::error::Result;

// Leaf count through apply/undo on the rules seam; exercises a backend's
// move generation and its undo discipline together.
pub fn perft<R: Rules>(rules: &mut R, depth: u32) -> Result<u64> {
    if depth == 0 { return Ok(1); }
    let moves = rules.legal_moves();
    if depth == 1 { return Ok(moves.len() as u64); }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = MoveGuard::apply(rules, mv)?;
        nodes += perft(&mut *child, depth - 1)?;
    }
    Ok(nodes)
}
