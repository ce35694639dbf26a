use log::trace;

use crate::board::{MoveGuard, Rules, Side};
use crate::error::Result;
use crate::search::eval::{evaluate_position, Score};

/// Best value a node starts from before any child is seen; also what a node
/// without legal moves returns.
pub const NODE_SENTINEL: Score = 99_990;
/// Half-width of the fresh window each root move is searched with.
pub const ROOT_WINDOW: Score = 100_000;

#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub bestmove: Option<M>,
    /// From the mover's perspective: higher is better for the side that moved.
    pub score: Score,
    pub nodes: u64,
}

#[derive(Debug, Clone)]
pub enum RootOutcome<M> {
    Completed(SearchResult<M>),
    /// The interrupt hook fired while root move `index` was applied.
    Interrupted { index: usize, nodes: u64 },
}

/// Fixed-depth minimax with alpha-beta pruning over a mutable position.
#[derive(Default, Debug, Clone)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Minimax value from White's perspective. `maximizing` is true when the
    /// side to move is treated as White. Stops scanning a node once
    /// `beta <= alpha`; the value returned then is a bound, not exact.
    pub fn search<R: Rules>(&mut self, rules: &mut R, depth: u32, mut alpha: Score, mut beta: Score, maximizing: bool) -> Result<Score> {
        self.nodes += 1;
        if depth == 0 { return Ok(evaluate_position(&*rules)); }
        let moves = rules.legal_moves();
        if maximizing {
            let mut best = -NODE_SENTINEL;
            for mv in moves {
                let sc = {
                    let mut child = MoveGuard::apply(rules, mv)?;
                    self.search(&mut *child, depth - 1, alpha, beta, false)?
                };
                best = best.max(sc);
                alpha = alpha.max(best);
                if beta <= alpha { return Ok(best); }
            }
            Ok(best)
        } else {
            let mut best = NODE_SENTINEL;
            for mv in moves {
                let sc = {
                    let mut child = MoveGuard::apply(rules, mv)?;
                    self.search(&mut *child, depth - 1, alpha, beta, true)?
                };
                best = best.min(sc);
                beta = beta.min(best);
                if beta <= alpha { return Ok(best); }
            }
            Ok(best)
        }
    }

    /// Scores the position reached after `mover` played a root move, from
    /// `mover`'s perspective. `depth` counts the root move itself.
    pub fn score_reply<R: Rules>(&mut self, rules: &mut R, mover: Side, depth: u32) -> Result<Score> {
        let maximizing = rules.side_to_move() == Side::White;
        let white = self.search(rules, depth.saturating_sub(1), -ROOT_WINDOW, ROOT_WINDOW, maximizing)?;
        Ok(if mover == Side::White { white } else { -white })
    }

    /// Scores every legal root move and keeps the first strictly best one.
    /// `interrupt` runs with each root move applied, before it is scored;
    /// returning true abandons the whole scan (the move is undone first).
    pub fn search_depth_with<R, F>(&mut self, rules: &mut R, depth: u32, mut interrupt: F) -> Result<RootOutcome<R::Move>>
    where
        R: Rules,
        F: FnMut() -> bool,
    {
        self.nodes = 0;
        let mover = rules.side_to_move();
        let mut bestmove: Option<R::Move> = None;
        let mut best_score = Score::MIN;
        for (index, mv) in rules.legal_moves().into_iter().enumerate() {
            let sc = {
                let mut child = MoveGuard::apply(rules, mv)?;
                if interrupt() {
                    return Ok(RootOutcome::Interrupted { index, nodes: self.nodes });
                }
                self.score_reply(&mut *child, mover, depth)?
            };
            trace!("root move {} scored {} (depth {})", mv, sc, depth);
            if sc > best_score { best_score = sc; bestmove = Some(mv); }
        }
        Ok(RootOutcome::Completed(SearchResult { bestmove, score: best_score, nodes: self.nodes }))
    }

    pub fn search_depth<R: Rules>(&mut self, rules: &mut R, depth: u32) -> Result<SearchResult<R::Move>> {
        match self.search_depth_with(rules, depth, || false)? {
            RootOutcome::Completed(res) => Ok(res),
            RootOutcome::Interrupted { nodes, .. } => Ok(SearchResult { bestmove: None, score: Score::MIN, nodes }),
        }
    }
}
