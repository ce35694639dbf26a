//! Top-level move selection per difficulty tier.
//!
//! * easy: uniform over legal moves, no search.
//! * medium: walks root moves in generation order at depth 2; before scoring
//!   each one it may bail out to a uniform random move (see
//!   [`RandomMovePolicy`]). If it never bails, it plays like hard.
//! * hard: scores every root move at depth 3 and keeps the first best.
//!
//! All randomness lives here; [`Searcher`] is deterministic.
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Rules;
use crate::config::{Difficulty, EngineConfig};
use crate::error::Result;
use crate::search::alphabeta::{RootOutcome, Searcher};
use crate::search::eval::Score;
use crate::search::noise::{pick_uniform, RandomMovePolicy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionKind {
    /// Easy tier draw.
    Uniform,
    /// Medium tier bailed out while root move `index` was applied.
    ShortCircuit { index: usize },
    /// Full root scan; `score` is from the mover's perspective.
    Searched { score: Score },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub difficulty: Difficulty,
    pub kind: SelectionKind,
    pub nodes: u64,
}

pub struct MoveSelector {
    rng: SmallRng,
    policy: RandomMovePolicy,
    searcher: Searcher,
    last: Option<Selection>,
}

impl Default for MoveSelector {
    fn default() -> Self { Self::new(None) }
}

impl MoveSelector {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_entropy(),
        };
        Self { rng, policy: RandomMovePolicy::default(), searcher: Searcher::default(), last: None }
    }

    pub fn from_config(cfg: &EngineConfig) -> Result<Self> {
        let policy = RandomMovePolicy::new(cfg.medium_random_rate)?;
        Ok(Self::new(cfg.seed).with_policy(policy))
    }

    pub fn with_policy(mut self, policy: RandomMovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RandomMovePolicy { self.policy }

    /// What the most recent non-empty selection did.
    pub fn last_selection(&self) -> Option<Selection> { self.last }

    /// Picks a move for the side to move. `Ok(None)` when there are no legal
    /// moves. The position is left exactly as it was found.
    pub fn select_move<R: Rules>(&mut self, rules: &mut R, difficulty: Difficulty) -> Result<Option<R::Move>> {
        let moves = rules.legal_moves();
        if moves.is_empty() {
            debug!("select {}: no legal moves", difficulty);
            return Ok(None);
        }
        let depth = match difficulty.depth() {
            None => {
                let mv = pick_uniform(&moves, &mut self.rng);
                self.record(difficulty, SelectionKind::Uniform, 0);
                return Ok(mv);
            }
            Some(d) => d,
        };
        let medium = difficulty == Difficulty::Medium;
        let policy = self.policy;
        let rng = &mut self.rng;
        let outcome = self.searcher.search_depth_with(rules, depth, || medium && policy.should_play_random(&mut *rng))?;
        match outcome {
            RootOutcome::Interrupted { index, nodes } => {
                let mv = pick_uniform(&moves, &mut self.rng);
                self.record(difficulty, SelectionKind::ShortCircuit { index }, nodes);
                Ok(mv)
            }
            RootOutcome::Completed(res) => {
                self.record(difficulty, SelectionKind::Searched { score: res.score }, res.nodes);
                Ok(res.bestmove)
            }
        }
    }

    fn record(&mut self, difficulty: Difficulty, kind: SelectionKind, nodes: u64) {
        debug!("select {}: {:?} nodes={}", difficulty, kind, nodes);
        self.last = Some(Selection { difficulty, kind, nodes });
    }
}
