// Computer chess opponent: rules seam, evaluator, bounded alpha-beta, tiered selection
pub mod board;
pub mod config;
pub mod error;
pub mod perft;
pub mod search;
pub mod session;

pub use board::{BoardState, ColoredPiece, MoveGuard, PieceKind, Rules, Side};
pub use config::{Difficulty, EngineConfig};
pub use error::{Error, Result};
pub use search::select::MoveSelector;
pub use session::{GameSession, GameStatus};
