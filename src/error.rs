use thiserror::Error;

use crate::board::Side;

#[derive(Debug, Error)]
pub enum Error {
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("game is over")]
    GameOver,
    #[error("it is {0}'s turn to move")]
    WrongTurn(Side),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
