use log::{debug, warn};

use crate::board::cozy::Position;
use crate::board::{Rules, Side};
use crate::config::{Difficulty, EngineConfig};
use crate::error::{Error, Result};
use crate::search::select::MoveSelector;

pub const IDLE_MESSAGE: &str = "Select difficulty to start";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Checkmate { loser: Side },
    Draw,
    Check { side: Side },
    ToMove { side: Side },
}

impl GameStatus {
    pub fn of<R: Rules>(rules: &R) -> Self {
        let side = rules.side_to_move();
        if rules.is_checkmate() { GameStatus::Checkmate { loser: side } }
        else if rules.is_draw() { GameStatus::Draw }
        else if rules.is_in_check() { GameStatus::Check { side } }
        else { GameStatus::ToMove { side } }
    }

    pub fn is_over(&self) -> bool { matches!(self, GameStatus::Checkmate { .. } | GameStatus::Draw) }

    /// Status line as shown to a human playing `player`.
    pub fn describe(&self, player: Side) -> String {
        match *self {
            GameStatus::Checkmate { loser } if loser == player => format!("Computer wins! {} is in checkmate.", loser),
            GameStatus::Checkmate { loser } => format!("Congratulations, You Won! {} is in checkmate.", loser),
            GameStatus::Draw => "Game over - Draw".to_string(),
            GameStatus::Check { side } => format!("{} is in check", side),
            GameStatus::ToMove { side } if side == player => format!("Your turn ({})", side),
            GameStatus::ToMove { .. } => "Computer thinking...".to_string(),
        }
    }
}

/// One human-vs-engine game: the position, the tier chosen for it, and the
/// selector. Difficulty only changes through [`GameSession::new_game`].
pub struct GameSession<R: Rules + Default = Position> {
    rules: R,
    difficulty: Difficulty,
    player: Side,
    selector: MoveSelector,
    started: bool,
}

impl<R: Rules + Default> GameSession<R> {
    pub fn new(cfg: &EngineConfig) -> Result<Self> {
        Self::with_position(R::default(), cfg)
    }

    pub fn with_position(rules: R, cfg: &EngineConfig) -> Result<Self> {
        let selector = MoveSelector::from_config(cfg)?;
        Ok(Self { rules, difficulty: cfg.difficulty, player: cfg.player_side, selector, started: false })
    }

    /// Fresh position at `difficulty`. Returns the announcement line.
    pub fn new_game(&mut self, difficulty: Difficulty) -> String {
        self.rules = R::default();
        self.difficulty = difficulty;
        self.started = true;
        debug!("new game: difficulty={} player={}", difficulty, self.player);
        format!("Game started - {} difficulty", difficulty)
    }

    /// Fresh position, difficulty kept.
    pub fn reset(&mut self) -> &'static str {
        self.rules = R::default();
        self.started = false;
        IDLE_MESSAGE
    }

    pub fn position(&self) -> &R { &self.rules }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
    pub fn player_side(&self) -> Side { self.player }
    pub fn computer_side(&self) -> Side { self.player.opposite() }
    pub fn is_started(&self) -> bool { self.started }
    pub fn selector(&self) -> &MoveSelector { &self.selector }

    pub fn status(&self) -> GameStatus { GameStatus::of(&self.rules) }

    pub fn status_line(&self) -> String { self.status().describe(self.player) }

    pub fn is_players_turn(&self) -> bool { self.rules.side_to_move() == self.player }

    /// Plays the human's move. A pawn reaching the last rank without a
    /// promotion letter becomes a queen.
    pub fn play_human(&mut self, uci: &str) -> Result<R::Move> {
        if self.rules.is_game_over() { return Err(Error::GameOver); }
        let stm = self.rules.side_to_move();
        if stm != self.player { return Err(Error::WrongTurn(stm)); }
        let uci = uci.trim();
        let mv = self.rules.parse_move(uci)
            .or_else(|| self.rules.parse_move(&format!("{uci}q")))
            .ok_or_else(|| {
                warn!("rejected human move {uci}");
                Error::IllegalMove(uci.to_string())
            })?;
        self.rules.apply(mv)?;
        Ok(mv)
    }

    /// Lets the engine move. `Ok(None)` once the game is over.
    pub fn play_computer(&mut self) -> Result<Option<R::Move>> {
        if self.rules.is_game_over() { return Ok(None); }
        let stm = self.rules.side_to_move();
        if stm == self.player { return Err(Error::WrongTurn(stm)); }
        let Some(mv) = self.selector.select_move(&mut self.rules, self.difficulty)? else { return Ok(None) };
        self.rules.apply(mv)?;
        debug!("computer played {}", mv);
        Ok(Some(mv))
    }
}
