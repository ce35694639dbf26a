use sparring::board::cozy::Position;
use sparring::session::IDLE_MESSAGE;
use sparring::{ColoredPiece, Difficulty, EngineConfig, Error, GameSession, GameStatus, PieceKind, Rules, Side};

fn cfg(difficulty: Difficulty, player_side: Side) -> EngineConfig {
    EngineConfig { difficulty, player_side, seed: Some(11), ..Default::default() }
}

#[test]
fn new_game_and_reset_messages() {
    let mut s: GameSession = GameSession::new(&cfg(Difficulty::Easy, Side::White)).unwrap();
    assert!(!s.is_started());
    assert_eq!(s.new_game(Difficulty::Hard), "Game started - Hard difficulty");
    assert!(s.is_started());
    assert_eq!(s.difficulty(), Difficulty::Hard);
    s.play_human("e2e4").unwrap();
    assert_eq!(s.reset(), IDLE_MESSAGE);
    assert_eq!(*s.position(), Position::startpos());
    assert_eq!(s.difficulty(), Difficulty::Hard);
}

#[test]
fn human_then_computer_alternate() {
    let mut s: GameSession = GameSession::new(&cfg(Difficulty::Medium, Side::White)).unwrap();
    s.new_game(Difficulty::Medium);
    assert_eq!(s.status_line(), "Your turn (White)");
    s.play_human("e2e4").unwrap();
    assert_eq!(s.status_line(), "Computer thinking...");
    assert!(matches!(s.play_human("d2d4"), Err(Error::WrongTurn(Side::Black))));
    let mv = s.play_computer().unwrap().expect("computer move");
    assert_eq!(s.position().ply_count(), 2, "computer move {mv} not applied");
    assert!(s.is_players_turn());
    assert_eq!(s.status(), GameStatus::ToMove { side: Side::White });
}

#[test]
fn computer_refuses_to_move_on_players_turn() {
    let mut s: GameSession = GameSession::new(&cfg(Difficulty::Easy, Side::White)).unwrap();
    assert!(matches!(s.play_computer(), Err(Error::WrongTurn(Side::White))));
}

#[test]
fn computer_opens_when_player_is_black() {
    let mut s: GameSession = GameSession::new(&cfg(Difficulty::Hard, Side::Black)).unwrap();
    s.new_game(Difficulty::Hard);
    assert_eq!(s.computer_side(), Side::White);
    assert!(!s.is_players_turn());
    assert!(s.play_computer().unwrap().is_some());
    assert_eq!(s.status_line(), "Your turn (Black)");
}

#[test]
fn illegal_human_move_is_rejected_without_side_effects() {
    let mut s: GameSession = GameSession::new(&cfg(Difficulty::Easy, Side::White)).unwrap();
    let before = s.position().clone();
    assert!(matches!(s.play_human("e2e5"), Err(Error::IllegalMove(_))));
    assert!(matches!(s.play_human("zz"), Err(Error::IllegalMove(_))));
    assert_eq!(*s.position(), before);
}

#[test]
fn pawn_promotes_to_queen_by_default() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let mut s = GameSession::with_position(pos, &cfg(Difficulty::Easy, Side::White)).unwrap();
    s.play_human("e7e8").unwrap();
    assert_eq!(s.position().board_state().get(0, 4), Some(ColoredPiece::new(PieceKind::Queen, Side::White)));
}

#[test]
fn explicit_underpromotion_is_kept() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let mut s = GameSession::with_position(pos, &cfg(Difficulty::Easy, Side::White)).unwrap();
    s.play_human("e7e8n").unwrap();
    assert_eq!(s.position().board_state().get(0, 4), Some(ColoredPiece::new(PieceKind::Knight, Side::White)));
}

#[test]
fn checkmate_messages_depend_on_player_side() {
    let moves: Vec<String> = ["f2f3", "e7e5", "g2g4", "d8h4"].iter().map(|s| s.to_string()).collect();
    let pos = Position::set_from_start_and_moves(&moves).unwrap();
    let status = GameStatus::of(&pos);
    assert_eq!(status, GameStatus::Checkmate { loser: Side::White });
    assert!(status.is_over());
    assert_eq!(status.describe(Side::White), "Computer wins! White is in checkmate.");
    assert_eq!(status.describe(Side::Black), "Congratulations, You Won! White is in checkmate.");

    let mut s = GameSession::with_position(pos, &cfg(Difficulty::Hard, Side::Black)).unwrap();
    assert!(s.play_computer().unwrap().is_none());
    assert!(matches!(s.play_human("a7a6"), Err(Error::GameOver)));
}

#[test]
fn check_and_draw_messages() {
    let check = Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();
    assert_eq!(GameStatus::of(&check).describe(Side::White), "White is in check");
    let draw = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(GameStatus::of(&draw), GameStatus::Draw);
    assert_eq!(GameStatus::Draw.describe(Side::White), "Game over - Draw");
}

#[test]
fn session_rejects_bad_rate() {
    let bad = EngineConfig { medium_random_rate: 2.0, ..Default::default() };
    assert!(matches!(GameSession::<Position>::new(&bad), Err(Error::Config(_))));
}

#[test]
fn computer_takes_free_queen_on_hard() {
    // Black to move, White queen hangs on d7.
    let pos = Position::from_fen("7k/3Qq3/8/8/8/8/8/K7 b - - 0 1").unwrap();
    let mut s = GameSession::with_position(pos, &cfg(Difficulty::Hard, Side::White)).unwrap();
    let mv = s.play_computer().unwrap().unwrap();
    assert_eq!(mv.to_string(), "e7d7");
}
