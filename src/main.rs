use anyhow::Result;
use clap::Parser;
use sparring::board::cozy::Position;
use sparring::{Difficulty, EngineConfig, GameSession, Rules, Side};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the computer", long_about = None)]
struct Args {
    /// Difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long)]
    color: Option<String>,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// JSON engine config; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn parse_color(color_str: &str) -> Result<Side> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn print_board(session: &GameSession) {
    println!("\n{}", session.position().board_state());
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match args.config.as_deref() {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.difficulty { cfg.difficulty = d; }
    if let Some(c) = args.color.as_deref() { cfg.player_side = parse_color(c)?; }
    if args.seed.is_some() { cfg.seed = args.seed; }
    cfg.validate()?;

    let mut session: GameSession = match args.fen.as_deref() {
        Some(fen) => GameSession::with_position(Position::from_fen(fen)?, &cfg)?,
        None => GameSession::new(&cfg)?,
    };
    if args.fen.is_none() {
        println!("{}", session.new_game(cfg.difficulty));
    } else {
        println!("Playing from FEN at {} difficulty", cfg.difficulty);
    }
    println!("Enter moves like e2e4 ('new <difficulty>', 'reset' or 'quit' also work)");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&session);
        let status = session.status();
        println!("{}", status.describe(session.player_side()));
        if status.is_over() {
            break;
        }

        if session.is_players_turn() {
            print!("> ");
            io::stdout().flush()?;
            let line = match lines.next() { Some(l) => l?, None => break };
            let input = line.trim();
            if input.is_empty() { continue; }
            if input == "quit" { break; }
            if input == "reset" { println!("{}", session.reset()); continue; }
            if let Some(rest) = input.strip_prefix("new") {
                match rest.trim().parse::<Difficulty>() {
                    Ok(d) => println!("{}", session.new_game(d)),
                    Err(e) => println!("{e}"),
                }
                continue;
            }
            if let Err(e) = session.play_human(input) {
                println!("{e}");
            }
        } else {
            let start = Instant::now();
            match session.play_computer()? {
                Some(mv) => println!("Computer plays: {}", mv),
                None => break,
            }
            if args.verbose {
                if let Some(sel) = session.selector().last_selection() {
                    println!("{:?} nodes={} elapsed={:.3}s", sel.kind, sel.nodes, start.elapsed().as_secs_f64());
                }
            }
        }
    }

    Ok(())
}
