use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use sparring::board::cozy::Position;
use sparring::perft::perft;
use sparring::{MoveGuard, Rules};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the rules backends")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn root_split(base: &Position, depth: u32) -> Result<Vec<(String, u64)>> {
    let root_moves = base.legal_moves();
    root_moves.par_iter().map(|&mv| {
        let mut b = base.clone();
        let name = b.uci(mv);
        let mut child = MoveGuard::apply(&mut b, mv)?;
        Ok((name, perft(&mut *child, depth - 1)?))
    }).collect::<sparring::Result<Vec<_>>>().map_err(Into::into)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut base = if args.fen == "startpos" { Position::startpos() } else { Position::from_fen(&args.fen)? };

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = if args.depth == 0 {
        1
    } else if args.divide || args.threads > 1 {
        let per_move = pool.install(|| root_split(&base, args.depth))?;
        if args.divide {
            for (name, n) in &per_move { println!("{name}: {n}"); }
        }
        per_move.iter().map(|(_, n)| n).sum()
    } else {
        perft(&mut base, args.depth)?
    };
    let dt = t0.elapsed();
    if args.nps {
        let nps = if dt.as_secs_f64() > 0.0 { nodes as f64 / dt.as_secs_f64() } else { 0.0 };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt.as_secs_f64(), nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
