use criterion::{criterion_group, criterion_main, Criterion, black_box};
use sparring::board::cozy::Position;
use sparring::search::alphabeta::Searcher;
use sparring::{Difficulty, MoveSelector};

fn bench_search(c: &mut Criterion) {
    let mut p = Position::startpos();
    c.bench_function("search_depth_3_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::default();
            let r = s.search_depth(black_box(&mut p), 3).unwrap();
            black_box(r.nodes)
        })
    });
    let mut kiwi = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    c.bench_function("select_hard_kiwipete", |ben| {
        let mut sel = MoveSelector::new(Some(1));
        ben.iter(|| black_box(sel.select_move(&mut kiwi, Difficulty::Hard).unwrap()))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
