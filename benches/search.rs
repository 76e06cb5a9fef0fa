use anagram_finder::{find_anagrams, load_dictionary, AnagramSolver};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn bench_find_anagrams(c: &mut Criterion) {
    let lexicon = load_dictionary();

    c.bench_function("find_anagrams short rack", |b| {
        b.iter(|| find_anagrams(black_box("stare"), &lexicon))
    });
    c.bench_function("find_anagrams long rack", |b| {
        b.iter(|| find_anagrams(black_box("aeinorst"), &lexicon))
    });
}

fn bench_solve_many(c: &mut Criterion) {
    let solver = AnagramSolver::new(Arc::new(load_dictionary()));
    let racks = ["stare", "heart", "stone", "eelst", "aetrsn", "dogs", "bread", "grin"];

    c.bench_function("solve_many", |b| b.iter(|| solver.solve_many(black_box(&racks))));
}

criterion_group!(benches, bench_find_anagrams, bench_solve_many);
criterion_main!(benches);
