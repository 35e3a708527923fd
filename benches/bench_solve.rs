use criterion::{criterion_group, criterion_main, Criterion};
use wwf_solver::{solve, Board, Dictionary, Rack, TileSet};

const WORDS: &[&str] = &[
    "at", "be", "do", "go", "he", "hi", "in", "is", "it", "me", "no", "of", "on", "or", "so",
    "to", "up", "us", "we", "ate", "bat", "bet", "cat", "cot", "dog", "eat", "hat", "hit",
    "hot", "net", "not", "oat", "one", "rat", "rot", "sat", "set", "sit", "ten", "tin", "toe",
    "ton", "tone", "note", "stone", "notes", "onset", "seton", "steno", "tones", "rest",
    "rust", "rats", "star", "tars", "arts", "tear", "rate", "heat", "hate", "eats", "east",
    "seat", "teas", "tease", "easter", "theater", "treats", "stare", "tears", "rates",
    "hearts", "earth", "heart", "hater", "other", "throne", "hornet", "honest", "ethos",
    "those", "shot", "host", "hots", "toes", "dots", "dote", "doth", "dose",
];

const STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "......h........",
    "......e........",
    "......a........",
    ".....stone.....",
    ".......n.......",
    ".......e.......",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn bench_solve(c: &mut Criterion, name: &str, letters: &str) {
    let tileset = TileSet::default();
    let dictionary = Dictionary::from_words(WORDS);
    let board = Board::default()
        .with_state_from_strings(&tileset, STATE)
        .unwrap();
    let rack = Rack::from_letters(&tileset, letters);
    c.bench_function(&format!("solve.{}", name), |b| {
        b.iter(|| solve(&dictionary, &board, &rack).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_solve(c, "1", "rsat");
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_solve(c, "2", "hersto?");
    bench_solve(c, "3", "eats??r");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
