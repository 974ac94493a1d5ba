use criterion::*;
use grid_trace_core::{find_words, Board, SolverConfig};

/// A square board cycling through a few letters, so that many words share
/// their prefixes and most of them can be traced.
fn cycle_board(size: usize) -> Board {
    const LETTERS: &[u8] = b"abcde";
    let rows: Vec<String> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| LETTERS[(row * 2 + col) % LETTERS.len()] as char)
                .collect()
        })
        .collect();
    Board::new(&rows).unwrap()
}

/// Every word of the given length over the board letters.
fn all_words(len: u32) -> Vec<String> {
    const LETTERS: &[u8] = b"abcde";
    let nb_letters = LETTERS.len();
    (0..nb_letters.pow(len))
        .map(|mut n| {
            (0..len)
                .map(|_| {
                    let c = LETTERS[n % nb_letters] as char;
                    n /= nb_letters;
                    c
                })
                .collect()
        })
        .collect()
}

fn cr_bench_find_words(c: &mut Criterion) {
    let board = cycle_board(8);
    let mut words = all_words(4);
    words.extend(all_words(6));

    let mut group = c.benchmark_group("find_words");
    group.bench_function("default", |b| {
        b.iter(|| find_words(black_box(&board), black_box(&words), SolverConfig::default()))
    });
    group.bench_function("no_prefilter_no_orient", |b| {
        let config = SolverConfig {
            prefilter: false,
            orient: false,
            dedup: true,
        };
        b.iter(|| find_words(black_box(&board), black_box(&words), config))
    });
    group.finish();
}

criterion_group!(benches, cr_bench_find_words);
criterion_main!(benches);
