// Criterion benchmarks for the dictionary corrector.
//
// Run:
//   cargo bench -p tapefix-spell

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tapefix_spell::{Corrector, DictionaryCorrector};

const KNOWN: &[&str] = &["the", "world", "because", "government"];
const DISTANCE_ONE: &[&str] = &["teh", "wrold", "becuase", "definately"];
const DISTANCE_TWO: &[&str] = &["wrlod", "recieev", "speeling"];

fn bench_correct(c: &mut Criterion) {
    let corrector = DictionaryCorrector::builtin();
    for (name, words) in [
        ("correct_known", KNOWN),
        ("correct_distance_1", DISTANCE_ONE),
        ("correct_distance_2", DISTANCE_TWO),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                for word in words {
                    black_box(corrector.correct(black_box(word)));
                }
            })
        });
    }
}

fn bench_builtin_load(c: &mut Criterion) {
    c.bench_function("builtin_lexicon", |b| {
        b.iter(|| black_box(DictionaryCorrector::builtin()))
    });
}

criterion_group!(benches, bench_correct, bench_builtin_load);
criterion_main!(benches);
