use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use songsmith::{circle::CIRCLE_OF_FIFTHS, prelude::*};

// ---------------------------------------------------------------------------------------------

const KEY_NAMES: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

fn create_progression() -> Vec<&'static str> {
    // long enough so the suggestions have to look at the tail only
    let mut progression = Vec::new();
    for _ in 0..16 {
        progression.extend(["G", "D", "Em", "C", "Am", "Bm", "F#dim"]);
    }
    progression
}

// ---------------------------------------------------------------------------------------------

pub fn chords(c: &mut Criterion) {
    let mut group = c.benchmark_group("Theory");
    group.bench_function("Chords In Key", |b| {
        b.iter(|| {
            for name in KEY_NAMES {
                black_box(chords_in_key(name).ok());
            }
        })
    });
    group.bench_function("Related Keys", |b| {
        let keys = CIRCLE_OF_FIFTHS
            .iter()
            .filter_map(|name| Key::try_from(*name).ok())
            .collect::<Vec<_>>();
        b.iter(|| {
            for key in &keys {
                black_box(key.related());
            }
        })
    });
    group.finish();
}

pub fn progressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Theory");
    let key = Key::try_from("G").unwrap();
    let progression = create_progression();
    group.bench_function("Suggest Next", |b| {
        b.iter(|| black_box(suggest_next(progression.as_slice(), &key)))
    });
    group.bench_function("Apply Templates", |b| {
        b.iter(|| {
            for template in COMMON_PROGRESSIONS.iter() {
                black_box(template.chords(&key));
            }
            black_box(apply_template(&["I", "bVII", "IV", "I", "bIII", "vii°"], &key))
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = theory;
    config = Criterion::default();
    targets = chords, progressions
}
