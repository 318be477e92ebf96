use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use songsmith::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_source() -> PromptSource {
    PromptSource::new((0..200).map(|i| format!("prompt {}", i)).collect()).unwrap()
}

// ---------------------------------------------------------------------------------------------

pub fn pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prompt");
    let source = create_source();
    let mut picker = PromptPicker::new(Some(0x1234));
    group.bench_function("Pick", |b| b.iter(|| black_box(picker.pick(&source))));
    group.finish();
}

pub fn exercise(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prompt");
    group.bench_function("Exercise Run", |b| {
        let mut exercise = Exercise::new(create_source(), Box::new(SilentChime))
            .with_picker(PromptPicker::new(Some(0x1234)));
        b.iter(|| {
            exercise.start();
            while exercise.is_ticking() {
                black_box(exercise.tick());
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = prompt;
    config = Criterion::default();
    targets = pick, exercise
}
