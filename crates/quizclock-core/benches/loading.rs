use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizclock_core::parser::{load_quiz_from_reader, validate_quiz};
use quizclock_core::shuffle::{shuffle_quiz, ShuffleMode};

fn arithmetic_table(rows: usize) -> String {
    let mut table = String::from("question,answer\n");
    for i in 0..rows {
        table.push_str(&format!("{i}+{i},{}\n", i * 2));
    }
    table
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_quiz");

    let small = arithmetic_table(12);
    let large = arithmetic_table(10_000);
    let quoted = {
        let mut s = String::from("question,answer\n");
        for i in 0..1_000 {
            s.push_str(&format!("\"what, exactly, is {i} \"\"doubled\"\"\",{}\n", i * 2));
        }
        s
    };

    group.bench_function("small", |b| {
        b.iter(|| load_quiz_from_reader(black_box(small.as_bytes())))
    });

    group.bench_function("large", |b| {
        b.iter(|| load_quiz_from_reader(black_box(large.as_bytes())))
    });

    group.bench_function("quoted", |b| {
        b.iter(|| load_quiz_from_reader(black_box(quoted.as_bytes())))
    });

    group.finish();
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_quiz");

    let quiz = load_quiz_from_reader(arithmetic_table(10_000).as_bytes()).unwrap();

    group.bench_function("shuffle_seeded", |b| {
        b.iter(|| {
            let mut q = quiz.clone();
            shuffle_quiz(black_box(&mut q), ShuffleMode::Seeded(42));
            q
        })
    });

    group.bench_function("validate", |b| b.iter(|| validate_quiz(black_box(&quiz))));

    group.finish();
}

criterion_group!(benches, bench_load, bench_prepare);
criterion_main!(benches);
