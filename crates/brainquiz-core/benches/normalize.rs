use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use brainquiz_core::model::RawQuiz;
use brainquiz_core::normalize::{normalize, parse_raw_quiz, shuffle_choices, validate};

fn make_raw(questions: usize, choices: usize) -> RawQuiz {
    let perguntas: Vec<_> = (0..questions)
        .map(|i| {
            json!({
                "id": i,
                "pergunta": format!("Question {i}?"),
                "alternativas": (0..choices).map(|c| format!("choice {c}")).collect::<Vec<_>>(),
                "respostaCorreta": i % choices,
                "explicacao": "because",
                "tempo": 20
            })
        })
        .collect();
    serde_json::from_value(json!({
        "id": 1,
        "titulo": "Bench quiz",
        "perguntas": perguntas
    }))
    .unwrap()
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let small = make_raw(10, 4);
    group.bench_function("10 questions", |b| b.iter(|| validate(black_box(&small))));

    let large = make_raw(200, 5);
    group.bench_function("200 questions", |b| b.iter(|| validate(black_box(&large))));

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let raw = make_raw(50, 4);

    group.bench_function("50 questions", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| normalize(black_box(&raw), &mut rng))
    });

    let choices: Vec<String> = (0..8).map(|c| format!("choice {c}")).collect();
    group.bench_function("shuffle 8 choices", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| shuffle_choices(black_box(&choices), &mut rng))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let content = serde_json::to_string(&json!({ "quiz": make_raw(50, 4) })).unwrap();
    c.bench_function("parse wrapped quiz", |b| {
        b.iter(|| parse_raw_quiz(black_box(&content)))
    });
}

criterion_group!(benches, bench_validate, bench_normalize, bench_parse);
criterion_main!(benches);
