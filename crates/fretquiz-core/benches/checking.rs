use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fretquiz_core::answer::Answer;
use fretquiz_core::checker::check_answer;
use fretquiz_core::render::{render_answer, render_result, render_riddle};
use fretquiz_core::riddle::{Riddle, SampleOptions};
use fretquiz_core::theory::Spelling;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn bench_check_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_answer");
    let riddle = Riddle::new(&[3, 5, 7, 2, 0, 2], 12).unwrap();

    group.bench_function("sharps", |b| {
        let answer = Answer::parse("G E D E A F#");
        b.iter(|| check_answer(black_box(&answer), black_box(&riddle)))
    });

    group.bench_function("flats", |b| {
        let answer = Answer::parse("G E D E A Gb");
        b.iter(|| check_answer(black_box(&answer), black_box(&riddle)))
    });

    group.bench_function("parse_and_check", |b| {
        b.iter(|| check_answer(&Answer::parse(black_box("g e d e a gb")), &riddle))
    });

    group.finish();
}

fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");
    let options = SampleOptions::default();

    group.bench_function("sample_and_render", |b| {
        let mut rng = Pcg32::seed_from_u64(0);
        b.iter(|| {
            let riddle = Riddle::sample(&mut rng, &options).unwrap();
            render_riddle(riddle.frets())
        })
    });

    group.bench_function("reveal", |b| {
        let riddle = Riddle::new(&[3, 5, 7, 2, 0, 1], 12).unwrap();
        let answer = Answer::parse("G E D E A F#");
        let result = check_answer(&answer, &riddle).unwrap();
        let notes = riddle.correct_notes();
        b.iter(|| {
            let reveal = render_answer(black_box(&notes), Spelling::Sharps).unwrap();
            let marked = render_result(black_box(&result), &answer, &notes);
            reveal.len() + marked.len()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_check_answer, bench_round);
criterion_main!(benches);
