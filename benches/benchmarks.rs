// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textkit::{capitalize, count_words, parse_jobs, run_batch, slugify, truncate};

const PARAGRAPH: &str = "The quick brown fox -- jumps over__the lazy dog!\n\tPack my box with \
                         five dozen liquor jugs; Sphinx of black quartz, judge my vow.";

fn benchmark_slugify(c: &mut Criterion,)
{
    c.bench_function("slugify_paragraph", |b| b.iter(|| slugify(black_box(PARAGRAPH,),),),);
}

fn benchmark_truncate(c: &mut Criterion,)
{
    c.bench_function("truncate_paragraph", |b| {
        b.iter(|| truncate(black_box(PARAGRAPH,), black_box(40,),),)
    },);
}

fn benchmark_capitalize(c: &mut Criterion,)
{
    c.bench_function("capitalize_paragraph", |b| b.iter(|| capitalize(black_box(PARAGRAPH,),),),);
}

fn benchmark_count_words(c: &mut Criterion,)
{
    let large = PARAGRAPH.repeat(100,);

    c.bench_function("count_words_paragraph", |b| b.iter(|| count_words(black_box(PARAGRAPH,),),),);
    c.bench_function("count_words_large", |b| b.iter(|| count_words(black_box(&large,),),),);
}

fn benchmark_batch(c: &mut Criterion,)
{
    let mut yaml = String::from("defaults:\n  max_length: 24\njobs:\n",);
    for index in 0..100 {
        let operation = ["slugify", "truncate", "capitalize", "count_words"][index % 4];
        yaml.push_str(&format!(
            "  - operation: {operation}\n    input: \"Item {index} of a sample batch document\"\n"
        ),);
    }
    let document = parse_jobs(&yaml,).expect("parse failed",);

    c.bench_function("parse_100_jobs", |b| {
        b.iter(|| parse_jobs(black_box(&yaml,),).expect("parse failed",),)
    },);
    c.bench_function("run_100_jobs", |b| b.iter(|| run_batch(black_box(&document,),),),);
}

criterion_group!(
    benches,
    benchmark_slugify,
    benchmark_truncate,
    benchmark_capitalize,
    benchmark_count_words,
    benchmark_batch
);
criterion_main!(benches);
