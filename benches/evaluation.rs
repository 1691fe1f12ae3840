use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grapher_rs::expression::Parser;
use grapher_rs::sampling::{SampleConfig, Sampler};

/// Benchmark turning text into a callable function
fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Expression Parsing");

    let parser = Parser::new();
    let expr = "sin ( x ) * x ^ 2 - 3 * x + 1";
    let meval_expr = "sin(x) * x^2 - 3 * x + 1";

    group.bench_function("parse_expression", |b| {
        b.iter(|| parser.parse(black_box(expr)).unwrap())
    });

    group.bench_function("meval_parse_and_bind", |b| {
        b.iter(|| {
            let parsed: meval::Expr = black_box(meval_expr).parse().unwrap();
            parsed.bind("x").unwrap()
        })
    });
}

/// Benchmark constant arithmetic, which folds at parse time
fn benchmark_constant_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Constant Arithmetic");

    let parser = Parser::new();
    let expr = "( 10 + 20 ) * 3 / ( 4 - 1 ) + 5";
    let compiled = parser.parse(expr).unwrap();

    group.bench_function("parse_and_evaluate", |b| {
        b.iter(|| parser.parse(black_box(expr)).unwrap().eval(0.0))
    });

    group.bench_function("precompiled_evaluate", |b| {
        b.iter(|| compiled.eval(black_box(0.0)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box("(10 + 20) * 3 / (4 - 1) + 5")).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box("(10 + 20) * 3 / (4 - 1) + 5")).unwrap())
    });
}

/// Benchmark repeated evaluation of a compiled function
fn benchmark_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Evaluation");

    let compiled = Parser::new().parse("sin ( x ) * x ^ 2 - 3 * x + 1").unwrap();
    let meval_fn = "sin(x) * x^2 - 3 * x + 1"
        .parse::<meval::Expr>()
        .unwrap()
        .bind("x")
        .unwrap();

    group.bench_function("compiled_function", |b| {
        b.iter(|| compiled.eval(black_box(1.5)))
    });

    group.bench_function("meval_bound_function", |b| {
        b.iter(|| meval_fn(black_box(1.5)))
    });

    group.bench_function("native_rust_function", |b| {
        b.iter(|| {
            let x: f64 = black_box(1.5);
            x.sin() * x.powf(2.0) - 3.0 * x + 1.0
        })
    });
}

/// Benchmark sampling a function across the default window
fn benchmark_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sampling");

    let compiled = Parser::new().parse("tan ( x ) + sqrt ( abs ( x ) )").unwrap();
    let config = SampleConfig::default().with_step(0.0001);
    let sampler = Sampler::new(config.clone());

    group.bench_function("parallel_sample", |b| {
        b.iter(|| sampler.sample(black_box(&compiled)).unwrap())
    });

    group.bench_function("sequential_sample", |b| {
        b.iter(|| {
            let count = config.sample_count().unwrap();
            (0..count)
                .map(|i| compiled.eval(config.x_min + i as f64 * config.step))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("polylines", |b| {
        b.iter(|| sampler.polylines(black_box(&compiled)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_constant_arithmetic,
    benchmark_evaluation,
    benchmark_sampling,
);
criterion_main!(benches);
