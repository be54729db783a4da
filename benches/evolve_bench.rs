//! Criterion benchmarks for u-evolve pipelines and rule interpreters.
//!
//! Uses synthetic problems (OneMax, Sphere, random rule sets) to measure
//! operator overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::sync::Arc;
use u_evolve::coders::{BinaryCoder, FloatCoder};
use u_evolve::core::Coder;
use u_evolve::ea::{EaConfig, GenerationalEa};
use u_evolve::pipeline::{CloneOp, Evaluate};
use u_evolve::pitt::{Executable, InterpreterConfig, MatchingMode, PittBoundsCoder, PittConfig};
use u_evolve::problems::{FunctionProblem, Objective, SimilarityProblem};
use u_evolve::random::create_rng;
use u_evolve::select::{DeterministicSelection, TournamentSelection};
use u_evolve::survive::{Elitism, MuLambdaSurvival};
use u_evolve::variation::{BitFlipMutation, GaussianMutation, MutationRate, UniformCrossover};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let config = EaConfig::default()
            .with_population_size(100)
            .with_max_generations(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| {
                let pipeline = Elitism::new(
                    Evaluate::new(
                        BitFlipMutation::bit_flip(
                            UniformCrossover::new(
                                CloneOp::new(TournamentSelection::new(2).unwrap()),
                                0.9,
                                0.5,
                            )
                            .unwrap(),
                            MutationRate::Expected(1.0),
                        )
                        .unwrap(),
                    ),
                    2,
                );
                let result = GenerationalEa::run(
                    Arc::new(SimilarityProblem::one_max(n)),
                    Arc::new(BinaryCoder::new(n)),
                    pipeline,
                    black_box(config),
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_es_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("es_sphere");
    group.sample_size(10);

    for &dim in &[10usize, 50] {
        let config = EaConfig::default()
            .with_population_size(20)
            .with_max_generations(100)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &config, |b, config| {
            b.iter(|| {
                let pipeline = MuLambdaSurvival::comma(
                    Evaluate::new(
                        GaussianMutation::gaussian(
                            CloneOp::new(DeterministicSelection::shuffled()),
                            0.1,
                            MutationRate::every_gene(),
                        )
                        .unwrap(),
                    ),
                    140,
                )
                .unwrap();
                let result = GenerationalEa::run(
                    Arc::new(FunctionProblem::new(sphere as fn(&[f64]) -> f64, Objective::Minimize)),
                    Arc::new(FloatCoder::new(vec![(-5.0, 5.0); dim])),
                    pipeline,
                    black_box(config),
                );
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_rule_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_execute");

    for (name, matching) in [
        ("exact", MatchingMode::Exact),
        ("partial", MatchingMode::Partial),
        ("nearest", MatchingMode::NearestNeighbor),
    ] {
        let interpreter = InterpreterConfig::new(4, 1).with_matching(matching);
        let rule_len = interpreter.min_rule_len();
        let coder = PittBoundsCoder::new(
            FloatCoder::new(vec![(0.0, 1.0); rule_len]),
            PittConfig::new(100, 100, interpreter),
        )
        .unwrap();
        let mut rng = create_rng(42);
        let phenome = coder.decode_genome(&coder.create_random_genome(&mut rng));
        let inputs: Vec<Vec<f64>> = (0..64)
            .map(|_| (0..4).map(|_| rng.random::<f64>()).collect())
            .collect();

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            let mut phenome = phenome.clone();
            let mut rng = create_rng(7);
            b.iter(|| {
                for input in &inputs {
                    black_box(phenome.execute(black_box(input), &mut rng));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_onemax, bench_es_sphere, bench_rule_execute);
criterion_main!(benches);
