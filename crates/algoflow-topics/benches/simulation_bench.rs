//! Benchmarks for AlgoFlow topic simulations
//!
//! Measures performance of:
//! - Registry construction
//! - Simulation ticks per topic
//! - Step rendering

use std::time::Duration;

use algoflow_core::{Canvas, Mode, PlaybackEngine, TopicRegistry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark building the full topic registry
fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_build", |b| {
        b.iter(|| algoflow_topics::registry().map(|r| black_box(r.len())))
    });
}

/// Benchmark one minute of simulated time for every topic
fn bench_simulation_minute(c: &mut Criterion) {
    let Ok(registry) = algoflow_topics::registry() else {
        return;
    };
    let mut group = c.benchmark_group("simulation_minute");

    for topic in registry.iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(&topic.id), topic, |b, topic| {
            b.iter(|| {
                let mut engine = PlaybackEngine::enter(topic.clone());
                engine.switch_to(Mode::Simulation);
                engine.start(Duration::ZERO);
                black_box(engine.advance_to(Duration::from_secs(60)))
            })
        });
    }
    group.finish();
}

/// Benchmark rendering every narrative step of every topic
fn bench_step_render(c: &mut Criterion) {
    let Ok(registry) = algoflow_topics::registry() else {
        return;
    };
    let steps: usize = registry.iter().map(|t| t.step_count()).sum();

    let mut group = c.benchmark_group("step_render");
    group.throughput(Throughput::Elements(steps as u64));
    group.bench_function("all_topics", |b| {
        b.iter(|| render_all(black_box(&registry)))
    });
    group.finish();
}

fn render_all(registry: &TopicRegistry) -> u64 {
    let mut canvas = Canvas::new();
    for topic in registry.iter() {
        for step in &topic.steps {
            step.render(&mut canvas);
        }
    }
    canvas.renders()
}

criterion_group!(
    benches,
    bench_registry,
    bench_simulation_minute,
    bench_step_render,
);

criterion_main!(benches);
