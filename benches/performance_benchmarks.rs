use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wellscore::{
    accumulation, burnout, generate_report, generate_reports_parallel, stats, volatility,
    DailySignals, ReportOptions, DEFAULT_CONFIG,
};

/// Performance benchmarks for the scoring engine
///
/// Series lengths span a week to a year of daily check-ins.

fn create_signals(days: usize) -> DailySignals {
    let wave = |offset: f64, amplitude: f64, base: f64| -> Vec<f64> {
        (0..days)
            .map(|d| base + amplitude * ((d as f64 + offset) * 0.7).sin())
            .collect()
    };

    DailySignals::new(
        wave(0.0, 2.0, 6.0),
        wave(1.0, 2.5, 5.0),
        wave(2.0, 1.5, 7.0),
        wave(3.0, 2.0, 6.0),
    )
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Numeric Primitives");

    for &days in &[7, 30, 90, 365] {
        let series = create_signals(days).mood;

        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("stddev", days), &series, |b, s| {
            b.iter(|| stats::stddev(black_box(s)));
        });
        group.bench_with_input(
            BenchmarkId::new("linear_trend_slope", days),
            &series,
            |b, s| {
                b.iter(|| stats::linear_trend_slope(black_box(s)));
            },
        );
    }

    group.finish();
}

fn bench_calculators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Calculators");

    for &days in &[7, 30, 90, 365] {
        let signals = create_signals(days);

        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("volatility", days), &signals, |b, s| {
            b.iter(|| volatility::VolatilityCalculator::calculate(&s.mood, &DEFAULT_CONFIG));
        });
        group.bench_with_input(BenchmarkId::new("accumulation", days), &signals, |b, s| {
            b.iter(|| accumulation::AccumulationCalculator::calculate(&s.stress, &DEFAULT_CONFIG));
        });
        group.bench_with_input(BenchmarkId::new("burnout", days), &signals, |b, s| {
            b.iter(|| {
                burnout::BurnoutCalculator::calculate(
                    &s.mood,
                    &s.stress,
                    &s.sleep,
                    &s.energy,
                    &DEFAULT_CONFIG,
                )
            });
        });
    }

    group.finish();
}

fn bench_report_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Report Generation");

    for &days in &[7, 30, 90, 365] {
        let signals = create_signals(days);

        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_report", days),
            &signals,
            |b, s| {
                b.iter(|| generate_report(black_box(s), &DEFAULT_CONFIG));
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Scoring");
    group.sample_size(20);

    for &count in &[10, 100, 1000] {
        let inputs: Vec<DailySignals> = (0..count).map(|_| create_signals(7)).collect();
        let options = ReportOptions::default();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_reports_parallel", count),
            &inputs,
            |b, inputs| {
                b.iter(|| generate_reports_parallel(inputs, &DEFAULT_CONFIG, &options));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    inputs
                        .iter()
                        .map(|s| generate_report(s, &DEFAULT_CONFIG))
                        .collect::<Vec<_>>()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_primitives,
    bench_calculators,
    bench_report_generation,
    bench_batch
);
criterion_main!(benches);
