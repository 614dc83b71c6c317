//! Criterion benches for the preprocessing stages (group "pipeline").
//!
//! Grid sizes 4x4 to 32x32 with half the cells split by a diagonal. Results land
//! under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use planar_dual::prelude::*;

fn instance(side: usize) -> PlanarInstance {
    let cfg = GridCfg {
        width: side,
        height: side,
        diagonal_prob: 0.5,
        ..GridCfg::default()
    };
    draw_grid_instance(cfg, ReplayToken { seed: 17, index: 0 }).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &side in &[4usize, 8, 16, 32] {
        let inst = instance(side);
        group.throughput(Throughput::Elements(inst.graph.num_edges() as u64));
        group.bench_with_input(BenchmarkId::new("embed", side), &inst, |b, inst| {
            b.iter_batched(
                || inst.graph.clone(),
                |g| embed_with_positions(g, &inst.positions).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("triangulate", side), &inst, |b, inst| {
            let emb = embed_with_positions(inst.graph.clone(), &inst.positions).unwrap();
            b.iter_batched(
                || emb.clone(),
                |mut e| plane_triangulate(&mut e, TriangulateCfg::default()).unwrap(),
                BatchSize::SmallInput,
            )
        });
        let mut tri = embed_with_positions(inst.graph.clone(), &inst.positions).unwrap();
        plane_triangulate(&mut tri, TriangulateCfg::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("orient", side), &tri, |b, emb| {
            b.iter(|| odd_edge_orientation(emb).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("dual", side), &tri, |b, emb| {
            b.iter(|| expanded_dual(emb, DualCfg::default()).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("full", side), &inst, |b, inst| {
            b.iter_batched(
                || inst.graph.clone(),
                |g| run_pipeline_with_positions(g, &inst.positions, PipelineCfg::default()).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
