use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use netcent_core::config::{CentralityConfig, LayoutConfig};
use netcent_core::graph::EdgeGraph;
use netcent_core::layout::{LayoutKind, compute_layout};
use netcent_core::load::EdgeRecord;
use netcent_core::metrics::compute_centrality;

/// (name, nodes, edges)
const TIERS: &[(&str, usize, usize)] = &[("small", 50, 150), ("medium", 200, 800), ("large", 800, 4000)];

fn random_graph(nodes: usize, edges: usize, seed: u64) -> EdgeGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let records: Vec<EdgeRecord> = (0..edges)
        .map(|_| {
            let s = rng.gen_range(0..nodes);
            let t = rng.gen_range(0..nodes);
            let w = rng.gen_range(0.5..10.0);
            EdgeRecord::new(&format!("n{s}"), "rel", &format!("n{t}"), w)
        })
        .collect();
    EdgeGraph::from_records(&records)
}

fn bench_centrality(c: &mut Criterion) {
    let mut group = c.benchmark_group("centrality.compute");
    let config = CentralityConfig {
        max_iter: 1000,
        ..CentralityConfig::default()
    };

    for &(name, nodes, edges) in TIERS {
        let g = random_graph(nodes, edges, 0x5EED_u64);
        group.throughput(Throughput::Elements(g.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &g, |b, g| {
            b.iter(|| black_box(compute_centrality(g, &config).map(|rows| rows.len())));
        });
    }

    group.finish();
}

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.compute");
    let g = random_graph(200, 800, 0x5EED_u64);
    let config = LayoutConfig::default();

    for kind in LayoutKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| black_box(compute_layout(&g, kind, &config).len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_centrality, bench_layouts);
criterion_main!(benches);
