use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flexi_logger::Logger;
use rand::{Rng, SeedableRng};
use range_lca::{
    combiner::Min, tree::Tree, LowestCommonAncestor, RangeQuery, SparseTable,
    SparseTableIdempotent,
};
use std::sync::{LazyLock, Mutex};

fn random_values(rng: &mut impl Rng, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.gen()).collect()
}

fn random_ranges(rng: &mut impl Rng, n: usize, q: usize) -> Vec<(usize, usize)> {
    (0..q)
        .map(|_| {
            let l = rng.gen_range(0..n);
            (l, rng.gen_range(l..n))
        })
        .collect()
}

fn build(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("Build");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    for n in [1_000usize, 100_000] {
        let values = random_values(&mut rng, n);
        g.throughput(criterion::Throughput::Elements(n as u64));
        g.bench_with_input(BenchmarkId::new("log", n), &values, |b, values| {
            b.iter(|| SparseTable::<Min<u64>>::from_values(u64::MAX, values.iter().copied()))
        });
        g.bench_with_input(BenchmarkId::new("idempotent", n), &values, |b, values| {
            b.iter(|| SparseTableIdempotent::<Min<u64>>::from_values(values.iter().copied()))
        });
    }
    g.finish();
}

fn query(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("Query");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    const Q: usize = 1000;
    for n in [1_000usize, 100_000] {
        let values = random_values(&mut rng, n);
        let ranges = random_ranges(&mut rng, n, Q);
        log::debug!("Benchmarking {Q} queries over {n} values");
        let slow = SparseTable::<Min<u64>>::from_values(u64::MAX, values.iter().copied());
        let fast = SparseTableIdempotent::<Min<u64>>::from_values(values.iter().copied());
        g.throughput(criterion::Throughput::Elements(Q as u64));
        g.bench_with_input(BenchmarkId::new("log", n), &ranges, |b, ranges| {
            b.iter(|| {
                for &(l, r) in ranges {
                    black_box(slow.query(l, r).ok());
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("idempotent", n), &ranges, |b, ranges| {
            b.iter(|| {
                for &(l, r) in ranges {
                    black_box(fast.query(l, r).ok());
                }
            })
        });
    }
    g.finish();
}

fn lca(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("LCA");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    const N: usize = 100_000;
    let mut tree = Tree::<()>::new(N, 0);
    for u in 1..N {
        tree.add_undirected_edge(rng.gen_range(0..u), u);
    }
    g.bench_function("build", |b| {
        b.iter(|| LowestCommonAncestor::from_tree(black_box(&mut tree)))
    });
    let lca = LowestCommonAncestor::from_tree(&mut tree);
    let pairs: Vec<(usize, usize)> = (0..1000)
        .map(|_| (rng.gen_range(0..N), rng.gen_range(0..N)))
        .collect();
    g.throughput(criterion::Throughput::Elements(pairs.len() as u64));
    g.bench_function("query", |b| {
        b.iter(|| {
            for &(u, v) in &pairs {
                black_box(lca.lca(u, v).ok());
            }
        })
    });
    g.finish();
}

criterion_group!(benches, build, query, lca);
criterion_main!(benches);

pub static LOGGER: LazyLock<Mutex<flexi_logger::LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});
