use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgbuf::Builder;

/// Build a query with `n` columns and `n` conditional filters, every other
/// filter absent:
/// SELECT col0, col1, ... FROM t WHERE 1=1 AND col0 = $1 AND col2 = $2 ...
fn build_filtered(n: usize) -> Builder {
    let mut b = Builder::new();
    b.add("SELECT ", ());
    for i in 0..n {
        if i > 0 {
            b.add(", ", ());
        }
        b.add(&format!("col{i}"), ());
    }
    b.add_from(" FROM t", ());
    b.add_where(" WHERE 1=1", ());
    for i in 0..n {
        let value = (i % 2 == 0).then_some(i as i64);
        b.where_if(&format!(" AND col{i} = ?"), value);
    }
    b.add_order(" ORDER BY col0", ());
    b
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let b = build_filtered(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &b, |bench, b| {
            bench.iter(|| black_box(b.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| {
                let b = build_filtered(n);
                black_box(b.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_many_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/many_markers");

    for n in [5, 20, 100, 500] {
        let fragment = vec!["?"; n].join(", ");
        let values: Vec<pgbuf::Param> = (0..n as i64).map(pgbuf::Param::new).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(fragment, values),
            |bench, (fragment, values)| {
                bench.iter(|| {
                    let mut b = Builder::new();
                    b.add_where(fragment, values.clone());
                    black_box(b.to_sql());
                });
            },
        );
    }

    group.finish();
}

fn bench_set_param_growth(c: &mut Criterion) {
    c.bench_function("builder/set_param_growth", |bench| {
        bench.iter(|| {
            let mut b = Builder::new();
            b.set_param(black_box(1000), 1_i64);
            black_box(b.param_count());
        });
    });
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_many_markers,
    bench_set_param_growth
);
criterion_main!(benches);
