use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use orasql::{Select, Value};

/// Build a SELECT with `n` projected columns and `n` WHERE predicates.
fn build_select(n: usize) -> Select {
    let mut query = Select::with_alias("hr", "employees", "e").unwrap();
    for i in 0..n {
        query = query.select(&format!("col{i}")).unwrap();
    }
    for i in 0..n {
        query = query
            .where_clause(&format!("AND col{i} = {{}}"), &[Value::from(i as i64)])
            .unwrap();
    }
    query
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let query = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| black_box(query.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let query = build_select(n);
                black_box(query.to_sql());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_sql, bench_build_and_render);
criterion_main!(benches);
