use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qbuild::{Conditional, Render, Select, query};
use serde_json::{Map, Value};

/// Build a SELECT with `n` chained predicates, each using one `:p{i}` token.
fn build_select(n: usize) -> Select {
    let mut select = query::select("* FROM t").where_clause("col0 > :p0");
    for i in 1..n {
        select = select.and(format!("col{i} > :p{i}"), true);
    }
    select
}

fn placeholders(n: usize) -> Value {
    let mut map = Map::new();
    for i in 0..n {
        map.insert(format!("p{i}"), Value::from(i as i64));
    }
    Value::Object(map)
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/to_sql");

    for n in [1, 5, 10, 50] {
        let select = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &select, |b, select| {
            b.iter(|| black_box(select.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 5, 10, 50] {
        let params = placeholders(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| {
                let select = build_select(n);
                black_box(select.render(params).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_substitute(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/substitute");

    for n in [1, 5, 10, 50] {
        let sql = build_select(n).to_sql();
        let params = placeholders(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sql, |b, sql| {
            b.iter(|| black_box(qbuild::substitute(sql, &params).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_sql, bench_build_and_render, bench_substitute);
criterion_main!(benches);
