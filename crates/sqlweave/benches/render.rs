use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlweave::prelude::*;
use sqlweave::Select;

/// SELECT col0, col1, ... FROM t WHERE ((col0 = ?) AND (col1 = ?) ...)
fn build_select(n: usize) -> Select {
    let cols: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let predicates: Vec<_> = cols
        .iter()
        .enumerate()
        .map(|(i, c)| col(c).eq(i as i64))
        .collect();
    select(cols.iter().map(String::as_str))
        .from("t")
        .where_clause(and(predicates))
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = build_select(n);
                black_box(stmt.to_sql())
            });
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let stmt = select_from("t").where_clause(col("id").in_list(values.iter().copied()));
                black_box(stmt.to_sql())
            });
        });
    }

    group.finish();
}

fn bench_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/nested_lists");

    for depth in [1, 4, 16] {
        let mut expr = and([col("a").eq(0)]);
        for i in 1..=depth {
            expr = or([expr.into_expression(), col("a").eq(i).into_expression()]);
        }
        group.bench_with_input(BenchmarkId::from_parameter(depth), &expr, |b, expr| {
            b.iter(|| black_box(expr.to_sql()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_in_list,
    bench_nested_lists
);
criterion_main!(benches);
