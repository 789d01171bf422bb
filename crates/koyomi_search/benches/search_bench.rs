use criterion::{Criterion, black_box, criterion_group, criterion_main};
use koyomi_search::{chuki_before, kyureki_at, saku_near};
use koyomi_time::{JST_UTC_OFFSET, gregorian_to_jdn};

fn solver_bench(c: &mut Criterion) {
    let query = gregorian_to_jdn(2017, 10, 15) as f64;

    let mut group = c.benchmark_group("search_solvers");
    group.bench_function("chuki_before", |b| {
        b.iter(|| chuki_before(black_box(query), black_box(JST_UTC_OFFSET)))
    });
    group.bench_function("saku_near", |b| {
        b.iter(|| {
            saku_near(black_box(query), black_box(JST_UTC_OFFSET)).expect("search should succeed")
        })
    });
    group.finish();
}

fn resolution_bench(c: &mut Criterion) {
    let jdn = gregorian_to_jdn(2017, 10, 15);

    let mut group = c.benchmark_group("search_kyureki");
    group.bench_function("kyureki_at", |b| {
        b.iter(|| {
            kyureki_at(black_box(jdn), black_box(JST_UTC_OFFSET)).expect("should resolve")
        })
    });
    group.finish();
}

criterion_group!(benches, solver_bench, resolution_bench);
criterion_main!(benches);
