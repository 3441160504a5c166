use criterion::{Criterion, black_box, criterion_group, criterion_main};
use faer::Mat;
use nullspan::reduce::rref;

fn bench_rref_vs_faer(c: &mut Criterion) {
    let n = 200;
    let data: Vec<f64> = (0..n * n).map(|i| (i as f64).sin()).collect();
    let a = Mat::from_fn(n, n, |i, j| data[j * n + i]);

    c.bench_function("nullspan rref", |ben| {
        ben.iter(|| {
            let out = rref(black_box(&a), 1e-9);
            black_box(out.rank());
        })
    });

    c.bench_function("faer full-piv LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(black_box(&a).as_ref());
            black_box(&factor);
        })
    });
}

criterion_group!(benches, bench_rref_vs_faer);
criterion_main!(benches);
