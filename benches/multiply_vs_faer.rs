use criterion::{black_box, Criterion, criterion_group, criterion_main};
use faer::Mat;
use matlite::{EliminationOptions, Matrix, Vector};

fn bench_multiply_vs_faer(c: &mut Criterion) {
    let n = 200;
    let data: Vec<f64> = (0..n * n).map(|i| (i as f64).sin()).collect();
    let a = Matrix::from_row_major(n, n, data).unwrap();
    let fa: Mat<f64> = a.to_faer();

    c.bench_function("matlite naive multiply", |ben| {
        ben.iter(|| black_box(&a).naive_multiply(black_box(&a)).unwrap())
    });

    c.bench_function("matlite strassen multiply", |ben| {
        ben.iter(|| black_box(&a).strassen_multiply(black_box(&a)).unwrap())
    });

    c.bench_function("faer raw multiply", |ben| {
        ben.iter(|| black_box(&fa) * black_box(&fa))
    });
}

fn bench_solve(c: &mut Criterion) {
    let n = 100;
    let data: Vec<f64> = (0..n * n)
        .map(|i| if i % (n + 1) == 0 { n as f64 } else { (i as f64).cos() })
        .collect();
    let a = Matrix::from_row_major(n, n, data).unwrap();
    let b = Vector::column((0..n).map(|i| (i as f64).sin()).collect()).unwrap();
    let opts = EliminationOptions::default();

    c.bench_function("matlite gauss-jordan solve", |ben| {
        ben.iter(|| black_box(&a).gauss_jordan_solve(black_box(&b), &opts).unwrap())
    });

    c.bench_function("matlite qr decomposition", |ben| {
        ben.iter(|| black_box(&a).qr_decomposition().unwrap())
    });
}

criterion_group!(benches, bench_multiply_vs_faer, bench_solve);
criterion_main!(benches);
