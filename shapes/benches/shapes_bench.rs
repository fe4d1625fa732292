use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kata_shapes::{Circle, Rectangle, Shape, Triangle};

fn bench_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("area");

    let rectangle = Rectangle::new(12.0, 6.0);
    group.bench_function("rectangle", |b| b.iter(|| black_box(&rectangle).area()));

    let circle = Circle::new(10.0);
    group.bench_function("circle", |b| b.iter(|| black_box(&circle).area()));

    let triangle = Triangle::new(3.0, 4.0, 5.0);
    group.bench_function("triangle", |b| b.iter(|| black_box(&triangle).area()));

    group.finish();
}

fn bench_dyn_dispatch(c: &mut Criterion) {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(12.0, 6.0)),
        Box::new(Circle::new(10.0)),
        Box::new(Triangle::new(3.0, 4.0, 5.0)),
    ];

    c.bench_function("total_area_dyn", |b| {
        b.iter(|| black_box(&shapes).iter().map(|s| s.area()).sum::<f64>())
    });
}

criterion_group!(benches, bench_area, bench_dyn_dispatch);
criterion_main!(benches);
