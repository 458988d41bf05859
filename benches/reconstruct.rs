use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use sensor_dump_viewer::image_pipeline::{
    deinterleave_and_merge, strip_packed_low_bits, to_raster, DEFAULT_WIDTH,
};

fn generate_mock_dump(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

fn benchmark_deinterleave_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("deinterleave_by_size");

    let sizes = vec![
        (DEFAULT_WIDTH, 100, "2080x100"),
        (DEFAULT_WIDTH, 780, "2080x780"),
        (DEFAULT_WIDTH, 1560, "2080x1560"),
    ];

    for (width, height, label) in sizes {
        let dump = generate_mock_dump(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &dump, |b, data| {
            b.iter(|| deinterleave_and_merge(black_box(data)));
        });
    }

    group.finish();
}

fn benchmark_reconstruct_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct_steps");
    let dump = generate_mock_dump(DEFAULT_WIDTH, 780);
    let merged = deinterleave_and_merge(&dump).data;

    group.bench_function("strip_packed_low_bits", |b| {
        b.iter(|| strip_packed_low_bits(black_box(&merged)));
    });

    for width in [1664, DEFAULT_WIDTH, 3328] {
        group.bench_with_input(BenchmarkId::new("to_raster", width), &width, |b, &width| {
            b.iter(|| to_raster(black_box(&merged), width));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_deinterleave_sizes, benchmark_reconstruct_steps);
criterion_main!(benches);
