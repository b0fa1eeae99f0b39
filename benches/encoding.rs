use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use toml_literal::wrap::wrap;
use toml_literal::{encode_multiline_chunked, encode_primitive, encode_str, Value};

const PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                         eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim \
                         ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut \
                         aliquip ex ea commodo consequat.\n";

fn benchmark_primitives(c: &mut Criterion) {
    let values = [
        Value::from(true),
        Value::from(1_234_567),
        Value::from(3.141_592_653_589_793),
    ];

    c.bench_function("encode_primitives", |b| {
        b.iter(|| {
            for value in &values {
                let _ = encode_primitive(black_box(value));
            }
        })
    });
}

fn benchmark_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_str");

    group.bench_function("bare", |b| {
        b.iter(|| encode_str(black_box("server-name_01"), true))
    });
    group.bench_function("quoted_unicode", |b| {
        b.iter(|| encode_str(black_box("naïve \"café\" ☕"), false))
    });

    for paragraphs in [1, 10, 50].iter() {
        let text = PARAGRAPH.repeat(*paragraphs);
        group.bench_with_input(
            BenchmarkId::new("multiline", paragraphs),
            &text,
            |b, text| b.iter(|| encode_str(black_box(text), false)),
        );
    }

    group.finish();
}

fn benchmark_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapping");
    let text = PARAGRAPH.repeat(20);

    for width in [40, 75, 120].iter() {
        group.bench_with_input(BenchmarkId::new("wrap", width), width, |b, &width| {
            b.iter(|| wrap(black_box(&text), width))
        });
        group.bench_with_input(BenchmarkId::new("chunked", width), width, |b, &width| {
            b.iter(|| encode_multiline_chunked(black_box(&text), width))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_strings,
    benchmark_wrapping
);
criterion_main!(benches);
