use axon_parser::tokenizer::split_row;
use axon_parser::{parse, parse_with_callback, ParseOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;

#[derive(Deserialize)]
#[allow(dead_code)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: i64,
    listed: String,
    active: bool,
}

fn product_document(rows: usize) -> String {
    let mut doc = String::from(
        "@schema Product\nsku:S\nname:S\nprice:F\nquantity:I\nlisted:T\nactive:B\n@end\n",
    );
    doc.push_str(&format!("@data Product[{}]\n", rows));
    for i in 0..rows {
        doc.push_str(&format!(
            "SKU{}|\"Product {}\"|{}|{}|2024-01-{:02}T12:00:00|{}\n",
            i,
            i,
            9.99 + i as f64,
            i,
            i % 28 + 1,
            i % 2
        ));
    }
    doc.push_str("@end\n");
    doc
}

fn benchmark_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000].iter() {
        let doc = product_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| parse(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_callback_vs_collect(c: &mut Criterion) {
    let doc = product_document(1000);
    let mut group = c.benchmark_group("callback_vs_collect");

    group.bench_function("collect", |b| b.iter(|| parse(black_box(&doc))));

    group.bench_function("callback", |b| {
        b.iter(|| {
            let mut count = 0usize;
            parse_with_callback(black_box(&doc), ParseOptions::default(), |_, _, _| {
                count += 1;
                Ok(())
            })
            .map(|_| count)
        })
    });

    group.finish();
}

fn benchmark_split_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_row");

    let plain = "1|Alice|alice@example.com|1|28";
    let quoted = "1|\"Alice|Smith\"|\"a|b|c\"|1|28";
    let escaped = r"1|Line\nbreak|Tab\there|\\back|28";

    group.bench_function("plain", |b| b.iter(|| split_row(black_box(plain))));
    group.bench_function("quoted", |b| b.iter(|| split_row(black_box(quoted))));
    group.bench_function("escaped", |b| b.iter(|| split_row(black_box(escaped))));

    group.finish();
}

fn benchmark_typed_rows(c: &mut Criterion) {
    let result = parse(&product_document(500)).unwrap();
    let block = &result.data_blocks[0];

    c.bench_function("deserialize_rows_500", |b| {
        b.iter(|| black_box(block).deserialize_rows::<Product>())
    });
}

criterion_group!(
    benches,
    benchmark_parse_document,
    benchmark_callback_vs_collect,
    benchmark_split_row,
    benchmark_typed_rows
);
criterion_main!(benches);
