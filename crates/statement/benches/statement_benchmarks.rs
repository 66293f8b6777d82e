use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use playbill_statement::{
    Invoice, Performance, Play, PlayCatalog, build_statement, render_html, render_plain_text,
};

fn catalog() -> PlayCatalog {
    PlayCatalog::new()
        .with_play("hamlet", Play::new("Hamlet", "tragedy"))
        .with_play("as-like", Play::new("As You Like It", "comedy"))
        .with_play("othello", Play::new("Othello", "tragedy"))
}

fn invoice_with(performances: usize) -> Invoice {
    let plays = ["hamlet", "as-like", "othello"];
    let performances = (0..performances)
        .map(|i| Performance::new(plays[i % plays.len()], (i % 80) as u32))
        .collect();
    Invoice::new("BigCo", performances)
}

fn bench_build_statement(c: &mut Criterion) {
    let catalog = catalog();
    let mut group = c.benchmark_group("build_statement");

    for size in [1usize, 10, 100, 1_000] {
        let invoice = invoice_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &invoice, |b, invoice| {
            b.iter(|| build_statement(black_box(invoice), &catalog))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let catalog = catalog();
    let invoice = invoice_with(100);
    let data = match build_statement(&invoice, &catalog) {
        Ok(data) => data,
        Err(e) => panic!("benchmark fixture must price: {e}"),
    };

    let mut group = c.benchmark_group("render");
    group.bench_function("plain_text", |b| b.iter(|| render_plain_text(black_box(&data))));
    group.bench_function("html", |b| b.iter(|| render_html(black_box(&data))));
    group.finish();
}

criterion_group!(benches, bench_build_statement, bench_render);
criterion_main!(benches);
