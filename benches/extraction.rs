//! Benchmarks for the extraction pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use tailprint::{ExtractOptions, PageMeta, Session, StaticDefaults, StaticDom};

/// Build a synthetic product-listing page: a header, a long repeated card
/// list (the deduplicator's main workload), and a footer.
fn sample_page(cards: usize) -> String {
    let mut html = String::from(
        "<html><head><title>Bench</title></head><body>\
         <header><h1 style=\"font-size: 30px; font-weight: 700\">Shop</h1></header>\
         <main><ul style=\"padding-left: 0px\">",
    );
    for i in 0..cards {
        html.push_str(&format!(
            "<li style=\"padding-top: 16px; padding-right: 16px; \
             padding-bottom: 16px; padding-left: 16px; \
             background-color: rgb(255, 255, 255)\">\
             <img src=\"/item{i}.png\" alt=\"item\" width=\"64\" height=\"64\">\
             <p style=\"font-weight: 600\">Item {i}</p>\
             <a href=\"/item/{i}\" style=\"color: rgb(37, 99, 235)\">details</a>\
             </li>"
        ));
    }
    html.push_str("</ul></main><footer><p>fin</p></footer></body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let html = sample_page(100);
    c.bench_function("parse_100_cards", |b| {
        b.iter(|| StaticDom::parse(&html));
    });
}

fn bench_extract_page(c: &mut Criterion) {
    let html = sample_page(100);
    let dom = StaticDom::parse(&html);
    let provider = StaticDefaults;

    c.bench_function("extract_page_100_cards", |b| {
        b.iter(|| {
            let mut session = Session::new(&provider, ExtractOptions::default());
            let body = dom.body().unwrap();
            session.extract_page(&body, PageMeta::default()).unwrap()
        });
    });
}

fn bench_extract_no_css(c: &mut Criterion) {
    let html = sample_page(100);
    let dom = StaticDom::parse(&html);
    let provider = StaticDefaults;
    let options = ExtractOptions {
        extract_css: false,
        ..Default::default()
    };

    c.bench_function("extract_page_100_cards_no_css", |b| {
        b.iter(|| {
            let mut session = Session::new(&provider, options.clone());
            let body = dom.body().unwrap();
            session.extract_page(&body, PageMeta::default()).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_extract_page,
    bench_extract_no_css
);
criterion_main!(benches);
