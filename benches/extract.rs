// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use court_scrape::specs::search::parse_results;

fn synthetic_page(items: usize) -> String {
    let mut doc = String::from(r#"<div class="list">"#);
    for i in 0..items {
        doc.push_str(&format!(
            r#"<div class="item">
                 <strong>시립테니스장(구로구) {}번코트 주간</strong>
                 <p>이용대상: 제한없음 접수기간: 02.01~02.15</p>
                 <p>이용기간: 03월 상세보기</p>
               </div>"#,
            i % 12 + 1
        ));
    }
    doc.push_str("</div>");
    doc
}

fn bench_parse_results(c: &mut Criterion) {
    let doc = synthetic_page(500);

    c.bench_function("parse_results_500_items", |b| {
        b.iter(|| {
            let mut acc = Vec::new();
            parse_results(black_box(&doc), &mut acc);
            black_box(acc.len())
        })
    });
}

criterion_group!(benches, bench_parse_results);
criterion_main!(benches);
