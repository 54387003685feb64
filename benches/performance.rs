use countries::fixtures::create_mock_countries;
use countries::formatting::{BoxChars, TextTableBody};
use countries::query::{FilterField, FilterInputs, ListQuery};
use countries::render::{render, HtmlTableBody};
use countries::types::Country;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Create a large record set by repeating the fixtures (about the size of a full search)
fn create_sample_countries() -> Vec<Country> {
    let base = create_mock_countries();
    (0..18)
        .flat_map(|round| {
            base.iter().map(move |country| Country {
                name: format!("{} {}", country.name, round),
                ..country.clone()
            })
        })
        .collect()
}

fn bench_query_building(c: &mut Criterion) {
    let mut inputs = FilterInputs::new();
    inputs.set(FilterField::Name, "  Fra ");
    inputs.set(FilterField::Currency, "EURO");
    inputs.set(FilterField::Language, "french");

    c.bench_function("search_query_string", |b| {
        b.iter(|| {
            let query = ListQuery::new(black_box(&inputs).to_filters(), 0, 1080);
            black_box(query.to_query_string())
        })
    });
}

fn bench_html_render(c: &mut Criterion) {
    let countries = create_sample_countries();
    let mut body = HtmlTableBody::default();

    c.bench_function("render_html_1080_rows", |b| {
        b.iter(|| render(Some(&mut body), black_box(&countries), countries.len()))
    });

    c.bench_function("render_html_first_page", |b| {
        b.iter(|| render(Some(&mut body), black_box(&countries), 20))
    });
}

fn bench_text_render(c: &mut Criterion) {
    let countries = create_sample_countries();
    let mut body = TextTableBody::new(BoxChars::unicode());

    c.bench_function("render_text_1080_rows", |b| {
        b.iter(|| {
            let _ = render(Some(&mut body), black_box(&countries), countries.len());
            black_box(body.to_text())
        })
    });
}

criterion_group!(benches, bench_query_building, bench_html_render, bench_text_render);
criterion_main!(benches);
