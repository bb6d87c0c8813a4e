use criterion::{criterion_group, criterion_main, Criterion, black_box};

use currency_fmt::{
    format::format_amount,
    runner::rewrite_html,
    config::options::AppOptions,
};

/// Synthetic invoice page: `rows` table rows, every other cell an amount.
fn sample_page(rows: usize) -> String {
    let mut html = String::from("<html><body><table>\n");
    for i in 0..rows {
        html.push_str(&format!(
            "<tr><td>Item {i}</td><td class=\"currency\">{}.{:02}</td><td class=\"qty\">{}</td></tr>\n",
            i * 37, i % 100, i % 9
        ));
    }
    html.push_str("</table></body></html>\n");
    html
}

fn bench_format(c: &mut Criterion) {
    let inputs = ["0", "5", "-1234.5", "1234567.891", "12.5abc", "n/a", "  1e6"];

    c.bench_function("format_amount_mixed", |b| {
        b.iter(|| {
            for s in inputs {
                black_box(format_amount(black_box(s)));
            }
        })
    });

    let page = sample_page(1_000);
    let options = AppOptions::default();
    c.bench_function("rewrite_html_1000_rows", |b| {
        b.iter(|| {
            let out = rewrite_html(black_box(&page), &options);
            black_box(out.rewrites.len())
        })
    });
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
