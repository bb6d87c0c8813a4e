// tests/html_rewrite.rs
//
// File-level rewrites through runner::run without UI.
//
use std::fs;
use std::path::{Path, PathBuf};

use currency_fmt::config::options::{AppOptions, OutputTarget};
use currency_fmt::progress::{NullProgress, Progress};
use currency_fmt::runner::{self, Input};
use currency_fmt::{format_all, HtmlDocument, TextNodes};

const PAGE: &str = r#"<!doctype html>
<html><head><title>Invoice</title>
<style>.currency { font-family: monospace; }</style>
</head><body>
<table>
  <tr><td>Subtotal</td><td class="currency">1234.5</td></tr>
  <tr><td>Discount</td><td class="currency">-5</td></tr>
  <tr><td>Note</td><td class="currency">pending</td></tr>
  <tr><td>Qty</td><td class="qty">3</td></tr>
</table>
<!-- <td class="currency">99</td> -->
</body></html>
"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(name);
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, source: &str, _written: Option<&Path>) { self.done.push(source.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn document_rewrite_preserves_everything_else() {
    let mut doc = HtmlDocument::parse(PAGE, "currency");
    assert_eq!(doc.len(), 3);
    let report = format_all(&mut doc, &Default::default());
    assert_eq!(report.iter().filter(|r| !r.parsed).count(), 1);

    let out = doc.render();
    assert!(out.contains(r#"<td class="currency">$      1,234.5000</td>"#));
    assert!(out.contains(r#"<td class="currency">$         -5.0000</td>"#));
    assert!(out.contains(r#"<td class="currency">$          0.0000</td>"#));
    assert!(out.contains(r#"<td class="qty">3</td>"#));
    assert!(out.contains(r#"<!-- <td class="currency">99</td> -->"#));
    assert!(out.contains(".currency { font-family: monospace; }"));

    // Only the three bodies changed.
    let strip = |s: &str| -> String {
        s.replace("$      1,234.5000", "1234.5")
            .replace("$         -5.0000", "-5")
            .replace("$          0.0000", "pending")
    };
    assert_eq!(strip(&out), PAGE);
}

#[test]
fn run_writes_one_file_per_input_into_dir() {
    let src = tmp_dir("currency_fmt_run_src");
    let out = tmp_dir("currency_fmt_run_out");
    let a = src.join("a.html");
    let b = src.join("b.html");
    fs::write(&a, PAGE).unwrap();
    fs::write(&b, "<p class=currency>7</p>").unwrap();

    let mut options = AppOptions::default();
    options.export.target = OutputTarget::Dir(out.clone());
    options.export.report = Some(out.join("report.tsv"));

    let mut rec = Recorder::default();
    let summary = runner::run(
        &options,
        &[Input::File(a.clone()), Input::File(b.clone())],
        Some(&mut rec),
    )
    .unwrap();

    assert_eq!(summary.files_written, vec![out.join("a.html"), out.join("b.html")]);
    assert_eq!(summary.elements, 4);
    assert_eq!(summary.unparsed, 1);
    assert_eq!(rec.total, 2);
    assert_eq!(rec.done.len(), 2);
    assert!(rec.finished);

    let b_out = fs::read_to_string(out.join("b.html")).unwrap();
    assert_eq!(b_out, "<p class=currency>$          7.0000</p>");
    // Inputs untouched
    assert_eq!(fs::read_to_string(&b).unwrap(), "<p class=currency>7</p>");

    let report = fs::read_to_string(out.join("report.tsv")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Source\tIndex\tBefore\tAfter\tParsed");
    assert!(lines[3].ends_with("\tpending\t$          0.0000\tno"));
}

#[test]
fn run_in_place_rewrites_inputs() {
    let dir = tmp_dir("currency_fmt_in_place");
    let f = dir.join("page.html");
    fs::write(&f, "<span class='x currency'>&#49;000</span>").unwrap();

    let mut options = AppOptions::default();
    options.export.target = OutputTarget::InPlace;
    let summary = runner::run(&options, &[Input::File(f.clone())], None).unwrap();

    assert_eq!(summary.files_written, vec![f.clone()]);
    assert_eq!(
        fs::read_to_string(&f).unwrap(),
        "<span class='x currency'>$      1,000.0000</span>"
    );
}

#[test]
fn missing_input_is_an_error() {
    let options = AppOptions::default();
    let res = runner::run(&options, &[Input::File("no/such/file.html".into())], Some(&mut NullProgress));
    assert!(res.is_err());
}

#[test]
fn failed_writes_still_finish_progress() {
    let dir = tmp_dir("currency_fmt_blocked");
    let src = dir.join("page.html");
    let blocker = dir.join("blocker");
    fs::write(&src, "<p class=currency>7</p>").unwrap();
    fs::write(&blocker, "not a directory").unwrap();

    // Output directory sits under a regular file.
    let mut options = AppOptions::default();
    options.export.target = OutputTarget::Dir(blocker.join("out"));
    let mut rec = Recorder::default();
    let res = runner::run(&options, &[Input::File(src.clone())], Some(&mut rec));
    assert!(res.is_err());
    assert!(rec.finished);
    assert!(rec.done.is_empty());

    // Output succeeds, report cannot be written.
    let mut options = AppOptions::default();
    options.export.target = OutputTarget::Dir(dir.join("out"));
    options.export.report = Some(blocker.join("report.csv"));
    let mut rec = Recorder::default();
    let res = runner::run(&options, &[Input::File(src)], Some(&mut rec));
    assert!(res.is_err());
    assert_eq!(rec.done.len(), 1);
    assert!(rec.finished);
}
