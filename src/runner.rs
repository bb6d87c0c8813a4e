// src/runner.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{
    config::options::{AppOptions, FormatOptions, OutputTarget},
    csv::report_rows,
    dom::{format_all, Rewrite},
    file::{read_input, write_output, write_report},
    markup::HtmlDocument,
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::Stdin => None,
            Input::File(p) => Some(p.as_path()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Input::Stdin => s!("<stdin>"),
            Input::File(p) => p.display().to_string(),
        }
    }
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub elements: usize,
    /// Elements whose text had no number and were shown as zero.
    pub unparsed: usize,
    pub report: Option<PathBuf>,
}

/// One document after rewriting.
pub struct Rewritten {
    pub html: String,
    pub rewrites: Vec<Rewrite>,
}

/// Rewrite every matching element of one HTML document.
pub fn rewrite_html(source: &str, options: &AppOptions) -> Rewritten {
    let mut doc = HtmlDocument::parse(source, &options.rewrite.class_name);
    let rewrites = format_all(&mut doc, &options.format);
    Rewritten { html: doc.render(), rewrites }
}

/// Plain-text mode: each line is one amount.
pub fn format_lines(text: &str, opts: &FormatOptions) -> String {
    let mut values: Vec<String> = text.lines().map(str::to_string).collect();
    format_all(&mut values, opts);
    let mut out = values.join("\n");
    if !values.is_empty() {
        out.push('\n');
    }
    out
}

fn check_target(target: &OutputTarget, inputs: &[Input]) -> Result<(), Box<dyn Error>> {
    match target {
        OutputTarget::File(p) if inputs.len() > 1 => Err(format!(
            "{} inputs but output {} is a single file; use a directory (trailing '/')",
            inputs.len(),
            p.display()
        )
        .into()),
        OutputTarget::InPlace if inputs.iter().any(|i| *i == Input::Stdin) => {
            Err("Cannot rewrite stdin in place".into())
        }
        _ => Ok(()),
    }
}

/// Rewrite each input and write it according to `options.export`.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
/// `finish` is reported whether the run succeeds or not.
pub fn run(
    options: &AppOptions,
    inputs: &[Input],
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    check_target(&options.export.target, inputs)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(inputs.len());
    }
    logf!(
        "Run: inputs={}, class='{}', rounding={}, target={:?}",
        inputs.len(),
        options.rewrite.class_name,
        options.format.rounding.label(),
        options.export.target
    );

    let result = rewrite_inputs(options, inputs, progress.as_deref_mut());
    if let Err(e) = &result {
        loge!("Run: {}", e);
    }

    if let Some(p) = progress.as_deref_mut() {
        if let Ok(summary) = &result {
            p.log(&format!(
                "Rewrote {} element(s) in {} input(s); {} without a number",
                summary.elements,
                inputs.len(),
                summary.unparsed
            ));
        }
        p.finish();
    }
    result
}

fn rewrite_inputs(
    options: &AppOptions,
    inputs: &[Input],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let export = &options.export;
    let mut summary = RunSummary::default();
    let mut report = Vec::new();

    for input in inputs {
        let label = input.label();
        let source = read_input(input.path())?;

        let Rewritten { html, rewrites } = rewrite_html(&source, options);
        let unparsed = rewrites.iter().filter(|r| !r.parsed).count();
        summary.elements += rewrites.len();
        summary.unparsed += unparsed;

        let out_path = export.out_path_for(input.path());
        write_output(out_path.as_deref(), &html)?;
        logd!(
            "Run: {} → {} (elements={}, unparsed={})",
            label,
            out_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| s!("<stdout>")),
            rewrites.len(),
            unparsed
        );

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&label, out_path.as_deref());
        }
        if export.report.is_some() {
            report.extend(report_rows(&label, &rewrites));
        }
        if let Some(path) = out_path {
            summary.files_written.push(path);
        }
    }

    if let Some(path) = &export.report {
        summary.report = Some(write_report(path, &report)?);
        logf!("Run: report → {} ({} rows)", path.display(), report.len());
    }
    Ok(summary)
}
