// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, OutputTarget, Rounding};
use crate::file::resolve_out_target;
use crate::format::format_amount_with;
use crate::progress::Progress;
use crate::runner::{self, Input};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub options: AppOptions,
    pub inputs: Vec<Input>,
    pub amounts: Vec<String>,
    pub lines: bool,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    execute(params)
}

pub fn execute(params: Params) -> Result<(), Box<dyn Error>> {
    if params.help {
        print!("{}", HELP);
        return Ok(());
    }

    if !params.amounts.is_empty() {
        for a in &params.amounts {
            println!("{}", format_amount_with(a, &params.options.format));
        }
        return Ok(());
    }

    if params.lines {
        let text = crate::file::read_input(None)?;
        let out = runner::format_lines(&text, &params.options.format);
        return crate::file::write_output(None, &out);
    }

    let inputs = if params.inputs.is_empty() { vec![Input::Stdin] } else { params.inputs.clone() };
    let mut progress = CliProgress;
    let summary = runner::run(&params.options, &inputs, Some(&mut progress))?;
    if let Some(path) = &summary.report {
        eprintln!("Report: {}", path.display());
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut out: Option<String> = None;
    let mut in_place = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-a" | "--amount" => params.amounts.push(args.next().ok_or("Missing value for --amount")?),
            "--lines" => params.lines = true,
            "-c" | "--class" => {
                let v = args.next().ok_or("Missing value for --class")?;
                if v.trim().is_empty() || v.contains(char::is_whitespace) {
                    return Err(format!("Invalid class name: '{}'", v).into());
                }
                params.options.rewrite.class_name = v;}
            "-o" | "--out" => out = Some(args.next().ok_or("Missing output path")?),
            "-i" | "--in-place" => in_place = true,
            "--rounding" => {
                let v = args.next().ok_or("Missing value for --rounding")?;
                params.options.format.rounding = Rounding::parse(&v)
                    .ok_or_else(|| format!("Unknown rounding: {} (expected even|away)", v))?;}
            "--report" => params.options.export.report = Some(PathBuf::from(args.next().ok_or("Missing report path")?)),
            "-h" | "--help" => params.help = true,
            "-" => params.inputs.push(Input::Stdin),
            s if s.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => params.inputs.push(Input::File(PathBuf::from(&a))),
        }
    }

    if params.help {
        return Ok(params);
    }

    let html_mode = params.amounts.is_empty() && !params.lines;
    if !html_mode && (!params.inputs.is_empty() || out.is_some() || in_place) {
        return Err("--amount/--lines print to stdout and take no FILE, --out or --in-place".into());
    }
    if params.lines && !params.amounts.is_empty() {
        return Err("Use either --amount or --lines, not both".into());
    }

    params.options.export.target = match (out, in_place) {
        (Some(_), true) => return Err("--out and --in-place are mutually exclusive".into()),
        (Some(o), false) => resolve_out_target(&o),
        (None, true) => OutputTarget::InPlace,
        (None, false) => OutputTarget::Stdout,
    };

    Ok(params)
}

/* ---------- Progress adapter ---------- */
struct CliProgress;
impl Progress for CliProgress {
    fn item_done(&mut self, source: &str, written: Option<&std::path::Path>) {
        if let Some(p) = written {
            eprintln!("{} → {}", source, p.display());
        }
    }
    fn log(&mut self, msg: &str) { eprintln!("{}", msg); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Params, Box<dyn Error>> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_read_stdin_write_stdout() {
        let p = parse(&[]).unwrap();
        assert!(p.inputs.is_empty());
        assert_eq!(p.options.export.target, OutputTarget::Stdout);
        assert_eq!(p.options.rewrite.class_name, "currency");
        assert_eq!(p.options.format.rounding, Rounding::HalfEven);
    }

    #[test]
    fn files_and_flags() {
        let p = parse(&["-c", "money", "--rounding", "away", "-i", "a.html", "b.html"]).unwrap();
        assert_eq!(p.options.rewrite.class_name, "money");
        assert_eq!(p.options.format.rounding, Rounding::HalfAwayFromZero);
        assert_eq!(p.options.export.target, OutputTarget::InPlace);
        assert_eq!(p.inputs, vec![Input::File("a.html".into()), Input::File("b.html".into())]);
    }

    #[test]
    fn amounts_collect() {
        let p = parse(&["-a", "5", "--amount", "-5"]).unwrap();
        assert_eq!(p.amounts, vec!["5", "-5"]);
    }

    #[test]
    fn report_and_dir_output() {
        let p = parse(&["--report", "r.tsv", "-o", "out/", "x.html"]).unwrap();
        assert_eq!(p.options.export.report, Some(PathBuf::from("r.tsv")));
        assert!(matches!(p.options.export.target, OutputTarget::Dir(_)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--class"]).is_err());
        assert!(parse(&["--class", "a b"]).is_err());
        assert!(parse(&["--rounding", "up"]).is_err());
        assert!(parse(&["-o", "x.html", "-i", "a.html"]).is_err());
        assert!(parse(&["-a", "5", "page.html"]).is_err());
        assert!(parse(&["--lines", "-a", "5"]).is_err());
    }

    #[test]
    fn help_short_circuits_validation() {
        let p = parse(&["-a", "5", "x.html", "-h"]).unwrap();
        assert!(p.help);
    }

    #[test]
    fn dash_is_stdin() {
        let p = parse(&["-"]).unwrap();
        assert_eq!(p.inputs, vec![Input::Stdin]);
    }
}
