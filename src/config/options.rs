// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub format: FormatOptions,
    pub rewrite: RewriteOptions,
    pub export: ExportOptions,
}

/// How a tie on the last kept fraction digit is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ties go to the even digit. Same as Rust's `{:.4}`.
    #[default]
    HalfEven,
    /// Ties go away from zero, like a browser's `Number.prototype.toFixed`.
    HalfAwayFromZero,
}

impl Rounding {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" | "half-even" | "bankers" => Some(Rounding::HalfEven),
            "away" | "half-away" | "half-up" => Some(Rounding::HalfAwayFromZero),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rounding::HalfEven => "even",
            Rounding::HalfAwayFromZero => "away",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub rounding: Rounding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Class token an element must carry to be rewritten.
    pub class_name: String,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self { class_name: s!(CURRENCY_CLASS) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    /// One output per input, same file name, inside this directory.
    Dir(PathBuf),
    InPlace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Tsv,
}

impl ReportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ReportFormat::Csv => "csv", ReportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ReportFormat::Csv => ',', ReportFormat::Tsv => '\t' }
    }

    /// `.tsv` selects TSV; anything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => ReportFormat::Tsv,
            _ => ReportFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub target: OutputTarget,
    pub report: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { target: OutputTarget::Stdout, report: None }
    }
}

impl ExportOptions {
    /// Where the GUI exports to when the user hasn't typed a path.
    pub fn default_gui_path() -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE)
    }

    /// Final path for one input under the current target. `None` means stdout.
    pub fn out_path_for(&self, input: Option<&Path>) -> Option<PathBuf> {
        match &self.target {
            OutputTarget::Stdout => None,
            OutputTarget::File(p) => Some(p.clone()),
            OutputTarget::Dir(dir) => {
                let name = input
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_os_string())
                    .unwrap_or_else(|| DEFAULT_FILE.into());
                Some(dir.join(name))
            }
            OutputTarget::InPlace => input.map(Path::to_path_buf),
        }
    }
}
