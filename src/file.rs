// src/file.rs

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{OutputTarget, ReportFormat};
use crate::csv::{report_headers, rows_to_string};

/// Read a whole input as UTF-8. `None` reads stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| format!("Cannot read {}: {}", p.display(), e).into()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write `contents` to `path` (parent dirs created), or to stdout for `None`.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(p, contents)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(contents.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Write a rewrite report; delimiter follows the file extension.
pub fn write_report(path: &Path, rows: &[Vec<String>]) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let sep = ReportFormat::from_path(path).delim();
    let contents = rows_to_string(rows, &report_headers(), sep);
    write_output(Some(path), &contents)?;
    Ok(path.to_path_buf())
}

/// Interpret a user-supplied `-o` value: a trailing separator or an existing
/// directory means "one file per input in this directory".
pub fn resolve_out_target(user_o: &str) -> OutputTarget {
    if user_o.is_empty() || user_o == "-" {
        return OutputTarget::Stdout;
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        OutputTarget::Dir(p)
    } else {
        OutputTarget::File(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
