// src/dom.rs
//
// The seam between the formatter and whatever holds the elements.
// Frontends hand in a `TextNodes` implementation; `format_all` reads each
// element's text, formats it and writes it back.

use crate::config::options::FormatOptions;
use crate::format::{format_value, parse_leading};

/// A collection of matched elements addressed by index (document order).
pub trait TextNodes {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current text content of element `index`.
    fn get_text(&self, index: usize) -> String;

    /// Replace the text content of element `index`.
    fn set_text(&mut self, index: usize, text: String);
}

/// One element's before/after.
#[derive(Clone, Debug, PartialEq)]
pub struct Rewrite {
    pub index: usize,
    pub before: String,
    pub after: String,
    /// False when the text had no number and was shown as zero.
    pub parsed: bool,
}

impl Rewrite {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.before.clone(),
            self.after.clone(),
            s!(if self.parsed { "yes" } else { "no" }),
        ]
    }
}

/// Format every element independently and write the result back.
pub fn format_all<N: TextNodes + ?Sized>(nodes: &mut N, opts: &FormatOptions) -> Vec<Rewrite> {
    let mut out = Vec::with_capacity(nodes.len());
    for index in 0..nodes.len() {
        let before = nodes.get_text(index);
        let value = parse_leading(&before);
        let after = format_value(value.unwrap_or(0.0), opts);
        nodes.set_text(index, after.clone());
        out.push(Rewrite { index, before, after, parsed: value.is_some() });
    }
    out
}

/// Plain strings as elements: line mode and tests.
impl TextNodes for Vec<String> {
    fn len(&self) -> usize {
        <[String]>::len(self)
    }

    fn get_text(&self, index: usize) -> String {
        self.get(index).cloned().unwrap_or_default()
    }

    fn set_text(&mut self, index: usize, text: String) {
        if let Some(slot) = self.get_mut(index) {
            *slot = text;
        }
    }
}
