// src/markup.rs
//
// HTML document adapter: finds the elements carrying a class token and lets
// the formatter read and replace their text. Everything outside the replaced
// element bodies is written back byte for byte.

use std::ops::Range;

use crate::core::html::{find_close, has_class, is_raw_text, is_void, raw_text_end, read_tag, to_lower, Tag};
use crate::core::sanitize::escape_text;
use crate::core::text_content;
use crate::dom::TextNodes;

/// A matched element: its tag name, opening tag span and content span (byte offsets).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub open: Range<usize>,
    pub inner: Range<usize>,
}

pub struct HtmlDocument {
    source: String,
    elements: Vec<Element>,
    replaced: Vec<Option<String>>,
}

impl HtmlDocument {
    /// Scan `source` once for elements whose `class` contains `class_name`.
    ///
    /// Void and self-closing elements are never matched, nor are elements with no
    /// closing tag, unless HTML lets that tag be left out (`li`, `td`, `p`, ...).
    /// A match inside an earlier match is part of that match's content.
    pub fn parse(source: impl Into<String>, class_name: &str) -> Self {
        let source = source.into();
        let lc = to_lower(&source);
        let mut elements = Vec::new();

        let mut pos = 0usize;
        while let Some(rel) = source.get(pos..).and_then(|r| r.find('<')) {
            let at = pos + rel;
            let (tag, end) = read_tag(&source, at);
            pos = end;

            let Tag::Open { name, src, self_closing } = tag else { continue };

            if self_closing || is_void(&name) || !has_class(src, class_name) {
                if is_raw_text(&name) && !self_closing {
                    pos = raw_text_end(&lc, &name, end);
                }
                continue;
            }

            match find_close(&source, &lc, &name, end) {
                Some((inner_end, after)) => {
                    elements.push(Element { tag: name, open: at..end, inner: end..inner_end });
                    pos = after;
                }
                None => {
                    logd!("Markup: <{}> at byte {} has no closing tag; skipped", name, at);
                }
            }
        }

        logd!("Markup: {} element(s) with class '{}'", elements.len(), class_name);
        let replaced = vec![None; elements.len()];
        Self { source, elements, replaced }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Original content of element `index`, markup included.
    pub fn inner_html(&self, index: usize) -> &str {
        self.elements
            .get(index)
            .map(|e| &self.source[e.inner.clone()])
            .unwrap_or("")
    }

    pub fn is_modified(&self) -> bool {
        self.replaced.iter().any(Option::is_some)
    }

    /// The document with every replaced element body swapped for its escaped text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0usize;
        for (el, rep) in self.elements.iter().zip(&self.replaced) {
            if let Some(text) = rep {
                out.push_str(&self.source[last..el.inner.start]);
                out.push_str(&escape_text(text));
                last = el.inner.end;
            }
        }
        out.push_str(&self.source[last..]);
        out
    }
}

impl TextNodes for HtmlDocument {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get_text(&self, index: usize) -> String {
        match self.replaced.get(index) {
            Some(Some(text)) => text.clone(),
            _ => text_content(self.inner_html(index)),
        }
    }

    fn set_text(&mut self, index: usize, text: String) {
        if let Some(slot) = self.replaced.get_mut(index) {
            *slot = Some(text);
        }
    }
}
