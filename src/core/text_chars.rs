// src/core/text_chars.rs
// Text-content character iterator over an HTML fragment.
// Skips tags and comments, decodes character references, keeps whitespace as is.

use super::html::{read_tag, Tag};
use super::sanitize::decode_entity;

/// Longest reference name we try to decode (`&#x10FFFF;` fits).
const MAX_ENTITY_LEN: usize = 12;

pub struct TextChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> TextChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    /// Called on '&'. Decodes `&name;` or yields the '&' itself.
    #[inline]
    fn entity(&mut self) -> char {
        let window_end = (self.i + 1 + MAX_ENTITY_LEN).min(self.n);
        let semi = self.b[self.i + 1..window_end].iter().position(|&c| c == b';');
        if let Some(rel) = semi {
            let name_end = self.i + 1 + rel;
            if let Some(ch) = self.s.get(self.i + 1..name_end).and_then(decode_entity) {
                self.i = name_end + 1;
                return ch;
            }
        }
        self.i += 1;
        '&'
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s.get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for TextChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => {
                    let (tag, end) = read_tag(self.s, self.i);
                    if tag == Tag::Text {
                        self.i += 1;
                        return Some('<');
                    }
                    self.i = end;
                }
                b'&' => return Some(self.entity()),
                _ => return self.next_char(),
            }
        }
        None
    }
}

/// Text content of an HTML fragment.
pub fn text_content(html: &str) -> String {
    TextChars::new(html).collect()
}
