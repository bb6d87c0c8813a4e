// src/core/html.rs
// Tag-level scanning helpers. Tolerant, not validating: enough structure to
// find elements by class and pair them with their closing tag.
// Tag and attribute names are matched ASCII case-insensitively.

/// Elements that never have content (no closing tag, no text).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose body is raw text; `<` inside them is not markup.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// ASCII-only lowercasing. Byte offsets stay valid between input and output.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

pub fn is_raw_text(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `<name ...>`; `src` is the whole tag including `<` and `>`.
    Open { name: String, src: &'a str, self_closing: bool },
    Close { name: String },
    Comment,
    /// Doctype, processing instruction, `</>`.
    Other,
    /// A `<` that does not start markup; it is plain text.
    Text,
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_'
}

/// Byte index just past the `>` closing a tag that starts at `from`,
/// ignoring `>` inside quoted attribute values. Unterminated → end of input.
fn tag_end(b: &[u8], from: usize) -> usize {
    let mut i = from;
    let mut quote: Option<u8> = None;
    while i < b.len() {
        match (quote, b[i]) {
            (None, b'"' | b'\'') => quote = Some(b[i]),
            (Some(q), c) if c == q => quote = None,
            (None, b'>') => return i + 1,
            _ => {}
        }
        i += 1;
    }
    b.len()
}

/// Read the markup construct at byte `at` (which holds `<`).
/// Returns it with the byte index just past it.
pub fn read_tag(s: &str, at: usize) -> (Tag<'_>, usize) {
    let b = s.as_bytes();
    let rest = &s[at..];

    if rest.starts_with("<!--") {
        let end = rest[4..].find("-->").map(|p| at + 4 + p + 3).unwrap_or(s.len());
        return (Tag::Comment, end);
    }

    match b.get(at + 1) {
        Some(b'/') => {
            let start = at + 2;
            let mut i = start;
            while i < b.len() && is_name_byte(b[i]) { i += 1; }
            let end = tag_end(b, i);
            if i == start {
                return (Tag::Other, end);
            }
            (Tag::Close { name: to_lower(&s[start..i]) }, end)
        }
        Some(c) if c.is_ascii_alphabetic() => {
            let start = at + 1;
            let mut i = start;
            while i < b.len() && is_name_byte(b[i]) { i += 1; }
            let name = to_lower(&s[start..i]);
            let end = tag_end(b, i);
            let src = &s[at..end];
            let self_closing = src
                .strip_suffix('>')
                .map(|t| t.trim_end().ends_with('/'))
                .unwrap_or(false);
            (Tag::Open { name, src, self_closing }, end)
        }
        Some(b'!' | b'?') => (Tag::Other, tag_end(b, at + 1)),
        _ => (Tag::Text, at + 1),
    }
}

/// Value of attribute `name` in an opening tag's source, quotes removed.
/// A bare attribute (`<td nowrap>`) yields `Some("")`.
pub fn attr_value<'a>(tag_src: &'a str, name: &str) -> Option<&'a str> {
    let b = tag_src.as_bytes();
    let mut i = 1; // past '<'
    while i < b.len() && is_name_byte(b[i]) { i += 1; }

    loop {
        while i < b.len() && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= b.len() || b[i] == b'>' {
            return None;
        }

        let key_start = i;
        while i < b.len() && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let key = &tag_src[key_start..i];

        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        let mut value = "";
        if i < b.len() && b[i] == b'=' {
            i += 1;
            while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
            match b.get(i) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let v_start = i + 1;
                    let v_end = tag_src[v_start..].find(q as char).map(|p| v_start + p).unwrap_or(b.len());
                    value = &tag_src[v_start..v_end];
                    i = (v_end + 1).min(b.len());
                }
                _ => {
                    let v_start = i;
                    while i < b.len() && !b[i].is_ascii_whitespace() && b[i] != b'>' { i += 1; }
                    value = &tag_src[v_start..i];
                }
            }
        }

        if key.eq_ignore_ascii_case(name) {
            return Some(value);
        }
    }
}

/// Whether the opening tag carries `class` as one of its class tokens.
/// Token comparison is case-sensitive, like a `.class` selector.
pub fn has_class(tag_src: &str, class: &str) -> bool {
    attr_value(tag_src, "class")
        .map(|v| v.split_ascii_whitespace().any(|t| t == class))
        .unwrap_or(false)
}

/// Start of the `</name` that ends a raw-text body beginning at `from`.
/// `lc` is the lowercased document.
pub fn raw_text_end(lc: &str, name: &str, from: usize) -> usize {
    let pat = join!("</", name);
    lc.get(from..)
        .and_then(|rest| rest.find(&pat))
        .map(|p| from + p)
        .unwrap_or(lc.len())
}

/// Elements whose end tag may be left out.
pub const OPTIONAL_END_ELEMENTS: &[&str] = &[
    "li", "dt", "dd", "p", "tr", "td", "th", "option",
];

/// Openers that end an open `<p>`.
const P_CLOSERS: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "div", "dl", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hgroup", "hr", "main", "menu", "nav", "ol", "p", "pre", "section",
    "table", "ul",
];

pub fn has_optional_end(name: &str) -> bool {
    OPTIONAL_END_ELEMENTS.contains(&name)
}

/// Whether opening `opener` as a sibling ends an open `name` element.
pub fn implied_end_by(name: &str, opener: &str) -> bool {
    match name {
        "li" => opener == "li",
        "dt" | "dd" => matches!(opener, "dt" | "dd"),
        "td" | "th" => matches!(opener, "td" | "th" | "tr" | "tbody" | "thead" | "tfoot"),
        "tr" => matches!(opener, "tr" | "tbody" | "thead" | "tfoot"),
        "option" => matches!(opener, "option" | "optgroup"),
        "p" => P_CLOSERS.contains(&opener),
        _ => false,
    }
}

/// Find where an element `name` whose content starts at `from` ends.
/// Returns `(content_end, after_close)`.
///
/// Elements opened inside the content are tracked, so same-name nesting pairs up.
/// For elements with an optional end tag (`li`, `td`, `p`, ...) the content also
/// ends at a sibling opener, at an unmatched close of an enclosing element, or at
/// end of input; `after_close` is then `content_end` since nothing was consumed.
pub fn find_close(s: &str, lc: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    if is_raw_text(name) {
        let close = raw_text_end(lc, name, from);
        if close >= s.len() {
            return None;
        }
        let (_, after) = read_tag(s, close);
        return Some((close, after));
    }

    let optional_end = has_optional_end(name);
    let mut open: Vec<String> = Vec::new();
    let mut pos = from;
    while let Some(rel) = s.get(pos..).and_then(|r| r.find('<')) {
        let at = pos + rel;
        let (tag, end) = read_tag(s, at);
        pos = end;
        match tag {
            Tag::Open { name: n, self_closing, .. } => {
                if optional_end && open.is_empty() && implied_end_by(name, &n) {
                    return Some((at, at));
                }
                if is_raw_text(&n) {
                    let close = raw_text_end(lc, &n, end);
                    pos = if close < s.len() { read_tag(s, close).1 } else { close };
                } else if !self_closing && !is_void(&n) {
                    open.push(n);
                }
            }
            Tag::Close { name: n } => {
                if let Some(i) = open.iter().rposition(|o| *o == n) {
                    open.truncate(i);
                } else if n == name {
                    return Some((at, end));
                } else if optional_end {
                    return Some((at, at));
                }
            }
            _ => {}
        }
    }
    optional_end.then_some((s.len(), s.len()))
}
