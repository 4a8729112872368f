//! Minimal start-tag scanner for HTML pages.
//!
//! Only start tags and their attributes are extracted; text, closing tags,
//! `<!...>` declarations and comment bodies are skipped. The content of
//! `script` and `style` is raw text up to the matching closing tag, so markup
//! quoted inside it is never reported. This is enough to pull frame links and
//! input fields out of a puzzle page without a full HTML parser.

use crate::util::decode_entities;

/// A start tag and its attributes. Names are lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, Option<String>)>,
}

impl Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute. Boolean attributes yield `Some("")`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// All start tags in document order.
pub fn elements(html: &str) -> Vec<Element> {
    // same byte offsets as `html`, for case-insensitive closing tag lookup
    let lower = html.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset + 1;

        if html[start..].starts_with("!--") {
            pos = html[start + 3..]
                .find("-->")
                .map_or(html.len(), |i| start + 3 + i + 3);
            continue;
        }

        let name_len = html[start..]
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(html.len() - start);

        // closing tags, comments and doctypes
        if name_len == 0 {
            pos = start;
            continue;
        }

        let name = html[start..start + name_len].to_ascii_lowercase();
        let (attributes, end) = attributes(html, start + name_len);
        pos = end;

        if matches!(name.as_str(), "script" | "style") {
            let close = format!("</{}", name);
            pos = lower[pos..].find(&close).map_or(html.len(), |i| pos + i);
        }

        out.push(Element { name, attributes });
    }

    out
}

/// Start tags with the given name, in document order.
pub fn find<'a>(html: &'a str, name: &'a str) -> impl Iterator<Item = Element> + 'a {
    elements(html)
        .into_iter()
        .filter(move |e| e.name.eq_ignore_ascii_case(name))
}

/// Parse attributes from `pos` up to the closing `>`.
///
/// Returns the attributes and the position right after the tag. Every stop
/// position is an ASCII byte or the end of input, so slicing stays on char
/// boundaries.
fn attributes(html: &str, mut pos: usize) -> (Vec<(String, Option<String>)>, usize) {
    let bytes = html.as_bytes();
    let len = bytes.len();
    let mut attrs = Vec::new();

    loop {
        while pos < len && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
            pos += 1;
        }
        if pos >= len {
            return (attrs, len);
        }
        if bytes[pos] == b'>' {
            return (attrs, pos + 1);
        }

        let name_start = pos;
        while pos < len
            && !bytes[pos].is_ascii_whitespace()
            && !matches!(bytes[pos], b'=' | b'>' | b'/')
        {
            pos += 1;
        }
        let name = html[name_start..pos].to_ascii_lowercase();

        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= len || bytes[pos] != b'=' {
            attrs.push((name, None));
            continue;
        }

        pos += 1;
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        let value = match bytes.get(pos) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let value_start = pos + 1;
                let value_end = html[value_start..]
                    .find(quote as char)
                    .map_or(len, |i| value_start + i);
                pos = (value_end + 1).min(len);
                &html[value_start..value_end]
            }
            _ => {
                let value_start = pos;
                while pos < len && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'>' {
                    pos += 1;
                }
                &html[value_start..pos]
            }
        };
        attrs.push((name, Some(decode_entities(value))));
    }
}
