//! Removal of the XML declaration heading an SVG file.

use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Leading BOM and XML whitespace (kept), then `<?xml ...?>` and the
/// whitespace after it (removed). Whitespace is the ASCII set
/// space, tab, CR, LF and form feed.
static XML_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\A((?-u:\xEF\xBB\xBF)?[\t\n\x0C\r ]*)",
        r"<\?xml(?:[\t\n\x0C\r ][^>]*)?\?>",
        r"[\t\n\x0C\r ]*",
    ))
    .expect("XML declaration pattern compiles")
});

/// Strips a leading XML declaration from `content`.
///
/// Only a declaration at the start of the file is removed, together with the
/// ASCII whitespace that follows it. A byte-order mark or whitespace before
/// the declaration is kept, as is everything after the match. Other
/// processing instructions such as `<?xml-stylesheet?>` are left alone.
pub fn strip_xml_declaration(content: &[u8]) -> Cow<'_, [u8]> {
    let Some(captures) = XML_DECLARATION.captures(content) else {
        return Cow::Borrowed(content);
    };
    let (Some(declaration), Some(leading)) = (captures.get(0), captures.get(1)) else {
        return Cow::Borrowed(content);
    };

    let body = &content[declaration.end()..];
    if leading.is_empty() {
        Cow::Borrowed(body)
    } else {
        let mut cleaned = Vec::with_capacity(leading.len() + body.len());
        cleaned.extend_from_slice(leading.as_bytes());
        cleaned.extend_from_slice(body);
        Cow::Owned(cleaned)
    }
}
