//! The MSVG v1.0 container format.
//!
//! An MSVG file is a fixed header, one block per page, and a fixed footer.
//! All line breaks are CRLF and are written as literal bytes:
//!
//! ```text
//! <MSVG version="1.0">\r\n\r\n<pageSet>\r\n
//! \r\n<Page>\r\n\r\n <page body> \r\n\r\n</Page>\r\n   (once per page)
//! \r\n</pageSet>\r\n\r\n</MSVG>\r\n
//! ```

use crate::error::ConvertError;
use std::io::{self, Write};

pub const HEADER: &[u8] = b"<MSVG version=\"1.0\">\r\n\r\n<pageSet>\r\n";
pub const PAGE_OPEN: &[u8] = b"\r\n<Page>\r\n\r\n";
pub const PAGE_CLOSE: &[u8] = b"\r\n\r\n</Page>\r\n";
pub const FOOTER: &[u8] = b"\r\n</pageSet>\r\n\r\n</MSVG>\r\n";

/// One page of the container: the cleaned body of a single SVG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

/// An ordered set of pages wrapped in the MSVG header and footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsvgDocument {
    pages: Vec<Page>,
}

impl MsvgDocument {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Writes the whole container to `writer`. Every write is checked.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(HEADER)?;
        for page in &self.pages {
            writer.write_all(PAGE_OPEN)?;
            writer.write_all(&page.body)?;
            writer.write_all(PAGE_CLOSE)?;
        }
        writer.write_all(FOOTER)?;
        writer.flush()
    }

    pub fn render(&self) -> Vec<u8> {
        let body_len: usize = self
            .pages
            .iter()
            .map(|page| PAGE_OPEN.len() + page.body.len() + PAGE_CLOSE.len())
            .sum();
        let mut out = Vec::with_capacity(HEADER.len() + body_len + FOOTER.len());
        out.extend_from_slice(HEADER);
        for page in &self.pages {
            out.extend_from_slice(PAGE_OPEN);
            out.extend_from_slice(&page.body);
            out.extend_from_slice(PAGE_CLOSE);
        }
        out.extend_from_slice(FOOTER);
        out
    }

    /// Splits a rendered container back into its pages.
    ///
    /// Page bodies are returned exactly as stored. A body ends at the first
    /// page-close marker that is followed by another page-open marker or by
    /// the footer, so bodies may themselves contain the close marker. A body
    /// containing the close marker immediately followed by a page-open marker
    /// cannot be told apart from a page boundary and is split there.
    pub fn parse(content: &[u8]) -> Result<Self, ConvertError> {
        let rest = content
            .strip_prefix(HEADER)
            .ok_or_else(|| malformed("missing MSVG header"))?;
        let mut rest = rest
            .strip_suffix(FOOTER)
            .ok_or_else(|| malformed("missing MSVG footer"))?;

        let mut pages = Vec::new();
        while !rest.is_empty() {
            let after_open = rest.strip_prefix(PAGE_OPEN).ok_or_else(|| {
                malformed(&format!("expected <Page> at page {}", pages.len() + 1))
            })?;
            let end = find_page_end(after_open).ok_or_else(|| {
                malformed(&format!("unterminated <Page> at page {}", pages.len() + 1))
            })?;
            pages.push(Page::new(&after_open[..end]));
            rest = &after_open[end + PAGE_CLOSE.len()..];
        }

        Ok(Self { pages })
    }
}

fn malformed(reason: &str) -> ConvertError {
    ConvertError::MalformedContainer(reason.to_string())
}

fn find_page_end(after_open: &[u8]) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = find(&after_open[from..], PAGE_CLOSE) {
        let end = from + offset;
        let next = &after_open[end + PAGE_CLOSE.len()..];
        if next.is_empty() || next.starts_with(PAGE_OPEN) {
            return Some(end);
        }
        from = end + 1;
    }
    None
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
