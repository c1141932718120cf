//! `svg2msvg` packs a directory of numbered SVG files into a single MSVG
//! container.
//!
//! Pages are ordered by the first number found in each file name, any XML
//! declaration heading a file is dropped, and every body is wrapped in
//! `<Page>` markers inside a versioned `<MSVG>` root.
//!
//! # Example
//!
//! ```rust,no_run
//! use svg2msvg::Converter;
//!
//! # fn demo() -> Result<(), svg2msvg::error::ConvertError> {
//! let report = Converter::new("input_svgs", "output.msvg").run()?;
//! for skipped in &report.skipped {
//!     eprintln!("{skipped}");
//! }
//! println!("{} page(s) written", report.pages.len());
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod converter;
pub mod error;
pub mod order;
pub mod prolog;
pub mod scanner;
pub mod sort_key;

pub use crate::container::{MsvgDocument, Page};
pub use crate::converter::{ConversionReport, Converter};

/// Directory the binary reads pages from, relative to the working directory.
pub const INPUT_DIR: &str = "input_svgs";

/// File the binary writes, relative to the working directory.
pub const OUTPUT_FILE: &str = "output.msvg";
