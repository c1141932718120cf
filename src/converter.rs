//! The conversion pipeline: scan, order, read and clean pages, write the container.

use crate::container::{MsvgDocument, Page};
use crate::error::ConvertError;
use crate::order::order_input_files;
use crate::prolog::strip_xml_declaration;
use crate::scanner::scan_svg_files;
use crate::{INPUT_DIR, OUTPUT_FILE};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder as TempFileBuilder;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    /// Names of the files written as pages, in page order.
    pub pages: Vec<String>,
    /// Files that could not be read and were left out.
    pub skipped: Vec<ConvertError>,
}

/// Converts a directory of SVG files into a single MSVG container.
#[derive(Debug, Clone)]
pub struct Converter {
    input_dir: PathBuf,
    output_path: PathBuf,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(INPUT_DIR, OUTPUT_FILE)
    }
}

impl Converter {
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
        }
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Runs the whole conversion.
    ///
    /// A missing or unreadable input directory aborts before anything is
    /// written. Unreadable pages are reported in [`ConversionReport::skipped`]
    /// and left out of the container. The output is replaced atomically, so a
    /// failed write leaves any previous output untouched. The replacement is a
    /// rename: if the output path is a symlink, the link itself is replaced
    /// rather than its target, and an existing file's owner and permissions
    /// are not carried over to the new file.
    pub fn run(&self) -> Result<ConversionReport, ConvertError> {
        let names = scan_svg_files(&self.input_dir)?;
        let files = order_input_files(names);

        let mut pages = Vec::with_capacity(files.len());
        let mut written = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();

        for file in files {
            match fs::read(self.input_dir.join(&file.name)) {
                Ok(content) => {
                    log::debug!("Adding page {} (key {})", file.name, file.sort_key);
                    pages.push(Page::new(strip_xml_declaration(&content)));
                    written.push(file.name);
                }
                Err(source) => {
                    log::warn!("Skipping {}: {}", file.name, source);
                    skipped.push(ConvertError::ReadPage {
                        name: file.name,
                        source,
                    });
                }
            }
        }

        self.write_document(&MsvgDocument::new(pages))?;

        Ok(ConversionReport {
            output_path: self.output_path.clone(),
            pages: written,
            skipped,
        })
    }

    fn write_document(&self, document: &MsvgDocument) -> Result<(), ConvertError> {
        let create_error = |source| ConvertError::CreateOutput {
            path: self.output_path.clone(),
            source,
        };

        let parent_dir = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = TempFileBuilder::new();
        builder.prefix(".svg2msvg-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut temp_file = builder.tempfile_in(parent_dir).map_err(create_error)?;

        self.write_into(document, &mut temp_file)?;

        temp_file
            .persist(&self.output_path)
            .map_err(|err| create_error(err.error))?;

        log::debug!(
            "Wrote {} page(s) to {}",
            document.len(),
            self.output_path.display()
        );
        Ok(())
    }

    fn write_into<W: Write>(&self, document: &MsvgDocument, writer: W) -> Result<(), ConvertError> {
        document
            .write_to(&mut BufWriter::new(writer))
            .map_err(|source| ConvertError::WriteOutput {
                path: self.output_path.clone(),
                source,
            })
    }
}
