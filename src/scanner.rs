//! Lists the SVG pages available in an input directory.

use crate::error::ConvertError;
use std::fs;
use std::path::Path;

const SVG_EXTENSION: &str = ".svg";

/// Returns `true` when the name's extension (from the last `.`) is exactly `.svg`.
pub fn has_svg_extension(name: &str) -> bool {
    name.rfind('.').is_some_and(|dot| &name[dot..] == SVG_EXTENSION)
}

/// Lists the names of non-directory entries in `dir` with an `.svg` extension.
///
/// Names are returned in byte order so that pages sharing a sort key keep a
/// stable, platform-independent relative order.
pub fn scan_svg_files(dir: &Path) -> Result<Vec<String>, ConvertError> {
    let read_dir_error = |source| ConvertError::ReadInputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let file_type = entry.file_type().map_err(read_dir_error)?;
        if file_type.is_dir() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            log::warn!(
                "Skipping entry with non UTF-8 name: {}",
                entry.path().display()
            );
            continue;
        };

        if has_svg_extension(&name) {
            names.push(name);
        }
    }

    names.sort_unstable();
    log::debug!("Found {} SVG file(s) in {}", names.len(), dir.display());
    Ok(names)
}
