//! Page ordering by filename sort key.

use crate::sort_key::extract_sort_key;

/// A qualifying input file together with its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub sort_key: u64,
}

impl InputFile {
    pub fn new(name: String) -> Self {
        let sort_key = extract_sort_key(&name);
        Self { name, sort_key }
    }
}

/// Orders files by ascending sort key. Files sharing a key keep their input order.
pub fn order_input_files<I>(names: I) -> Vec<InputFile>
where
    I: IntoIterator<Item = String>,
{
    let mut files: Vec<InputFile> = names.into_iter().map(InputFile::new).collect();
    // `sort_by_key` is stable.
    files.sort_by_key(|file| file.sort_key);
    files
}
