use crate::content::raw_document::{base_name, extension};

/// Decides which source files are post candidates.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    extensions: Vec<String>,
    ignore_files: Vec<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        SourceFilter::new(&[".md", ".markdown"], &["README", "TEMPLATE"])
    }
}

impl SourceFilter {
    /// Extensions may be given with or without the leading dot. Ignored names
    /// are base names, without extension.
    pub fn new<S: AsRef<str>>(extensions: &[S], ignore_files: &[S]) -> SourceFilter {
        SourceFilter {
            extensions: extensions.iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_string())
                .collect(),
            ignore_files: ignore_files.iter()
                .map(|f| f.as_ref().to_string())
                .collect(),
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let has_extension = match extension(file_name) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        };

        has_extension && !self.ignore_files.iter().any(|f| f == base_name(file_name))
    }
}
