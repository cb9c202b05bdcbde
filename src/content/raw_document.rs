use std::{fs, io};
use std::io::ErrorKind;
use std::path::Path;

/// Unparsed contents of one source file and its base file name.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub file_name: String,
    pub raw_content: String,
}

impl RawDocument {
    pub fn new(file_name: &str, raw_content: &str) -> RawDocument {
        RawDocument {
            file_name: file_name.to_string(),
            raw_content: raw_content.to_string(),
        }
    }

    pub fn from_file(file_path: &Path) -> io::Result<RawDocument> {
        let file_name = match file_path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                return Err(io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Invalid post file name: {}", file_path.display()),
                ));
            }
        };

        let raw_content = fs::read_to_string(file_path)?;

        Ok(RawDocument {
            file_name,
            raw_content,
        })
    }

    /// File name without its extension, e.g. `hello-world` for `hello-world.md`.
    pub fn base_name(&self) -> &str {
        base_name(&self.file_name)
    }
}

pub fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

pub fn extension(file_name: &str) -> Option<&str> {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
}
