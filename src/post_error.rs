use std::fmt;
use std::fmt::{Display, Formatter};

/// Why a source document could not become a post.
#[derive(Debug, Clone, PartialEq)]
pub enum PostError {
    /// The `---` delimiter structure was not found, so there is no header/body split.
    MalformedDocument,

    /// A header line without the `key: value` separator. `line_number` is 1-based
    /// inside the header block.
    InvalidHeaderLine { line_number: usize, line: String },

    /// The header parsed but its content is not a valid post.
    InvalidPost(InvalidPost),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvalidPost {
    MissingKeys(Vec<String>),
    BadDate(String),
}

impl Display for PostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PostError::MalformedDocument => {
                write!(f, "Malformed document: header and body must be separated by a `---` line")
            }
            PostError::InvalidHeaderLine { line_number, line } => {
                write!(f, "Invalid header line {}: `{}` is not a `key: value` pair", line_number, line)
            }
            PostError::InvalidPost(invalid) => write!(f, "Invalid post: {}", invalid),
        }
    }
}

impl Display for InvalidPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPost::MissingKeys(keys) => write!(f, "missing required keys: {}", keys.join(", ")),
            InvalidPost::BadDate(date) => {
                write!(f, "unable to parse date `{}` (expected DD.MM.YY or DD.MM.YYYY)", date)
            }
        }
    }
}

impl std::error::Error for PostError {}

impl From<InvalidPost> for PostError {
    fn from(value: InvalidPost) -> Self {
        PostError::InvalidPost(value)
    }
}
