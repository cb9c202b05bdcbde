use lazy_static::lazy_static;
use regex::Regex;

use crate::content::MetadataHeader;
use crate::post_error::PostError;

/// Splits a raw document into its metadata header and body.
///
/// The text is cut at every line made of `---` (trailing whitespace allowed);
/// empty segments are dropped. The second-to-last segment is the header and
/// the last one is the body, so both of these are accepted:
///
/// ```text
/// ---                  title: Hello
/// title: Hello         date: 01.02.23
/// date: 01.02.23       ---
/// ---                  Body
/// Body
/// ```
pub fn segment(raw_text: &str) -> Result<(MetadataHeader, String), PostError> {
    let segments = split_segments(raw_text);
    if segments.len() < 2 {
        return Err(PostError::MalformedDocument);
    }

    let body = segments[segments.len() - 1].clone();
    let header = parse_header(&segments[segments.len() - 2])?;
    Ok((header, body))
}

fn is_delimiter(line: &str) -> bool {
    lazy_static! {
        static ref DELIMITER_REGEX: Regex = Regex::new(r"^---\s*$").unwrap();
    }
    DELIMITER_REGEX.is_match(line)
}

fn split_segments(raw_text: &str) -> Vec<String> {
    let mut segments = vec![];
    let mut current = String::new();

    for line in raw_text.lines() {
        if is_delimiter(line) {
            push_segment(&mut segments, &current);
            current.clear();
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    push_segment(&mut segments, &current);

    segments
}

fn push_segment(segments: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() {
        segments.push(segment.to_string());
    }
}

/// Parses `key: value` lines. Blank lines are skipped, anything else without
/// a `:` (or with nothing before it) fails the whole header.
pub fn parse_header(block: &str) -> Result<MetadataHeader, PostError> {
    let mut header = MetadataHeader::new();

    for (i, line) in block.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = match extract_header_key_val(line) {
            Some(kv) => kv,
            None => {
                return Err(PostError::InvalidHeaderLine {
                    line_number: i + 1,
                    line: line.to_string(),
                });
            }
        };
        header.insert(key, value);
    }

    Ok(header)
}

fn extract_header_key_val(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    if key.trim().is_empty() {
        return None;
    }
    Some((key, value))
}
