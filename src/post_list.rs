use std::{fs, io};
use std::path::PathBuf;

use spdlog::{debug, warn};

use crate::content::raw_document::RawDocument;
use crate::source_filter::SourceFilter;

/// A file that matched the filter but could not be read.
#[derive(Debug)]
pub struct UnreadableFile {
    pub file_name: String,
    pub error: io::Error,
}

/// Outcome of scanning the posts directory.
#[derive(Debug, Default)]
pub struct ScannedPosts {
    pub documents: Vec<RawDocument>,
    pub unreadable: Vec<UnreadableFile>,
    /// Files rejected by the source filter.
    pub ignored: Vec<String>,
}

pub struct PostList {
    pub root_dir: PathBuf,
    pub filter: SourceFilter,
}

impl PostList {
    /// Names of the post candidates directly inside `root_dir` and of the
    /// files the filter rejected, both sorted. Subdirectories are not visited.
    pub fn retrieve_files(&self) -> io::Result<(Vec<String>, Vec<String>)> {
        let mut posts = vec![];
        let mut ignored = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                warn!("Skipping file with a non UTF-8 name: {:?}", entry.path());
                continue;
            };
            if self.filter.accepts(file_name) {
                posts.push(file_name.to_string());
            } else {
                debug!("Not a post candidate: {}", file_name);
                ignored.push(file_name.to_string());
            }
        }
        posts.sort();
        ignored.sort();
        Ok((posts, ignored))
    }

    /// Reads every candidate. Files that fail to read are returned apart so a
    /// single bad file does not stop the others.
    pub fn retrieve_documents(&self) -> io::Result<ScannedPosts> {
        let (files, ignored) = self.retrieve_files()?;
        let mut scanned = ScannedPosts { ignored, ..Default::default() };
        for file_name in files {
            match RawDocument::from_file(&self.root_dir.join(&file_name)) {
                Ok(doc) => scanned.documents.push(doc),
                Err(error) => {
                    warn!("Unable to read {}: {}", file_name, error);
                    scanned.unreadable.push(UnreadableFile { file_name, error });
                }
            }
        }
        Ok(scanned)
    }
}
