use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::content::content_renderer::ContentRenderer;
use crate::content::metadata::segment;
use crate::content::raw_document::base_name;
use crate::content::MetadataHeader;
use crate::post_error::{InvalidPost, PostError};
use crate::slug::SlugGenerator;
use crate::text_utils::{format_long_date, parse_date};

pub const DEFAULT_TITLE: &str = "Untitled";

const TITLE_KEY: &str = "title";
const DATE_KEY: &str = "date";
const LANG_KEYS: [&str; 2] = ["lang", "language"];
const DRAFT_KEY: &str = "draft";
const HIDDEN_KEY: &str = "hidden";

const REQUIRED_KEYS: [&str; 2] = [TITLE_KEY, DATE_KEY];
const RESERVED_KEYS: [&str; 6] = [TITLE_KEY, DATE_KEY, "lang", "language", DRAFT_KEY, HIDDEN_KEY];

/// One compiled blog post.
///
/// Everything but `prev`/`next` is fixed at construction. The two links are
/// positions in the owning [`crate::blogchain::Blogchain`] and are only
/// assigned by the chain builder.
///
/// Posts compare by publication date only: two posts on the same day are
/// equal for ordering purposes whatever else differs.
#[derive(Debug, Clone)]
pub struct Post {
    pub file_name: String,
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub lang: String,
    pub long_date: String,
    pub draft: bool,
    pub hidden: bool,
    pub body: String,
    pub rendered: String,
    pub meta: BTreeMap<String, String>,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// Example of post
/// ---
/// title: What I learned
/// date: 24.12.23
/// lang: de_DE
/// author: jane
/// ---
///
/// # Body in markdown
impl Post {
    pub fn from_string<R: ContentRenderer + ?Sized>(file_name: &str, content: &str, default_lang: &str,
                                                   slugs: &mut SlugGenerator, renderer: &R) -> Result<Post, PostError> {
        let (header, body) = segment(content)?;

        let missing = Self::missing_keys(&header);
        if !missing.is_empty() {
            return Err(InvalidPost::MissingKeys(missing).into());
        }

        let raw_date = header.get(DATE_KEY).unwrap_or_default();
        let date = parse_date(raw_date).map_err(|_| InvalidPost::BadDate(raw_date.to_string()))?;

        let title = match header.get(TITLE_KEY) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };

        let lang = match header.get_first(&LANG_KEYS) {
            Some(lang) if !lang.is_empty() => lang.to_string(),
            _ => default_lang.to_string(),
        };
        let long_date = format_long_date(&date, &lang);

        let draft = header.contains_key(DRAFT_KEY);
        let hidden = header.contains_key(HIDDEN_KEY);

        let slug = slugs.slug_for(base_name(file_name));
        let rendered = renderer.render(&body);

        Ok(Post {
            file_name: file_name.to_string(),
            slug,
            title,
            date,
            lang,
            long_date,
            draft,
            hidden,
            body,
            rendered,
            meta: Self::extract_meta(&header),
            prev: None,
            next: None,
        })
    }

    fn missing_keys(header: &MetadataHeader) -> Vec<String> {
        REQUIRED_KEYS.iter()
            .filter(|key| !header.contains_key(key))
            .map(|key| key.to_string())
            .collect()
    }

    fn extract_meta(header: &MetadataHeader) -> BTreeMap<String, String> {
        header.iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(key))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    /// Pass-through metadata value, or `default` when the key is absent.
    pub fn meta_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.meta.get(&key.to_lowercase()).map(|v| v.as_str()).unwrap_or(default)
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Position of the next visible (older) post in the chain.
    pub fn next_index(&self) -> Option<usize> {
        self.next
    }

    /// Position of the previous visible (newer) post in the chain.
    pub fn prev_index(&self) -> Option<usize> {
        self.prev
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for Post {}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Post {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, lang={}, draft={}, hidden={}\ntitle={}",
               self.slug,
               self.date,
               self.lang,
               self.draft,
               self.hidden,
               self.title,
        )
    }
}
