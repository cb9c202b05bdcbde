use std::collections::{HashMap, HashSet};

const FALLBACK_SLUG: &str = "post";

/// Output page names written besides the post pages.
const RESERVED_SLUGS: [&str; 1] = ["index"];

/// Derives URL-safe slugs from file base names, unique within one run.
///
/// The same base name always gets the same slug back. Two different base
/// names that normalize to the same text get `-2`, `-3`, ... suffixes in the
/// order they are first seen. `index` is never handed out, the landing
/// page owns `index.html`.
pub struct SlugGenerator {
    by_name: HashMap<String, String>,
    used: HashSet<String>,
}

impl Default for SlugGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SlugGenerator {
    pub fn new() -> Self {
        SlugGenerator {
            by_name: HashMap::new(),
            used: RESERVED_SLUGS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn slug_for(&mut self, base_name: &str) -> String {
        if let Some(slug) = self.by_name.get(base_name) {
            return slug.clone();
        }

        let base = slugify(base_name);
        let mut slug = base.clone();
        let mut suffix = 2;
        while self.used.contains(&slug) {
            slug = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        self.used.insert(slug.clone());
        self.by_name.insert(base_name.to_string(), slug.clone());
        slug
    }
}

/// Transliterates to ASCII, lowercases and keeps `[a-z0-9]` runs joined by
/// single hyphens.
pub fn slugify(text: &str) -> String {
    let ascii = unidecode::unidecode(text).to_ascii_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut prev_char = None;
    for c in ascii.chars() {
        let c = if c.is_ascii_alphanumeric() { c } else { '-' };
        if c != '-' || (prev_char.is_some() && prev_char != Some('-')) {
            slug.push(c);
        }
        prev_char = Some(c);
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("2023-12-24_christmas"), "2023-12-24-christmas");
        assert_eq!(slugify("  --Rust & Safety!!  "), "rust-safety");
        assert_eq!(slugify("Über Größe"), "uber-grosse");
        assert_eq!(slugify("crème brûlée"), "creme-brulee");
        assert_eq!(slugify("???"), "post");
    }

    #[test]
    fn test_same_name_same_slug() {
        let mut slugs = SlugGenerator::new();
        assert_eq!(slugs.slug_for("Hello World"), "hello-world");
        assert_eq!(slugs.slug_for("Hello World"), "hello-world");
    }

    #[test]
    fn test_collisions_are_disambiguated() {
        let mut slugs = SlugGenerator::new();
        assert_eq!(slugs.slug_for("Hello World"), "hello-world");
        assert_eq!(slugs.slug_for("hello_world"), "hello-world-2");
        assert_eq!(slugs.slug_for("HELLO-WORLD"), "hello-world-3");
        assert_eq!(slugs.slug_for("hello_world"), "hello-world-2");
    }

    #[test]
    fn test_suffix_does_not_steal_existing_slug() {
        let mut slugs = SlugGenerator::new();
        assert_eq!(slugs.slug_for("a-2"), "a-2");
        assert_eq!(slugs.slug_for("a"), "a");
        assert_eq!(slugs.slug_for("A"), "a-3");
    }

    #[test]
    fn test_index_is_reserved() {
        let mut slugs = SlugGenerator::new();
        assert_eq!(slugs.slug_for("Index"), "index-2");
        assert_eq!(slugs.slug_for("index"), "index-3");
        assert_eq!(slugs.slug_for("Index"), "index-2");
        assert_eq!(SlugGenerator::default().slug_for("index"), "index-2");
    }

    #[test]
    fn test_deterministic_across_runs() {
        let names = ["Café", "cafe", "CAFE"];
        let run = || {
            let mut slugs = SlugGenerator::new();
            names.iter().map(|n| slugs.slug_for(n)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
        assert_eq!(run(), vec!["cafe", "cafe-2", "cafe-3"]);
    }
}
