//! Builds the blogchain: the published posts ordered newest first, with
//! `prev`/`next` links that skip hidden posts.
//!
//! Links are positions into [`Blogchain::posts`]. The vector is the only
//! owner of the posts; the links are recomputed on every build.

use spdlog::{debug, info, warn};

use crate::content::content_renderer::ContentRenderer;
use crate::content::raw_document::RawDocument;
use crate::post::Post;
use crate::post_error::PostError;
use crate::post_list::UnreadableFile;
use crate::slug::SlugGenerator;
use crate::source_filter::SourceFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Invalid(PostError),
    Unreadable(String),
}

/// A source file that did not make it into the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// What happened to the files that are not in the chain.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildReport {
    pub skipped: Vec<SkippedFile>,
    pub drafts: Vec<String>,
    pub ignored: Vec<String>,
}

impl BuildReport {
    /// Records files that could not be read before reaching the builder.
    pub fn add_unreadable(&mut self, unreadable: &[UnreadableFile]) {
        for file in unreadable {
            self.skipped.push(SkippedFile {
                file_name: file.file_name.clone(),
                reason: SkipReason::Unreadable(file.error.to_string()),
            });
        }
    }

    /// Records files the directory scan rejected before reaching the builder.
    pub fn add_ignored(&mut self, ignored: &[String]) {
        self.ignored.extend(ignored.iter().cloned());
    }
}

pub struct Blogchain {
    posts: Vec<Post>,
    report: BuildReport,
}

impl Blogchain {
    /// Every published post, hidden ones included, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn report_mut(&mut self) -> &mut BuildReport {
        &mut self.report
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.is_visible())
    }

    /// The newest visible post, which doubles as the landing page.
    pub fn landing(&self) -> Option<&Post> {
        self.visible().next()
    }

    pub fn next(&self, post: &Post) -> Option<&Post> {
        post.next_index().and_then(|i| self.posts.get(i))
    }

    pub fn prev(&self, post: &Post) -> Option<&Post> {
        post.prev_index().and_then(|i| self.posts.get(i))
    }

    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}

pub struct ChainBuilder<'a, R: ContentRenderer + ?Sized> {
    filter: SourceFilter,
    default_lang: String,
    renderer: &'a R,
}

impl<'a, R: ContentRenderer + ?Sized> ChainBuilder<'a, R> {
    pub fn new(filter: SourceFilter, default_lang: &str, renderer: &'a R) -> Self {
        ChainBuilder {
            filter,
            default_lang: default_lang.to_string(),
            renderer,
        }
    }

    /// Compiles `sources` into a chain. A file that fails to parse is logged,
    /// recorded in the report and left out; it never stops the build.
    pub fn build<I>(&self, sources: I) -> Blogchain
        where I: IntoIterator<Item=RawDocument>
    {
        let mut report = BuildReport::default();
        let mut slugs = SlugGenerator::new();
        let mut posts = vec![];

        for doc in sources {
            if !self.filter.accepts(&doc.file_name) {
                debug!("Ignoring {}", doc.file_name);
                report.ignored.push(doc.file_name);
                continue;
            }

            match Post::from_string(&doc.file_name, &doc.raw_content, &self.default_lang, &mut slugs, self.renderer) {
                Ok(post) if post.draft => {
                    debug!("Dropping draft {}", doc.file_name);
                    report.drafts.push(doc.file_name);
                }
                Ok(post) => {
                    info!("Compiled {} as {}", doc.file_name, post.slug);
                    posts.push(post);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", doc.file_name, e);
                    report.skipped.push(SkippedFile {
                        file_name: doc.file_name,
                        reason: SkipReason::Invalid(e),
                    });
                }
            }
        }

        // Stable, so posts sharing a date keep their input order
        posts.sort_by(|a, b| b.cmp(a));
        link_visible_posts(&mut posts);

        Blogchain { posts, report }
    }
}

/// Walks the sorted posts once and links visible posts to their visible
/// neighbours. Each hidden post redirects the last visible post's `next`
/// past itself, so runs of hidden posts are skipped as a whole.
fn link_visible_posts(posts: &mut [Post]) {
    let mut last_visible: Option<usize> = None;

    for i in 0..posts.len() {
        let raw_next = if i + 1 < posts.len() { Some(i + 1) } else { None };

        if posts[i].hidden {
            posts[i].prev = None;
            posts[i].next = None;
            if let Some(last) = last_visible {
                posts[last].next = raw_next;
            }
        } else {
            posts[i].prev = last_visible;
            posts[i].next = raw_next;
            last_visible = Some(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::content::content_renderer::GfmRenderer;
    use crate::post_error::InvalidPost;
    use crate::test_data::post_source;

    use super::*;

    fn doc(file_name: &str, date: &str, extra_header: &str) -> RawDocument {
        RawDocument::new(file_name, &post_source(file_name, date, extra_header))
    }

    fn build(sources: Vec<RawDocument>) -> Blogchain {
        let builder = ChainBuilder::new(SourceFilter::default(), "en_US", &GfmRenderer);
        builder.build(sources)
    }

    fn slugs(chain: &Blogchain) -> Vec<&str> {
        chain.posts().iter().map(|p| p.slug.as_str()).collect()
    }

    fn next_slug<'a>(chain: &'a Blogchain, slug: &str) -> Option<&'a str> {
        chain.find(slug).and_then(|p| chain.next(p)).map(|p| p.slug.as_str())
    }

    fn prev_slug<'a>(chain: &'a Blogchain, slug: &str) -> Option<&'a str> {
        chain.find(slug).and_then(|p| chain.prev(p)).map(|p| p.slug.as_str())
    }

    /// Every visible `p` with a `next` must be that post's `prev`, and walking
    /// `next` from the landing post must visit all visible posts in order.
    fn assert_chain_integrity(chain: &Blogchain) {
        for post in chain.visible() {
            if let Some(next) = chain.next(post) {
                assert!(next.is_visible());
                assert_eq!(chain.prev(next).map(|p| p.slug.as_str()), Some(post.slug.as_str()));
            }
        }

        let mut walked = vec![];
        let mut current = chain.landing();
        while let Some(post) = current {
            walked.push(post.slug.as_str());
            current = chain.next(post);
        }
        let visible: Vec<&str> = chain.visible().map(|p| p.slug.as_str()).collect();
        assert_eq!(walked, visible);
    }

    #[test]
    fn test_sorted_newest_first() {
        let chain = build(vec![
            doc("b.md", "02.01.23", ""),
            doc("c.md", "03.01.2023", ""),
            doc("a.md", "01.01.23", ""),
        ]);
        assert_eq!(slugs(&chain), ["c", "b", "a"]);
        assert_chain_integrity(&chain);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let sources = vec![
            doc("a.md", "01.01.23", ""),
            doc("b.md", "05.03.23", ""),
            doc("c.md", "17.02.23", ""),
            doc("d.md", "30.12.22", ""),
        ];
        let mut reversed = sources.clone();
        reversed.reverse();

        let chain = build(sources);
        let reversed_chain = build(reversed);
        assert_eq!(slugs(&chain), ["b", "c", "a", "d"]);
        assert_eq!(slugs(&chain), slugs(&reversed_chain));
    }

    #[test]
    fn test_same_date_keeps_input_order() {
        let chain = build(vec![
            doc("x.md", "01.01.23", ""),
            doc("y.md", "01.01.23", ""),
            doc("z.md", "02.01.23", ""),
        ]);
        assert_eq!(slugs(&chain), ["z", "x", "y"]);
    }

    #[test]
    fn test_links_between_visible_posts() {
        let chain = build(vec![
            doc("a.md", "03.01.23", ""),
            doc("b.md", "02.01.23", ""),
            doc("c.md", "01.01.23", ""),
        ]);
        assert_eq!(prev_slug(&chain, "a"), None);
        assert_eq!(next_slug(&chain, "a"), Some("b"));
        assert_eq!(prev_slug(&chain, "b"), Some("a"));
        assert_eq!(next_slug(&chain, "b"), Some("c"));
        assert_eq!(prev_slug(&chain, "c"), Some("b"));
        assert_eq!(next_slug(&chain, "c"), None);
    }

    #[test]
    fn test_hidden_post_is_spliced_out() {
        let chain = build(vec![
            doc("a.md", "03.01.23", ""),
            doc("b.md", "02.01.23", "hidden: yes\n"),
            doc("c.md", "01.01.23", ""),
        ]);

        assert_eq!(slugs(&chain), ["a", "b", "c"]);
        assert_eq!(next_slug(&chain, "a"), Some("c"));
        assert_eq!(prev_slug(&chain, "c"), Some("a"));
        assert_eq!(next_slug(&chain, "b"), None);
        assert_eq!(prev_slug(&chain, "b"), None);
        assert_chain_integrity(&chain);
    }

    #[test]
    fn test_consecutive_hidden_posts_are_skipped() {
        let chain = build(vec![
            doc("a.md", "06.01.23", ""),
            doc("b.md", "05.01.23", "hidden:\n"),
            doc("c.md", "04.01.23", "hidden:\n"),
            doc("d.md", "03.01.23", "hidden:\n"),
            doc("e.md", "02.01.23", ""),
            doc("f.md", "01.01.23", "hidden:\n"),
        ]);

        assert_eq!(slugs(&chain), ["a", "b", "c", "d", "e", "f"]);
        assert_eq!(next_slug(&chain, "a"), Some("e"));
        assert_eq!(prev_slug(&chain, "e"), Some("a"));
        // Trailing hidden post: the last visible post has no successor
        assert_eq!(next_slug(&chain, "e"), None);
        for hidden in ["b", "c", "d", "f"] {
            assert_eq!(next_slug(&chain, hidden), None);
            assert_eq!(prev_slug(&chain, hidden), None);
        }
        assert_chain_integrity(&chain);
    }

    #[test]
    fn test_leading_hidden_posts() {
        let chain = build(vec![
            doc("a.md", "03.01.23", "hidden:\n"),
            doc("b.md", "02.01.23", ""),
            doc("c.md", "01.01.23", ""),
        ]);
        assert_eq!(chain.landing().map(|p| p.slug.as_str()), Some("b"));
        assert_eq!(prev_slug(&chain, "b"), None);
        assert_eq!(next_slug(&chain, "b"), Some("c"));
        assert_chain_integrity(&chain);
    }

    #[test]
    fn test_all_hidden() {
        let chain = build(vec![
            doc("a.md", "02.01.23", "hidden:\n"),
            doc("b.md", "01.01.23", "hidden:\n"),
        ]);
        assert_eq!(chain.len(), 2);
        assert!(chain.landing().is_none());
        assert_eq!(chain.visible().count(), 0);
    }

    #[test]
    fn test_drafts_are_dropped() {
        let chain = build(vec![
            doc("a.md", "03.01.23", ""),
            doc("b.md", "02.01.23", "draft: false\n"),
            doc("c.md", "01.01.23", "draft:\n"),
        ]);
        assert_eq!(slugs(&chain), ["a"]);
        assert_eq!(chain.report().drafts, ["b.md", "c.md"]);
        assert_eq!(next_slug(&chain, "a"), None);
    }

    #[test]
    fn test_invalid_post_is_skipped() {
        let chain = build(vec![
            doc("a.md", "02.01.23", ""),
            RawDocument::new("nodate.md", "---\ntitle: No date\n---\nbody"),
            RawDocument::new("baddate.md", "title: Bad\ndate: 2023-01-01\n---\nbody"),
            RawDocument::new("nobody.md", "just text"),
            RawDocument::new("badline.md", "title: T\nbroken\n---\nbody"),
            doc("b.md", "01.01.23", ""),
        ]);

        assert_eq!(slugs(&chain), ["a", "b"]);
        assert_chain_integrity(&chain);

        let skipped = &chain.report().skipped;
        assert_eq!(skipped.len(), 4);
        assert_eq!(skipped[0], SkippedFile {
            file_name: "nodate.md".to_string(),
            reason: SkipReason::Invalid(PostError::InvalidPost(InvalidPost::MissingKeys(vec!["date".to_string()]))),
        });
        assert_eq!(skipped[1].reason, SkipReason::Invalid(PostError::InvalidPost(InvalidPost::BadDate("2023-01-01".to_string()))));
        assert_eq!(skipped[2].reason, SkipReason::Invalid(PostError::MalformedDocument));
        assert!(matches!(skipped[3].reason, SkipReason::Invalid(PostError::InvalidHeaderLine { line_number: 2, .. })));
    }

    #[test]
    fn test_filtered_candidates() {
        let chain = build(vec![
            doc("a.md", "02.01.23", ""),
            doc("README.md", "01.01.23", ""),
            doc("notes.txt", "01.01.23", ""),
        ]);
        assert_eq!(slugs(&chain), ["a"]);
        assert_eq!(chain.report().ignored, ["README.md", "notes.txt"]);
    }

    #[test]
    fn test_colliding_slugs() {
        let chain = build(vec![
            doc("Hello World.md", "02.01.23", ""),
            doc("hello_world.md", "01.01.23", ""),
        ]);
        assert_eq!(slugs(&chain), ["hello-world", "hello-world-2"]);
    }

    #[test]
    fn test_empty_input() {
        let chain = build(vec![]);
        assert!(chain.is_empty());
        assert!(chain.landing().is_none());
        assert_eq!(chain.report(), &BuildReport::default());
    }

    #[test]
    fn test_add_unreadable() {
        let mut chain = build(vec![]);
        chain.report_mut().add_unreadable(&[UnreadableFile {
            file_name: "locked.md".to_string(),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }]);
        assert_eq!(chain.report().skipped, [SkippedFile {
            file_name: "locked.md".to_string(),
            reason: SkipReason::Unreadable("denied".to_string()),
        }]);
    }

    #[test]
    fn test_add_ignored() {
        let mut chain = build(vec![RawDocument::new("README.md", "read me")]);
        chain.report_mut().add_ignored(&["notes.txt".to_string()]);
        assert_eq!(chain.report().ignored, ["README.md", "notes.txt"]);
        assert!(chain.report().skipped.is_empty());
    }
}
