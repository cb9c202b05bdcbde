use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::blogchain::Blogchain;
use crate::post::Post;
use crate::text_utils::format_iso_date;
use crate::view::{page_link, SiteInfo};

#[derive(ramhorns::Content)]
struct ViewLink<'a> {
    link: String,
    title: &'a str,
}

impl<'a> From<&'a Post> for ViewLink<'a> {
    fn from(post: &'a Post) -> Self {
        ViewLink {
            link: page_link(&post.slug),
            title: post.title.as_str(),
        }
    }
}

#[derive(ramhorns::Content)]
struct ViewMeta<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewItem<'a> {
    site_title: &'a str,
    site_subtitle: &'a str,
    site_author: &'a str,
    site_url: &'a str,
    slug: &'a str,
    lang: &'a str,
    date: &'a str,
    iso_date: String,
    hidden: bool,
    prev: Option<ViewLink<'a>>,
    next: Option<ViewLink<'a>>,
    meta: Vec<ViewMeta<'a>>,
    post_title: &'a str,
    post_content: &'a str,
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'_> {
    pub fn new(view_tpl_src: &str) -> io::Result<PostRenderer<'_>> {
        let template = match Template::new(view_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
        })
    }

    /// Renders `post`, which must belong to `chain`. Hidden posts get no
    /// navigation links.
    pub fn render(&self, chain: &Blogchain, post: &Post, site: &SiteInfo) -> String {
        let prev = chain.prev(post).map(ViewLink::from);
        let next = chain.next(post).map(ViewLink::from);
        let meta = post.meta.iter()
            .map(|(key, value)| ViewMeta { key: key.as_str(), value: value.as_str() })
            .collect();

        self.template.render(&ViewItem {
            site_title: site.title.as_str(),
            site_subtitle: site.subtitle.as_str(),
            site_author: site.author.as_str(),
            site_url: site.url.as_str(),
            slug: post.slug.as_str(),
            lang: post.lang.as_str(),
            date: post.long_date.as_str(),
            iso_date: format_iso_date(&post.date),
            hidden: post.hidden,
            prev,
            next,
            meta,
            post_title: post.title.as_str(),
            post_content: post.rendered.as_str(),
        })
    }
}
