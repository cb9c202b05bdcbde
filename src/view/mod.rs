pub mod post_renderer;
pub mod rss_renderer;

/// Site-wide values shared by the page template and the feed.
#[derive(Debug, Clone, Default)]
pub struct SiteInfo {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub url: String,
}

/// Relative link to a post page, e.g. `hello-world.html`.
pub fn page_link(slug: &str) -> String {
    format!("{}.html", slug)
}

/// Absolute link to a post page under `base_url`.
pub fn full_link(base_url: &str, slug: &str) -> String {
    let base_url = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    format!("{}{}", base_url, page_link(slug))
}
