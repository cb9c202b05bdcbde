//! Writes the compiled chain to disk: one page per post (hidden posts
//! included), `index.html` for the newest visible post and `feed.xml` for
//! all visible posts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spdlog::{info, warn};

use crate::blogchain::Blogchain;
use crate::view::post_renderer::PostRenderer;
use crate::view::rss_renderer::RssChannel;
use crate::view::{page_link, SiteInfo};

pub const POST_TEMPLATE: &str = "post.tpl";
pub const INDEX_FILE: &str = "index.html";
pub const FEED_FILE: &str = "feed.xml";

pub fn read_template(tpl_dir: &Path, file_name: &str) -> Result<String> {
    let full_path = tpl_dir.join(file_name);
    fs::read_to_string(&full_path)
        .with_context(|| format!("Error loading template {}", full_path.display()))
}

pub struct SiteWriter<'a> {
    pub output_dir: PathBuf,
    pub post_renderer: PostRenderer<'a>,
    pub site: SiteInfo,
}

/// Files written by one run.
#[derive(Debug, Default)]
pub struct WrittenSite {
    pub pages: Vec<PathBuf>,
    pub index: Option<PathBuf>,
    pub feed: PathBuf,
}

impl SiteWriter<'_> {
    pub fn write(&self, chain: &Blogchain) -> Result<WrittenSite> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Error creating output directory {}", self.output_dir.display()))?;

        let mut written = WrittenSite::default();
        for post in chain.posts() {
            let page = self.post_renderer.render(chain, post, &self.site);
            let path = self.write_file(&page_link(&post.slug), page.as_bytes())?;
            written.pages.push(path);
        }

        match chain.landing() {
            Some(landing) => {
                let page = self.post_renderer.render(chain, landing, &self.site);
                written.index = Some(self.write_file(INDEX_FILE, page.as_bytes())?);
            }
            None => warn!("No visible post, {} is not written", INDEX_FILE),
        }

        let rss = RssChannel {
            ch_title: self.site.title.as_str(),
            ch_link: self.site.url.as_str(),
            ch_desc: self.site.subtitle.as_str(),
            ch_author: self.site.author.as_str(),
        };
        let feed = rss.render(chain.visible()).context("Error rendering the feed")?;
        written.feed = self.write_file(FEED_FILE, &feed)?;

        Ok(written)
    }

    fn write_file(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, content).with_context(|| format!("Error writing {}", path.display()))?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}
