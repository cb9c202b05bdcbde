use markdown::Options;
use spdlog::warn;

/// Turns a markdown body into HTML.
pub trait ContentRenderer {
    fn render(&self, md_text: &str) -> String;
}

/// GitHub flavoured markdown, via the `markdown` crate.
#[derive(Default, Clone, Copy)]
pub struct GfmRenderer;

impl ContentRenderer for GfmRenderer {
    fn render(&self, md_text: &str) -> String {
        match markdown::to_html_with_options(md_text, &Options::gfm()) {
            Ok(html) => html,
            Err(e) => {
                // Only MDX constructs can fail, and gfm() does not enable them
                warn!("Falling back to plain markdown rendering: {}", e.reason);
                markdown::to_html(md_text)
            }
        }
    }
}
