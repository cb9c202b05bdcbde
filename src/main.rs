use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use spdlog::{info, warn};

use blogchain::blogchain::{ChainBuilder, SkipReason};
use blogchain::config::read_config;
use blogchain::content::content_renderer::GfmRenderer;
use blogchain::logger::configure_logger;
use blogchain::post_list::PostList;
use blogchain::site_writer::{read_template, SiteWriter, POST_TEMPLATE};
use blogchain::view::post_renderer::PostRenderer;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "blogchain.toml")]
    config: PathBuf,

    /// Output directory, overrides paths.output_dir
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every step to the console
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = read_config(&args.config)?;
    configure_logger(cfg.log.as_ref(), args.verbose).context("Error configuring the logger")?;

    let posts_dir = cfg.paths.posts_dir.clone();
    if !posts_dir.is_dir() {
        bail!("Posts directory {} does not exist", posts_dir.display());
    }
    info!("Reading posts from {}", posts_dir.display());

    let post_list = PostList {
        root_dir: posts_dir.clone(),
        filter: cfg.source_filter(),
    };
    let scanned = post_list.retrieve_documents()
        .with_context(|| format!("Error listing {}", posts_dir.display()))?;

    let builder = ChainBuilder::new(cfg.source_filter(), &cfg.defaults.language, &GfmRenderer);
    let mut chain = builder.build(scanned.documents);
    chain.report_mut().add_unreadable(&scanned.unreadable);
    chain.report_mut().add_ignored(&scanned.ignored);

    let tpl_src = read_template(&cfg.paths.template_dir, POST_TEMPLATE)?;
    let writer = SiteWriter {
        output_dir: args.output.unwrap_or_else(|| cfg.paths.output_dir.clone()),
        post_renderer: PostRenderer::new(&tpl_src)?,
        site: cfg.site_info(),
    };
    writer.write(&chain)?;

    let report = chain.report();
    for skipped in &report.skipped {
        match &skipped.reason {
            SkipReason::Invalid(e) => warn!("Skipped {}: {}", skipped.file_name, e),
            SkipReason::Unreadable(e) => warn!("Skipped {}: {}", skipped.file_name, e),
        }
    }
    let hidden = chain.posts().iter().filter(|p| p.hidden).count();
    info!("Compiled {} posts ({} hidden), {} drafts, {} skipped, {} ignored",
        chain.len(), hidden, report.drafts.len(), report.skipped.len(), report.ignored.len());

    Ok(())
}
