use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::source_filter::SourceFilter;
use crate::view::SiteInfo;

#[derive(Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Defaults {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            language: default_language(),
            extensions: default_extensions(),
            ignore_files: default_ignore_files(),
        }
    }
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_extensions() -> Vec<String> {
    vec![".md".to_string(), ".markdown".to_string()]
}

fn default_ignore_files() -> Vec<String> {
    vec!["README".to_string(), "TEMPLATE".to_string()]
}

#[derive(Deserialize)]
pub struct Site {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
    pub url: String,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    #[serde(default)]
    pub defaults: Defaults,
    pub site: Site,
    pub log: Option<Log>,
}

impl Config {
    pub fn source_filter(&self) -> SourceFilter {
        SourceFilter::new(&self.defaults.extensions, &self.defaults.ignore_files)
    }

    pub fn site_info(&self) -> SiteInfo {
        SiteInfo {
            title: self.site.title.clone(),
            subtitle: self.site.subtitle.clone(),
            author: self.site.author.clone(),
            url: self.site.url.clone(),
        }
    }
}

fn parse_path(path: PathBuf, exe_dir: Option<&Path>) -> PathBuf {
    let (Some(exe_dir), Some(str_path)) = (exe_dir.and_then(|d| d.to_str()), path.to_str()) else {
        return path;
    };
    if str_path.starts_with("${exe_dir}") {
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    let cur_exe = env::current_exe().ok();
    let exe_dir = cur_exe.as_deref().and_then(|p| p.parent());
    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir, exe_dir),
        output_dir: parse_path(cfg.paths.output_dir, exe_dir),
        template_dir: parse_path(cfg.paths.template_dir, exe_dir),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
