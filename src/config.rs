use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use log::info;
use serde::Deserialize;

pub(crate) const CONFIG_FILE_NAME: &str = "blog.json";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    pub site_title: String,
    pub author: String,
    /// Absolute origin used for feed links, without a trailing slash.
    pub base_url: String,
    /// Caps the index listing only. Sitemap and RSS always carry every post.
    pub index_limit: Option<usize>,
    pub sitemap_filename: String,
    pub rss_filename: String,
    pub robots_filename: String,

    /// Tagline shown under the index heading.
    pub description: String,
    pub language: String,
    pub source_dir: String,
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: "My Plain Text Blog".to_string(),
            author: "Your Name".to_string(),
            base_url: "https://yourname.github.io".to_string(),
            index_limit: None,
            sitemap_filename: "sitemap.xml".to_string(),
            rss_filename: "rss.xml".to_string(),
            robots_filename: "robots.txt".to_string(),
            description: "Black & white, text only, ultralight blog".to_string(),
            language: "en".to_string(),
            source_dir: "posts_src".to_string(),
            output_dir: "posts".to_string(),
        }
    }
}

impl Config {
    /// Number of posts the index page shows out of `total`.
    /// A limit of zero behaves like no limit.
    pub fn index_len(&self, total: usize) -> usize {
        match self.index_limit {
            Some(limit) if limit > 0 => limit.min(total),
            _ => total,
        }
    }

    fn normalize(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }

    fn apply_env_overrides(mut self) -> Self {
        if let Ok(name) = std::env::var("BLOG_NAME") {
            self.site_title = name;
        }
        if let Ok(url) = std::env::var("BLOG_URL") {
            self.base_url = url;
        }
        self
    }
}

fn read_config_file(config_file_path: &Path) -> anyhow::Result<Config> {
    if config_file_path.exists() {
        let fd = File::open(config_file_path)?;
        let reader = BufReader::new(fd);
        serde_json::from_reader(reader)
            .with_context(|| format!("while reading config {config_file_path:?}"))
    } else {
        info!("Config file({config_file_path:?}) does not exist. using defaults...");
        Ok(Config::default())
    }
}

pub(crate) fn load_config(project_root: &Path) -> anyhow::Result<Config> {
    let config = read_config_file(&project_root.join(CONFIG_FILE_NAME))?;
    Ok(config.apply_env_overrides().normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{ "site_title": "Notes", "base_url": "https://example.com/", "index_limit": 2 }"#,
        )
        .unwrap();

        let config = read_config_file(&path).unwrap().normalize();
        assert_eq!(config.site_title, "Notes");
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.index_limit, Some(2));
        assert_eq!(config.rss_filename, "rss.xml");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(read_config_file(&path).is_err());
    }

    #[test]
    fn env_overrides_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("BLOG_URL", "https://x.test/");
        std::env::set_var("BLOG_NAME", "From Env");
        let config = load_config(dir.path());
        std::env::remove_var("BLOG_URL");
        std::env::remove_var("BLOG_NAME");

        let config = config.unwrap();
        assert_eq!(config.base_url, "https://x.test");
        assert_eq!(config.site_title, "From Env");
    }

    #[test]
    fn index_len_respects_limit() {
        let mut config = Config::default();
        assert_eq!(config.index_len(3), 3);
        config.index_limit = Some(2);
        assert_eq!(config.index_len(3), 2);
        assert_eq!(config.index_len(1), 1);
        config.index_limit = Some(0);
        assert_eq!(config.index_len(3), 3);
    }
}
