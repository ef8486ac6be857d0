use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::Config;

#[derive(Debug)]
pub(crate) struct Context {
    pub project_root: PathBuf,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,

    pub config: Config,
    /// Captured once per run: date fallback for undated posts and footer year.
    pub today: NaiveDate,
}

impl Context {
    pub fn new(project_root: PathBuf, config: Config, today: NaiveDate) -> Self {
        Self {
            source_dir: project_root.join(&config.source_dir),
            output_dir: project_root.join(&config.output_dir),
            project_root,
            config,
            today,
        }
    }
}
