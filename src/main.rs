use anyhow::bail;
use clap::{command, Arg};
use context::Context;
use generator::generate;
use std::path::PathBuf;

mod config;
mod context;
mod feed;
mod generator;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[Arg::new("project_root")
            .help("Directory holding the blog config and sources. Outputs are written here.")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value(".")])
        .get_matches();

    let Some(project_root) = matches.get_one::<PathBuf>("project_root") else {
        bail!("project_root is required.");
    };
    if !project_root.is_dir() {
        bail!("project_root must be a directory.");
    }

    let config = config::load_config(project_root)?;
    let today = chrono::Local::now().date_naive();
    let ctx = Context::new(project_root.to_owned(), config, today);

    let count = generate(&ctx)?;
    println!("Build complete: {count} posts, index/sitemap/rss/robots generated.");

    Ok(())
}
