use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use chrono::Datelike;
use log::{debug, info};

use crate::{
    context::Context,
    feed::{generate_robots, generate_rss, generate_sitemap},
    renderer::PageRenderer,
};

use self::{data::PostMetadata, parse::parse_post, utils::sort_post};

pub(crate) mod data;
pub(crate) mod parse;
mod utils;

/// Markdown sources directly under `dir`, sorted by file name.
fn discover_sources(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut sources = vec![];
    for entry in std::fs::read_dir(dir).with_context(|| format!("while listing {dir:?}"))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("while writing {path:?}"))?;
    debug!("wrote {path:?}");
    Ok(())
}

fn preprocess_file(ctx: &Context, path: &Path) -> anyhow::Result<PostMetadata> {
    let content = std::fs::read_to_string(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(parse_post(
        &file_name,
        &content,
        &ctx.config.output_dir,
        ctx.today,
    ))
}

/// Runs the whole build and returns the number of posts processed.
///
/// Aborts on the first error. Files written before the failure are left as they are.
pub(crate) fn generate(ctx: &Context) -> anyhow::Result<usize> {
    let c = &ctx.config;
    if !ctx.source_dir.is_dir() {
        bail!("source directory {:?} must be a directory.", ctx.source_dir);
    }
    fs_extra::dir::create_all(&ctx.output_dir, false)
        .with_context(|| format!("while creating {:?}", ctx.output_dir))?;

    let renderer = PageRenderer::new(c, ctx.today.year());

    let mut posts = vec![];
    for path in discover_sources(&ctx.source_dir)? {
        debug!("processing {path:?}");
        let post = preprocess_file(ctx, &path)
            .with_context(|| format!("while preprocessing {path:?}"))?;

        let out_path = ctx.output_dir.join(format!("{}.html", post.slug));
        write_output(
            &out_path,
            &renderer.post_page(&post.title, &post.date, &post.body_html),
        )?;
        posts.push(post);
    }

    posts.sort_by(sort_post);

    {
        let shown: Vec<&PostMetadata> = posts.iter().take(c.index_len(posts.len())).collect();
        write_output(
            &ctx.project_root.join("index.html"),
            &renderer.index_page(&shown),
        )?;
        info!("index.html: {} of {} posts listed", shown.len(), posts.len());
    }

    write_output(
        &ctx.project_root.join(&c.sitemap_filename),
        &generate_sitemap(c, &posts),
    )?;
    info!("{}: {} urls", c.sitemap_filename, posts.len() + 1);

    let rss = generate_rss(c, &posts).context("while generating rss")?;
    write_output(&ctx.project_root.join(&c.rss_filename), &rss)?;
    info!("{}: {} items", c.rss_filename, posts.len());

    write_output(
        &ctx.project_root.join(&c.robots_filename),
        &generate_robots(c),
    )?;
    info!("{} written", c.robots_filename);

    Ok(posts.len())
}
