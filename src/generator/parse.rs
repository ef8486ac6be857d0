use std::{path::Path, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;

use super::{data::PostMetadata, utils::markdown_to_html};

static DATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Builds the metadata record for one post.
///
/// The first non-blank line is the title (leading `#`s removed) and the second
/// one, when it looks like `YYYY-MM-DD`, is the publish date. Neither line is
/// removed from the body: the whole text goes through the Markdown converter.
pub(crate) fn parse_post(
    file_name: &str,
    content: &str,
    link_dir: &str,
    today: NaiveDate,
) -> PostMetadata {
    let slug = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());

    let mut non_blank = content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty());

    let title = non_blank
        .next()
        .map(|l| l.trim_start_matches(['#', ' ']).trim())
        .filter(|t| !t.is_empty())
        .unwrap_or(slug.as_str())
        .to_string();

    let date = non_blank
        .next()
        .map(str::trim)
        .filter(|l| DATE_LINE.is_match(l))
        .map(str::to_string)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    PostMetadata {
        title,
        date,
        body_html: markdown_to_html(content),
        relative_link: format!("{link_dir}/{slug}.html"),
        slug,
        source_file_name: file_name.to_string(),
    }
}
