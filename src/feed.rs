//! Sitemap, RSS 2.0 and robots.txt output.
//!
//! All three are pure functions of the post list and the configuration.
//! Unlike the index page, they always cover every post.

use anyhow::Context as _;
use chrono::NaiveDate;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::{config::Config, generator::data::PostMetadata};

const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn post_url(config: &Config, post: &PostMetadata) -> String {
    format!("{}/{}", config.base_url, post.relative_link)
}

pub(crate) fn generate_sitemap(config: &Config, posts: &[PostMetadata]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_XMLNS}\">\n"));
    xml.push_str(&format!(
        "  <url><loc>{}/</loc></url>\n",
        escape_xml(&config.base_url)
    ));
    for post in posts {
        xml.push_str(&format!(
            "  <url><loc>{}</loc></url>\n",
            escape_xml(&post_url(config, post))
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// `YYYY-MM-DD` to an RFC-822 timestamp pinned at noon, +0900.
///
/// Fails for strings that are not real calendar dates, e.g. `2024-02-30`.
pub(crate) fn rfc822_date(date: &str) -> anyhow::Result<String> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("invalid date {date:?}"))?;
    let noon = day
        .and_hms_opt(12, 0, 0)
        .with_context(|| format!("invalid time for {date:?}"))?;
    Ok(noon.format("%a, %d %b %Y %H:%M:%S +0900").to_string())
}

fn post_to_rss_item(config: &Config, post: &PostMetadata) -> anyhow::Result<Item> {
    let pub_date = rfc822_date(&post.date)
        .with_context(|| format!("while generating rss item for {:?}", post.source_file_name))?;
    let link = post_url(config, post);

    Ok(ItemBuilder::default()
        .title(Some(post.title.clone()))
        .link(Some(link.clone()))
        .guid(Some(GuidBuilder::default().permalink(true).value(link).build()))
        .pub_date(Some(pub_date))
        .description(Some(format!("{} - {}", post.title, config.site_title)))
        .build())
}

pub(crate) fn generate_rss(config: &Config, posts: &[PostMetadata]) -> anyhow::Result<String> {
    let items = posts
        .iter()
        .map(|post| post_to_rss_item(config, post))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let channel = ChannelBuilder::default()
        .title(config.site_title.clone())
        .link(format!("{}/", config.base_url))
        .description(format!("{} RSS", config.site_title))
        .language(Some(config.language.clone()))
        .items(items)
        .build();

    Ok(channel.to_string())
}

pub(crate) fn generate_robots(config: &Config) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/{}\n",
        config.base_url, config.sitemap_filename
    )
}
