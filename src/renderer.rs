use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{config::Config, generator::data::PostMetadata};

const BASE_CSS: &str = r#"
:root { color-scheme: light dark; }
* { box-sizing: border-box; }
body { margin:0; font-family:-apple-system,system-ui,"Apple SD Gothic Neo","Malgun Gothic",sans-serif; }
.wrap { max-width:720px; margin:0 auto; padding:48px 20px; }
a { color:inherit; text-decoration:none; border-bottom:1px solid #ccc; }
a:hover { border-bottom-color:currentColor; }
time { color:#666; }
footer { margin-top:40px; color:#777; font-size:0.9rem; }
"#;

const POST_CSS: &str = r#"
article h1 { font-size:1.8rem; margin:0 0 8px; }
article p, article li { line-height:1.8; }
code, pre { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
pre { overflow:auto; padding:12px; border:1px solid #ddd; }
table { border-collapse:collapse; }
th, td { border:1px solid #ddd; padding:4px 8px; }
blockquote { margin:0; padding-left:16px; border-left:3px solid #ddd; color:#555; }
hr { border:0; border-top:1px solid #ddd; }
"#;

const INDEX_CSS: &str = r#"
header h1 { font-size:1.6rem; margin:0 0 4px; }
header p { color:#555; margin:0 0 24px; line-height:1.6; }
ul { list-style:none; padding:0; margin:0; }
li { padding:14px 0; border-top:1px solid #ddd; }
li time { font-size:0.9rem; }
"#;

/// Renders self-contained HTML documents. Every text value is escaped by maud;
/// only the Markdown body is inserted as-is.
pub(crate) struct PageRenderer<'a> {
    config: &'a Config,
    year: i32,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a Config, year: i32) -> Self {
        Self { config, year }
    }

    fn head(&self, title: &str, description: &str, css: &str) -> Markup {
        html! {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (title) }
                meta name="description" content=(description);
                style { (PreEscaped(BASE_CSS)) (PreEscaped(css)) }
            }
        }
    }

    pub fn post_page(&self, title: &str, date: &str, body_html: &str) -> String {
        let c = self.config;
        let description = format!("{} - {}", title, c.site_title);
        html! {
            (DOCTYPE)
            html lang=(c.language) {
                (self.head(title, &description, POST_CSS))
                body {
                    div.wrap {
                        header { a href="../index.html" { "← All posts" } }
                        article {
                            h1 { (title) }
                            time datetime=(date) { (date) }
                            (PreEscaped(body_html))
                        }
                        footer { "© " (self.year) " " (c.author) }
                    }
                }
            }
        }
        .into_string()
    }

    /// `posts` is expected newest first and already cut to the index limit.
    pub fn index_page(&self, posts: &[&PostMetadata]) -> String {
        let c = self.config;
        let description = format!("{} - {}", c.site_title, c.description);
        html! {
            (DOCTYPE)
            html lang=(c.language) {
                (self.head(&c.site_title, &description, INDEX_CSS))
                body {
                    div.wrap {
                        header {
                            h1 { (c.site_title) }
                            p { (c.description) }
                        }
                        main {
                            ul {
                                @for post in posts {
                                    li {
                                        a href=(post.relative_link) { (post.title) }
                                        br;
                                        time datetime=(post.date) { (post.date) }
                                    }
                                }
                            }
                        }
                        footer {
                            a href=(c.sitemap_filename) { "Sitemap" }
                            " · "
                            a href=(c.rss_filename) { "RSS" }
                        }
                    }
                }
            }
        }
        .into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, date: &str, slug: &str) -> PostMetadata {
        PostMetadata {
            title: title.to_string(),
            date: date.to_string(),
            slug: slug.to_string(),
            body_html: String::new(),
            relative_link: format!("posts/{slug}.html"),
            source_file_name: format!("{slug}.md"),
        }
    }

    #[test]
    fn post_page_escapes_title_but_not_body() {
        let config = Config::default();
        let renderer = PageRenderer::new(&config, 2025);
        let page = renderer.post_page("<script>x</script>", "2024-03-15", "<p>raw <b>body</b></p>");

        assert!(!page.contains("<script>"));
        assert!(page.contains("<title>&lt;script&gt;x&lt;/script&gt;</title>"));
        assert!(page.contains("<h1>&lt;script&gt;x&lt;/script&gt;</h1>"));
        assert!(page.contains("<p>raw <b>body</b></p>"));
        assert!(page.contains(r#"<time datetime="2024-03-15">2024-03-15</time>"#));
        assert!(page.contains(r#"href="../index.html""#));
        assert!(page.contains("© 2025 Your Name"));
    }

    #[test]
    fn post_page_is_self_contained() {
        let config = Config::default();
        let page = PageRenderer::new(&config, 2025).post_page("t", "2024-01-01", "");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<style>"));
        assert!(!page.contains("<link"));
        assert!(!page.contains("<script"));
        assert!(page.contains(r#"content="t - My Plain Text Blog""#));
    }

    #[test]
    fn index_lists_posts_in_given_order() {
        let config = Config::default();
        let posts = [
            post("June", "2024-06-01", "june"),
            post("January", "2024-01-01", "january"),
            post("December", "2023-12-31", "december"),
        ];
        let refs: Vec<&PostMetadata> = posts.iter().collect();
        let page = PageRenderer::new(&config, 2025).index_page(&refs);

        let june = page.find("2024-06-01").unwrap();
        let january = page.find("2024-01-01").unwrap();
        let december = page.find("2023-12-31").unwrap();
        assert!(june < january && january < december);
        assert_eq!(page.matches("<li>").count(), 3);
        assert!(page.contains(r#"<a href="posts/june.html">June</a>"#));
        assert!(page.contains(r#"<a href="sitemap.xml">Sitemap</a>"#));
        assert!(page.contains(r#"<a href="rss.xml">RSS</a>"#));
    }

    #[test]
    fn index_escapes_titles_and_site_settings() {
        let config = Config {
            site_title: "Tom & Jerry".to_string(),
            ..Config::default()
        };
        let posts = [post("<script>alert(1)</script>", "2024-01-01", "x")];
        let refs: Vec<&PostMetadata> = posts.iter().collect();
        let page = PageRenderer::new(&config, 2025).index_page(&refs);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("<title>Tom &amp; Jerry</title>"));
    }
}
