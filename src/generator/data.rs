#[derive(Debug)]
pub(crate) struct PostMetadata {
    pub title: String,
    /// `YYYY-MM-DD`, kept as written. Not checked for calendar validity here.
    pub date: String,
    pub slug: String,
    pub body_html: String,
    /// `posts/<slug>.html`
    pub relative_link: String,

    pub source_file_name: String,
}
