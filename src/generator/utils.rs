use std::{borrow::Borrow, cmp::Ordering};

use pulldown_cmark::{html, Options, Parser};

use super::data::PostMetadata;

/// Extended profile: tables, footnotes, definition lists, strikethrough and
/// heading attributes on top of CommonMark. Unknown syntax stays literal text.
pub(super) fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_DEFINITION_LIST);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

pub(super) fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, markdown_options());
    let mut body_html = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut body_html, parser);
    body_html
}

/// Newest first. Dates compare as strings, which orders `YYYY-MM-DD` correctly.
pub(super) fn sort_post<T: Borrow<PostMetadata>>(a: &T, b: &T) -> Ordering {
    b.borrow().date.cmp(&a.borrow().date)
}
