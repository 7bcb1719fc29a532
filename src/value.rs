//! Converts rendered pages into template [`Value`]s. Text is HTML-escaped and
//! link targets are href-escaped on the way in, so templates can print every
//! field as-is. Excerpts are already HTML and are passed through untouched.

use crate::render::{Control, Link, NavBlock, PageControl, PostBlock, RenderedPage, Taxonomy};
use gtmpl_value::Value;
use pulldown_cmark::escape::{escape_href, escape_html};
use std::collections::HashMap;

fn text(s: &str) -> Value {
    let mut out = String::with_capacity(s.len());
    // Writing into a `String` can't fail.
    let _ = escape_html(&mut out, s);
    Value::String(out)
}

fn href(s: &str) -> Value {
    let mut out = String::with_capacity(s.len());
    let _ = escape_href(&mut out, s);
    Value::String(out)
}

fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    let mut m: HashMap<String, Value> = HashMap::with_capacity(N);
    for (key, value) in fields {
        m.insert(key.to_owned(), value);
    }
    Value::Object(m)
}

impl From<&Link> for Value {
    fn from(link: &Link) -> Value {
        object([("label", text(&link.label)), ("href", href(&link.href))])
    }
}

impl From<&Taxonomy> for Value {
    fn from(taxonomy: &Taxonomy) -> Value {
        object([
            (
                "categories",
                Value::Array(taxonomy.categories.iter().map(Value::from).collect()),
            ),
            (
                "tags",
                Value::Array(taxonomy.tags.iter().map(Value::from).collect()),
            ),
        ])
    }
}

impl From<&PostBlock> for Value {
    /// Converts a [`PostBlock`] into a [`Value::Object`] with the fields
    /// `title`, `url`, `taxonomy` (nil when absent), `excerpt` and
    /// `read_more`.
    fn from(block: &PostBlock) -> Value {
        object([
            ("title", text(&block.title)),
            ("url", href(&block.url)),
            (
                "taxonomy",
                match &block.taxonomy {
                    Some(taxonomy) => taxonomy.into(),
                    None => Value::Nil,
                },
            ),
            ("excerpt", Value::String(block.excerpt.clone())),
            ("read_more", href(&block.url)),
        ])
    }
}

impl From<&Control> for Value {
    fn from(control: &Control) -> Value {
        object([
            (
                "href",
                match control.href() {
                    Some(target) => href(target),
                    None => Value::Nil,
                },
            ),
            ("disabled", Value::Bool(*control == Control::Disabled)),
        ])
    }
}

impl From<&PageControl> for Value {
    fn from(control: &PageControl) -> Value {
        object([
            ("number", Value::String(control.page().to_string())),
            (
                "href",
                match control.href() {
                    Some(target) => href(target),
                    None => Value::Nil,
                },
            ),
            (
                "current",
                Value::Bool(matches!(control, PageControl::Current(_))),
            ),
        ])
    }
}

impl From<&NavBlock> for Value {
    fn from(nav: &NavBlock) -> Value {
        object([
            ("previous", (&nav.previous).into()),
            (
                "pages",
                Value::Array(nav.pages.iter().map(Value::from).collect()),
            ),
            ("next", (&nav.next).into()),
        ])
    }
}

impl From<&RenderedPage> for Value {
    /// Converts a [`RenderedPage`] into a [`Value::Object`] with fields `posts`
    /// and `navigation` (nil when the listing has a single page).
    fn from(page: &RenderedPage) -> Value {
        object([
            (
                "posts",
                Value::Array(page.posts.iter().map(Value::from).collect()),
            ),
            (
                "navigation",
                match &page.navigation {
                    Some(nav) => nav.into(),
                    None => Value::Nil,
                },
            ),
        ])
    }
}
