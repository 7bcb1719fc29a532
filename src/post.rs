//! Defines the [`Post`] type, the summary of a single blog entry as handed to
//! the renderer by the page-generation step. Posts arrive already parsed,
//! sorted and excerpted; nothing in this crate modifies them.

use serde::Deserialize;

/// A post summary belonging to one page of the listing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// The post's title.
    pub title: String,

    /// The site-relative path of the post page.
    pub url: String,

    /// The pre-rendered HTML excerpt shown in the listing.
    #[serde(default)]
    pub excerpt: String,

    /// The post's categories, in front-matter order.
    #[serde(default)]
    pub categories: Vec<String>,

    /// The post's tags, in front-matter order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Returns `true` if the post has at least one category or tag, i.e., if
    /// a taxonomy line should be rendered for it.
    pub fn has_taxonomy(&self) -> bool {
        !self.categories.is_empty() || !self.tags.is_empty()
    }
}
