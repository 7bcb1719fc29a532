//! The post-listing and pagination renderer. Given one page's [`Paginator`]
//! and the [`SiteConfig`], [`render`] produces a [`RenderedPage`]: the post
//! summary blocks for the page, in input order, and the navigation controls
//! linking it to its neighbours and to every other page of the listing.
//!
//! Rendering is pure. It reads its inputs, allocates its output and has no
//! other effects, so pages may be rendered in any order and in parallel.
//!
//! The renderer trusts its input to uphold the invariants described on
//! [`Paginator`] and doesn't check them (see [`Paginator::validate`]). When
//! they are broken anyway it still doesn't panic: a previous or next control is
//! only active when both the page number and its path are present, and a link
//! to page 1 without a `previous_page_path` targets the bare base path.

use crate::config::SiteConfig;
use crate::paginator::Paginator;
use crate::path::{normalize, substitute, PLACEHOLDER};
use crate::post::Post;

/// The rendered contents of one page of the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    /// One block per post, in the paginator's order.
    pub posts: Vec<PostBlock>,

    /// The navigation controls. `None` when the listing has a single page.
    pub navigation: Option<NavBlock>,
}

/// The summary of one post within the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostBlock {
    pub title: String,

    /// The post's URL, as supplied. Both the title and the "read more" link
    /// point here.
    pub url: String,

    /// The category and tag links. `None` when the post has neither.
    pub taxonomy: Option<Taxonomy>,

    pub excerpt: String,
}

/// The taxonomy line of a [`PostBlock`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
    pub categories: Vec<Link>,

    /// Rendered after the categories, behind a tag icon, if non-empty.
    pub tags: Vec<Link>,
}

/// A labelled link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// The navigation controls for a paginated listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBlock {
    pub previous: Control,

    /// One control per page, from page 1 up to the last page.
    pub pages: Vec<PageControl>,

    pub next: Control,
}

/// A previous or next control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
    /// A navigable link to the given path.
    Active(String),

    /// A non-navigable placeholder, used on the first (previous) or last
    /// (next) page.
    Disabled,
}

impl Control {
    /// Returns the link target, if the control is navigable.
    pub fn href(&self) -> Option<&str> {
        match self {
            Control::Active(href) => Some(href),
            Control::Disabled => None,
        }
    }
}

/// A numbered page control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageControl {
    /// The inert marker for the page being rendered.
    Current(usize),

    /// A link to another page.
    Link { page: usize, href: String },
}

impl PageControl {
    /// Returns the page number displayed by the control.
    pub fn page(&self) -> usize {
        match self {
            PageControl::Current(page) => *page,
            PageControl::Link { page, .. } => *page,
        }
    }

    /// Returns the link target, or `None` for the current-page marker.
    pub fn href(&self) -> Option<&str> {
        match self {
            PageControl::Current(_) => None,
            PageControl::Link { href, .. } => Some(href),
        }
    }
}

/// Renders the post blocks and the navigation for one page.
pub fn render(paginator: &Paginator, site: &SiteConfig) -> RenderedPage {
    tracing::debug!(
        page = paginator.page,
        total_pages = paginator.total_pages,
        posts = paginator.posts.len(),
        "rendering page"
    );
    RenderedPage {
        posts: render_post_list(paginator, site),
        navigation: render_navigation(paginator, site),
    }
}

/// Renders one [`PostBlock`] per post, preserving order and count.
pub fn render_post_list(paginator: &Paginator, site: &SiteConfig) -> Vec<PostBlock> {
    paginator
        .posts
        .iter()
        .map(|post| render_post(post, site))
        .collect()
}

fn render_post(post: &Post, site: &SiteConfig) -> PostBlock {
    PostBlock {
        title: post.title.clone(),
        url: post.url.clone(),
        taxonomy: match post.has_taxonomy() {
            false => None,
            true => Some(Taxonomy {
                categories: taxonomy_links(&post.categories, &site.category_path, site),
                tags: taxonomy_links(&post.tags, &site.tag_path, site),
            }),
        },
        excerpt: post.excerpt.clone(),
    }
}

// Links each name to its anchor on the index page at `index_path`.
fn taxonomy_links(names: &[String], index_path: &str, site: &SiteConfig) -> Vec<Link> {
    names
        .iter()
        .map(|name| Link {
            label: name.clone(),
            href: normalize(
                &site.base_path,
                &format!("{}#{}", index_path, slug::slugify(name)),
            ),
        })
        .collect()
}

/// Renders the navigation controls, or `None` if the listing has at most one
/// page.
///
/// The link to page 1 targets `previous_page_path` rather than a dedicated
/// first-page path. On page 2 the two coincide; on later pages the page-1
/// control leads to the previous page.
pub fn render_navigation(paginator: &Paginator, site: &SiteConfig) -> Option<NavBlock> {
    if paginator.total_pages <= 1 {
        return None;
    }

    if !paginator.has_placeholder() {
        tracing::warn!(
            template = %paginator.paginate_path_template,
            "paginate path template has no `{}` placeholder; numbered links won't vary by page",
            PLACEHOLDER
        );
    }

    let base_path = site.base_path.as_str();
    let previous_path = paginator.previous_page_path.as_deref();

    let pages = (1..=paginator.total_pages)
        .map(|page| match page {
            p if p == paginator.page => PageControl::Current(p),
            1 => PageControl::Link {
                page: 1,
                href: normalize(base_path, previous_path.unwrap_or_default()),
            },
            p => PageControl::Link {
                page: p,
                href: normalize(base_path, &substitute(&paginator.paginate_path_template, p)),
            },
        })
        .collect();

    Some(NavBlock {
        previous: neighbour(base_path, paginator.previous_page, previous_path),
        pages,
        next: neighbour(
            base_path,
            paginator.next_page,
            paginator.next_page_path.as_deref(),
        ),
    })
}

fn neighbour(base_path: &str, page: Option<usize>, path: Option<&str>) -> Control {
    match (page, path) {
        (Some(_), Some(path)) => Control::Active(normalize(base_path, path)),
        _ => Control::Disabled,
    }
}
