//! The library code for `folio`, the post-listing and pagination renderer of a
//! static blog. The page-generation step upstream parses, sorts and slices the
//! posts; for each output page it hands over a [`paginator::Paginator`]
//! holding that page's posts and its position in the listing. From there:
//!
//! 1. [`render::render`] turns the paginator and the [`config::SiteConfig`]
//!    into a [`render::RenderedPage`]: one summary block per post and the
//!    navigation controls (previous, numbered pages, next) with their link
//!    targets ([`path`]).
//! 2. [`write::Writer`] applies a template to the rendered page and writes the
//!    markup.
//!
//! The first step is pure and deterministic. All I/O (loading configuration
//! and paginator documents, reading templates, writing output) happens around
//! it.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod paginator;
pub mod path;
pub mod post;
pub mod render;
pub mod value;
pub mod write;
