//! Defines the [`Paginator`] type, the precomputed state describing which page
//! of the post collection is being rendered, along with [`Paginator::validate`]
//! for checking the contract the page-generation step is expected to uphold.
//!
//! The renderer itself never validates its input. See [`crate::render`] for
//! how it behaves when handed a paginator that breaks these invariants.

use crate::path::PLACEHOLDER;
use crate::post::Post;
use serde::Deserialize;
use std::fmt;
use std::io::Read;

/// Pagination state for a single page of the post listing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Paginator {
    /// The posts on this page, in display order.
    #[serde(default)]
    pub posts: Vec<Post>,

    /// The current page number, starting at 1.
    pub page: usize,

    /// The number of pages in the listing.
    pub total_pages: usize,

    /// The previous page number. Present iff `page > 1`.
    #[serde(default)]
    pub previous_page: Option<usize>,

    /// The next page number. Present iff `page < total_pages`.
    #[serde(default)]
    pub next_page: Option<usize>,

    /// The site-relative path of the previous page. Present iff
    /// `previous_page` is.
    #[serde(default)]
    pub previous_page_path: Option<String>,

    /// The site-relative path of the next page. Present iff `next_page` is.
    #[serde(default)]
    pub next_page_path: Option<String>,

    /// A path pattern containing [`PLACEHOLDER`], e.g. `/blog/page:num/`, from
    /// which the path of any page is built.
    #[serde(alias = "paginate_path")]
    pub paginate_path_template: String,
}

impl Paginator {
    /// Parses a paginator document from YAML.
    pub fn from_reader<R: Read>(r: R) -> Result<Paginator> {
        Ok(serde_yaml::from_reader(r)?)
    }

    /// Checks the invariants the page-generation step guarantees. Returns the
    /// first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.total_pages < 1 {
            return Err(Error::NoPages);
        }
        if self.page < 1 || self.page > self.total_pages {
            return Err(Error::PageOutOfRange {
                page: self.page,
                total_pages: self.total_pages,
            });
        }

        let wanted_previous = match self.page > 1 {
            true => Some(self.page - 1),
            false => None,
        };
        if self.previous_page != wanted_previous {
            return Err(Error::PreviousPage {
                page: self.page,
                found: self.previous_page,
            });
        }

        let wanted_next = match self.page < self.total_pages {
            true => Some(self.page + 1),
            false => None,
        };
        if self.next_page != wanted_next {
            return Err(Error::NextPage {
                page: self.page,
                total_pages: self.total_pages,
                found: self.next_page,
            });
        }

        if self.previous_page.is_some() != self.previous_page_path.is_some() {
            return Err(Error::PreviousPagePath);
        }
        if self.next_page.is_some() != self.next_page_path.is_some() {
            return Err(Error::NextPagePath);
        }

        Ok(())
    }

    /// Returns `true` if the paginate path template contains the page number
    /// placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.paginate_path_template.contains(PLACEHOLDER)
    }
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a paginator that breaks the page-generation contract, or a
/// paginator document that could not be loaded.
#[derive(Debug)]
pub enum Error {
    /// Returned when `total_pages` is zero.
    NoPages,

    /// Returned when `page` is outside of `1..=total_pages`.
    PageOutOfRange { page: usize, total_pages: usize },

    /// Returned when `previous_page` isn't `page - 1` (or absent on page 1).
    PreviousPage { page: usize, found: Option<usize> },

    /// Returned when `next_page` isn't `page + 1` (or absent on the last
    /// page).
    NextPage {
        page: usize,
        total_pages: usize,
        found: Option<usize>,
    },

    /// Returned when exactly one of `previous_page` and `previous_page_path`
    /// is present.
    PreviousPagePath,

    /// Returned when exactly one of `next_page` and `next_page_path` is
    /// present.
    NextPagePath,

    /// Returned when a paginator document can't be deserialized.
    DeserializeYaml(serde_yaml::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NoPages => write!(f, "Paginator has no pages"),
            Error::PageOutOfRange { page, total_pages } => write!(
                f,
                "Page {} is outside of the range 1..={}",
                page, total_pages
            ),
            Error::PreviousPage { page, found } => write!(
                f,
                "Previous page on page {} is {:?}; must be {}",
                page,
                found,
                match page {
                    1 => "absent".to_owned(),
                    _ => format!("{}", page - 1),
                }
            ),
            Error::NextPage {
                page,
                total_pages,
                found,
            } => write!(
                f,
                "Next page on page {} of {} is {:?}; must be {}",
                page,
                total_pages,
                found,
                match page == total_pages {
                    true => "absent".to_owned(),
                    false => format!("{}", page + 1),
                }
            ),
            Error::PreviousPagePath => write!(
                f,
                "`previous_page_path` must be present iff `previous_page` is"
            ),
            Error::NextPagePath => {
                write!(f, "`next_page_path` must be present iff `next_page` is")
            }
            Error::DeserializeYaml(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DeserializeYaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator when loading paginator documents.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(page: usize, total_pages: usize) -> Paginator {
        Paginator {
            posts: Vec::new(),
            page,
            total_pages,
            previous_page: match page > 1 {
                true => Some(page - 1),
                false => None,
            },
            next_page: match page < total_pages {
                true => Some(page + 1),
                false => None,
            },
            previous_page_path: match page {
                1 => None,
                2 => Some("/".to_owned()),
                _ => Some(format!("/page{}/", page - 1)),
            },
            next_page_path: match page < total_pages {
                true => Some(format!("/page{}/", page + 1)),
                false => None,
            },
            paginate_path_template: "/page:num/".to_owned(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() -> Result<()> {
        for total_pages in 1..=4 {
            for page in 1..=total_pages {
                paginator(page, total_pages).validate()?;
            }
        }
        Ok(())
    }

    #[test]
    fn test_validate_rejects_zero_pages() {
        let mut p = paginator(1, 1);
        p.total_pages = 0;
        assert!(matches!(p.validate(), Err(Error::NoPages)));
    }

    #[test]
    fn test_validate_rejects_page_out_of_range() {
        let mut p = paginator(3, 3);
        p.page = 4;
        assert!(matches!(
            p.validate(),
            Err(Error::PageOutOfRange {
                page: 4,
                total_pages: 3
            })
        ));

        p.page = 0;
        assert!(matches!(p.validate(), Err(Error::PageOutOfRange { .. })));
    }

    #[test]
    fn test_validate_rejects_missing_previous_page() {
        let mut p = paginator(2, 3);
        p.previous_page = None;
        assert!(matches!(
            p.validate(),
            Err(Error::PreviousPage {
                page: 2,
                found: None
            })
        ));
    }

    #[test]
    fn test_validate_rejects_next_page_on_last_page() {
        let mut p = paginator(3, 3);
        p.next_page = Some(4);
        assert!(matches!(p.validate(), Err(Error::NextPage { .. })));
    }

    #[test]
    fn test_validate_rejects_missing_neighbour_paths() {
        let mut p = paginator(2, 3);
        p.previous_page_path = None;
        assert!(matches!(p.validate(), Err(Error::PreviousPagePath)));

        let mut p = paginator(2, 3);
        p.next_page_path = None;
        assert!(matches!(p.validate(), Err(Error::NextPagePath)));
    }

    #[test]
    fn test_from_reader() -> Result<()> {
        let document = r#"
page: 2
total_pages: 3
previous_page: 1
previous_page_path: /blog/
next_page: 3
next_page_path: /blog/page3/
paginate_path: /blog/page:num/
posts:
  - title: First
    url: /2021/01/01/first.html
    excerpt: <p>Hi</p>
    tags: [rust]
  - title: Second
    url: /2021/01/02/second.html
"#;
        let p = Paginator::from_reader(document.as_bytes())?;
        p.validate()?;
        assert_eq!(2, p.posts.len());
        assert_eq!("/blog/page:num/", p.paginate_path_template);
        assert_eq!(Some("/blog/".to_owned()), p.previous_page_path);
        assert_eq!(vec!["rust".to_owned()], p.posts[0].tags);
        assert!(p.has_placeholder());
        Ok(())
    }

    #[test]
    fn test_from_reader_rejects_missing_template() {
        let result = Paginator::from_reader("page: 1\ntotal_pages: 1\n".as_bytes());
        assert!(matches!(result, Err(Error::DeserializeYaml(_))));
    }
}
