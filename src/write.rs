//! Applies a template to a [`RenderedPage`] and writes the resulting markup.
//! The crate ships a default template (`theme/index.html`) producing the
//! usual listing markup: one `post-preview` block per post followed by a
//! `pagination` list whose items carry `disabled` and `active` classes. Sites
//! with their own theme can parse a template file with [`load_template`].
//!
//! Templates see the value described on [`Value::from`] for
//! [`RenderedPage`]: `posts` and `navigation`.

use crate::render::RenderedPage;
use gtmpl::{Context, Template};
use gtmpl_value::Value;
use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// The source of the built-in listing template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../theme/index.html");

/// Writes [`RenderedPage`]s as markup.
pub struct Writer<'a> {
    /// The template applied to each page.
    pub template: &'a Template,
}

impl Writer<'_> {
    /// Templates `page` and writes the result to `w`.
    pub fn write_page<W: Write>(&self, page: &RenderedPage, w: &mut W) -> Result<()> {
        tracing::debug!(
            posts = page.posts.len(),
            navigation = page.navigation.is_some(),
            "writing page"
        );
        self.template
            .execute(w, &Context::from(Value::from(page))?)?;
        Ok(())
    }

    /// Templates `page` into a string.
    pub fn page_to_string(&self, page: &RenderedPage) -> Result<String> {
        let mut out: Vec<u8> = Vec::new();
        self.write_page(page, &mut out)?;
        String::from_utf8(out).map_err(|e| Error::Template(e.to_string()))
    }

    /// Templates `page` and writes it to the file at `path`. The page is
    /// templated in full before the file is touched, so a template failure
    /// leaves any existing file as it was.
    pub fn write_file(&self, page: &RenderedPage, path: &Path) -> Result<()> {
        let html = self.page_to_string(page)?;
        std::fs::write(path, html).map_err(|e| Error::CreateOutputFile {
            path: path.to_owned(),
            err: e,
        })
    }
}

/// Parses the built-in [`DEFAULT_TEMPLATE`].
pub fn default_template() -> Result<Template> {
    parse_template(DEFAULT_TEMPLATE)
}

/// Parses template source text.
pub fn parse_template(contents: &str) -> Result<Template> {
    let mut template = Template::default();
    template.parse(contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

/// Loads and parses a template file.
pub fn load_template(path: &Path) -> Result<Template> {
    let mut contents = String::new();
    std::fs::File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|e| Error::OpenTemplateFile {
            path: path.to_owned(),
            err: e,
        })?;
    parse_template(&contents)
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while opening template files.
    OpenTemplateFile { path: PathBuf, err: io::Error },

    /// Returned for errors parsing template files.
    ParseTemplate(String),

    /// Returned for errors during templating.
    Template(String),

    /// Returned when the output file can't be written.
    CreateOutputFile { path: PathBuf, err: io::Error },

    /// Returned for errors writing the output.
    Io(io::Error),
}

impl From<io::Error> for Error {
    /// Wraps a failure writing templated markup to the output stream.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// `gtmpl` reports context and execution failures as plain messages;
    /// they become [`Error::Template`].
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl fmt::Display for Error {
    /// Describes which stage of writing a page failed.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate(err) => write!(f, "Parsing template: {}", err),
            Error::Template(err) => write!(f, "Executing template: {}", err),
            Error::CreateOutputFile { path, err } => {
                write!(f, "Writing output file '{}': {}", path.display(), err)
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Exposes the underlying I/O error, where there is one.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::ParseTemplate(_) => None,
            Error::Template(_) => None,
            Error::CreateOutputFile { path: _, err } => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}
