//! Error types for the pre-render pipeline.
//!
//! Errors are grouped by the stage that produces them. [`TemplateError`] is fatal and aborts the run,
//! [`ContentError`] makes the route enumerator fall back to its known slugs, and [`RenderError`] /
//! [`EmitError`] only fail the route they belong to.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, thiserror only gives us Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum TemplateError {
    #[error("Failed to read HTML template: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("HTML template is missing the `{marker}` marker")]
    MissingMarker { marker: &'static str },
    #[error("HTML template contains the `{marker}` marker {count} times, expected exactly once")]
    DuplicateMarker { marker: &'static str, count: usize },
    #[error("HTML template markers are misplaced: {reason}")]
    MarkerOrder { reason: String },
}

#[derive(Error)]
pub enum ContentError {
    #[error("Invalid content pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Failed to list content files")]
    Glob(#[from] glob::GlobError),
    #[error("Failed to read content file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Slug `{slug}` is declared by both {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

#[derive(Error)]
pub enum RenderError {
    #[error("`{route}` failed to render: {message}")]
    Page { route: String, message: String },
    #[error("`{route}` panicked while rendering: {message}")]
    Panicked { route: String, message: String },
}

#[derive(Error)]
pub enum EmitError {
    #[error("Route `{route}` cannot be mapped to a file inside the output directory")]
    UnsafeRoute { route: String },
    #[error("Failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum PrerenderError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Failed to prepare output directory {path}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl_debug_for_error!(TemplateError, ContentError, RenderError, EmitError);
