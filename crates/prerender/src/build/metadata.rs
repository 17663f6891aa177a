use std::{process::Termination, time::Instant};

use crate::errors::PrerenderError;

/// Metadata returned by [`prerender()`](crate::prerender) for a single page that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub route: String,
    pub file_path: String,
    /// Whether the page belongs in the sitemap: it is not the not-found page and did not ask to be left out.
    pub indexable: bool,
    /// Date of the article behind the page, if any.
    pub article_date: Option<String>,
}

/// A route that could not be rendered or written.
#[derive(Debug)]
pub struct RouteFailure {
    pub route: String,
    pub error: PrerenderError,
}

/// Metadata returned by [`prerender()`](crate::prerender) once every route was attempted.
///
/// Failed routes do not fail the build, they are listed in `failures`.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub failures: Vec<RouteFailure>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn add_page(&mut self, page: PageOutput) {
        self.pages.push(page);
    }

    pub(crate) fn add_failure(&mut self, route: String, error: PrerenderError) {
        self.failures.push(RouteFailure { route, error });
    }

    /// Number of routes that were attempted.
    pub fn attempted(&self) -> usize {
        self.pages.len() + self.failures.len()
    }
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
