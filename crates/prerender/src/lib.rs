#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod content;
pub mod errors;
pub mod head;
pub mod motion;
pub mod route;
pub mod routing;
pub mod sitemap;
pub mod template;

// Exports for end-users
pub use build::emit::{route_file_path, write_route_file};
pub use build::enumerate::{enumerate_routes, PlannedRoute};
pub use build::metadata::{BuildOutput, PageOutput, RouteFailure};
pub use build::options::BuildOptions;
pub use build::prerender_route;
pub use sitemap::SitemapOptions;

mod build;
mod escape;
mod templating;

// Internal modules
mod logging;

pub use logging::{format_elapsed_time, init_logging, print_title, FormatElapsedTimeOptions};

use build::execute_build;
use route::Route;

#[macro_export]
/// Helps to define every route that should be rendered by [`prerender()`].
///
/// ## Example
/// ```rust
/// use prerender::{route::prelude::*, routes};
///
/// pub struct Index;
///
/// impl Route for Index {
///     fn route_raw(&self) -> &str {
///         "/"
///     }
///
///     fn render(&self, _ctx: &mut PageContext) -> RenderResult {
///         "Hello, world!".into()
///     }
/// }
///
/// let routes: &[&dyn Route] = routes![Index];
/// assert_eq!(routes.len(), 1);
/// ```
macro_rules! routes {
    [$($route:expr),*] => {
        &[$(&$route),*]
    };
}

/// The version of the pre-renderer being used.
///
/// Added as a `generator` meta tag to every page.
pub const GENERATOR: &str = concat!("prerender v", env!("CARGO_PKG_VERSION"));

/// Pre-render entrypoint. Renders every route into the template and writes the output files.
///
/// Individual routes that fail are logged and listed in [`BuildOutput::failures`], they do not make this
/// function fail. It only returns an error when the build cannot start: the template is missing or invalid,
/// or the output directory cannot be created.
///
/// ## Example
/// Should be called from the main function of the binary crate.
/// ```rust,no_run
/// use prerender::{prerender, route::prelude::*, routes, BuildOptions, BuildOutput};
///
/// pub struct Index;
///
/// impl Route for Index {
///     fn route_raw(&self) -> &str {
///         "/"
///     }
///
///     fn render(&self, _ctx: &mut PageContext) -> RenderResult {
///         "<h1>Hello, world!</h1>".into()
///     }
/// }
///
/// pub struct NotFound;
///
/// impl Route for NotFound {
///     fn route_raw(&self) -> &str {
///         "/404"
///     }
///
///     fn render(&self, _ctx: &mut PageContext) -> RenderResult {
///         "<h1>Not found</h1>".into()
///     }
/// }
///
/// fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
///     prerender(routes![Index], &NotFound, BuildOptions::default())
/// }
/// ```
pub fn prerender(
    routes: &[&dyn Route],
    not_found: &dyn Route,
    options: BuildOptions,
) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    init_logging();

    Ok(execute_build(routes, not_found, &options)?)
}
