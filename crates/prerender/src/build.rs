use std::{fs, time::Instant};

use colored::{ColoredString, Colorize};
use log::{error, info, warn};
use rayon::prelude::*;

use crate::{
    build::{
        emit::{route_file_path, write_route_file},
        enumerate::{enumerate_routes, PlannedRoute},
    },
    content::ArticleStore,
    errors::PrerenderError,
    logging::{format_elapsed_time, print_title, FormatElapsedTimeOptions},
    route::{render_route, Route, Router},
    routing::RoutePattern,
    sitemap::{generate_sitemap, SitemapEntry},
    template::Template,
    BuildOptions, BuildOutput, PageOutput,
};

pub mod emit;
pub mod enumerate;
pub mod metadata;
pub mod options;

pub fn execute_build(
    routes: &[&dyn Route],
    not_found: &dyn Route,
    options: &BuildOptions,
) -> Result<BuildOutput, PrerenderError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    let section_format_options = FormatElapsedTimeOptions::section();

    // Read before anything is written, the template may live in the output directory.
    let template = Template::load(&options.template_path)?;
    info!(target: "build", "Template: {}", options.template_path.display());

    print_title("loading articles");
    let content_start = Instant::now();
    let content = match ArticleStore::load(&options.content_glob) {
        Ok(store) => {
            info!(target: "content", "{}", format!("{} articles loaded in {}", store.len(), format_elapsed_time(content_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());
            if !store.skipped().is_empty() {
                warn!(target: "content", "{} documents skipped, the remaining articles are still published", store.skipped().len());
            }
            Some(store)
        }
        Err(err) => {
            warn!(target: "content", "{}, falling back to {} known article slugs", err, options.fallback_article_slugs.len());
            None
        }
    };

    let planned = enumerate_routes(
        &options.static_routes,
        &RoutePattern::parse(&options.article_route),
        content.as_ref(),
        &options.fallback_article_slugs,
    );
    let content = content.unwrap_or_default();

    fs::create_dir_all(&options.output_dir).map_err(|source| PrerenderError::OutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    print_title("generating pages");
    let pages_start = Instant::now();
    info!(target: "routes", "Pre-rendering {} routes", planned.len());

    let router = Router::new(routes, not_found);
    let render = |route: &PlannedRoute| {
        prerender_route(&router, &template, &content, route, options)
            .map_err(|err| (route.path.clone(), err))
    };

    let results: Vec<Result<PageOutput, (String, PrerenderError)>> = if options.parallel {
        planned.par_iter().map(render).collect()
    } else {
        planned.iter().map(render).collect()
    };

    for result in results {
        match result {
            Ok(page) => build_metadata.add_page(page),
            Err((route, err)) => build_metadata.add_failure(route, err),
        }
    }

    info!(target: "pages", "{}", format!("generated {} of {} pages in {}", build_metadata.pages.len(), build_metadata.attempted(), format_elapsed_time(pages_start.elapsed(), &section_format_options)).bold());
    if !build_metadata.failures.is_empty() {
        warn!(target: "pages", "{} pages failed", build_metadata.failures.len());
    }

    if options.sitemap.enabled {
        match &options.base_url {
            Some(base_url) => {
                print_title("generating sitemap");
                let entries = build_metadata
                    .pages
                    .iter()
                    .filter(|page| page.indexable)
                    .map(|page| SitemapEntry::new(base_url, &page.route, page.article_date.as_deref()))
                    .collect();

                if let Err(err) = generate_sitemap(entries, &options.output_dir, &options.sitemap) {
                    error!(target: "sitemap", "{}", err);
                }
            }
            None => {
                warn!(target: "sitemap", "Sitemap is enabled but no base_url is set, skipping");
            }
        }
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "build", "{}", format!("Build completed in {}", format_elapsed_time(build_start.elapsed(), &section_format_options)).bold());

    Ok(build_metadata)
}

/// Renders, merges and writes one route. Logs the outcome either way.
pub fn prerender_route(
    router: &Router,
    template: &Template,
    content: &ArticleStore,
    route: &PlannedRoute,
    options: &BuildOptions,
) -> Result<PageOutput, PrerenderError> {
    let route_start = Instant::now();
    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let result = write_page(router, template, content, route, options);

    match &result {
        Ok(page) => {
            info!(target: "pages", "{} -> {} {}", page.route, page.file_path.dimmed(), format_elapsed_time(route_start.elapsed(), &route_format_options));
        }
        Err(err) => {
            error!(target: "pages", "{} {}", route.path.red(), err);
        }
    }

    result
}

fn write_page(
    router: &Router,
    template: &Template,
    content: &ArticleStore,
    route: &PlannedRoute,
    options: &BuildOptions,
) -> Result<PageOutput, PrerenderError> {
    let file_path = route_file_path(&route.path, &options.output_dir)?;
    let page = render_route(router, &route.path, content, &options.base_url)?;
    write_route_file(&template.merge(&page), &file_path)?;

    Ok(PageOutput {
        route: page.route,
        file_path: file_path.to_string_lossy().to_string(),
        indexable: !page.is_fallback && !page.noindex,
        article_date: route.article_date.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{PageContext, RenderResult};
    use crate::sitemap::SitemapOptions;
    use std::path::Path;

    const TEMPLATE: &str = "<html><head><!-- SEO:DYNAMIC:START --><title>Default</title><!-- SEO:DYNAMIC:END --></head><body><div id=\"root\"><!--SSR-OUTLET--></div></body></html>";

    struct Page(&'static str);

    impl Route for Page {
        fn route_raw(&self) -> &str {
            self.0
        }

        fn render(&self, ctx: &mut PageContext) -> RenderResult {
            ctx.head.title(format!("Title of {}", ctx.current_path));
            format!("<main>{}</main>", ctx.current_path).into()
        }
    }

    struct ArticlePage;

    impl Route for ArticlePage {
        fn route_raw(&self) -> &str {
            "/articles/[slug]"
        }

        fn render(&self, ctx: &mut PageContext) -> RenderResult {
            let slug = ctx.param("slug").unwrap_or_default();
            match ctx.content.by_slug(slug) {
                Some(article) => format!("<article>{}</article>", article.title).into(),
                None if slug == "broken" => {
                    let result: Result<String, Box<dyn std::error::Error>> =
                        Err("cannot render".into());
                    result.into()
                }
                None => {
                    ctx.head.meta(&[("name", "robots"), ("content", "noindex")]);
                    "<h1>not found</h1>".into()
                }
            }
        }
    }

    struct NotFound;

    impl Route for NotFound {
        fn route_raw(&self) -> &str {
            "/404"
        }

        fn render(&self, _ctx: &mut PageContext) -> RenderResult {
            "<h1>not found</h1>".into()
        }
    }

    static HOME: Page = Page("/");
    static ABOUT: Page = Page("/about");

    fn setup(dir: &Path) -> BuildOptions {
        let content_dir = dir.join("content");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(
            content_dir.join("a.md"),
            "---\nslug: first\ntitle: First\ndate: 2026-01-01\n---\nBody",
        )
        .unwrap();

        let template_path = dir.join("index.html");
        fs::write(&template_path, TEMPLATE).unwrap();

        BuildOptions {
            output_dir: dir.join("out"),
            template_path,
            content_glob: format!("{}/*.md", content_dir.display()),
            static_routes: vec!["/".to_string(), "/about".to_string()],
            ..Default::default()
        }
    }

    fn output_files(dir: &Path) -> Vec<String> {
        let mut files: Vec<String> = glob::glob(&format!("{}/**/*", dir.display()))
            .unwrap()
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .map(|path| path.strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_two_static_routes_produce_two_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            static_routes: vec!["/".to_string(), "/about".to_string()],
            content_glob: format!("{}/none/*.md", dir.path().display()),
            ..setup(dir.path())
        };

        let output = execute_build(&[&HOME, &ABOUT], &NotFound, &options).unwrap();

        assert_eq!(output_files(&options.output_dir), vec!["about/index.html", "index.html"]);
        assert_eq!(output.pages.len(), 2);
        assert!(output.failures.is_empty());

        let about = fs::read_to_string(options.output_dir.join("about/index.html")).unwrap();
        assert!(about.contains("<title>Title of /about</title>"));
        assert!(about.contains("<div id=\"root\"><main>/about</main></div>"));
        assert!(!about.contains("<!--SSR-OUTLET-->"));
    }

    #[test]
    fn test_article_routes_are_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let options = setup(dir.path());

        let output = execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &options).unwrap();

        assert_eq!(
            output_files(&options.output_dir),
            vec!["about/index.html", "articles/first/index.html", "index.html"]
        );
        let article = fs::read_to_string(options.output_dir.join("articles/first/index.html")).unwrap();
        assert!(article.contains("<article>First</article>"));
        assert_eq!(output.pages[2].article_date.as_deref(), Some("2026-01-01"));
    }

    #[test]
    fn test_failures_do_not_stop_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            static_routes: vec![
                "/".to_string(),
                "/articles/broken".to_string(),
                "/articles/..".to_string(),
                "/articles/missing".to_string(),
            ],
            ..setup(dir.path())
        };

        let output = execute_build(&[&HOME, &ArticlePage], &NotFound, &options).unwrap();

        assert_eq!(output.attempted(), 5);
        assert_eq!(output.failures.len(), 2);
        assert_eq!(output.failures[0].route, "/articles/broken");
        assert!(matches!(output.failures[1].error, PrerenderError::Emit(_)));

        let missing = fs::read_to_string(options.output_dir.join("articles/missing/index.html")).unwrap();
        assert!(missing.contains("not found"));
        assert!(options.output_dir.join("articles/first/index.html").exists());
    }

    #[test]
    fn test_fallback_slugs_on_invalid_content_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            fallback_article_slugs: vec!["known".to_string()],
            content_glob: format!("{}/content/[*.md", dir.path().display()),
            ..setup(dir.path())
        };

        let output = execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &options).unwrap();

        let routes: Vec<&str> = output.pages.iter().map(|page| page.route.as_str()).collect();
        assert_eq!(routes, vec!["/", "/about", "/articles/known"]);
    }

    #[test]
    fn test_bad_documents_do_not_hide_other_articles() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            fallback_article_slugs: vec!["known".to_string()],
            ..setup(dir.path())
        };
        fs::write(
            dir.path().join("content/b.md"),
            "---\nslug: second\ntitle: Second\ndate: 2025-06-01\n---\nBody",
        )
        .unwrap();
        fs::write(
            dir.path().join("content/zz-dup.md"),
            "---\nslug: first\ntitle: Again\n---\nBody",
        )
        .unwrap();
        fs::write(dir.path().join("content/zz-bad.md"), [0xff, 0xfe]).unwrap();

        let output = execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &options).unwrap();

        let routes: Vec<&str> = output.pages.iter().map(|page| page.route.as_str()).collect();
        assert_eq!(routes, vec!["/", "/about", "/articles/first", "/articles/second"]);
        assert!(output.failures.is_empty());

        let first = fs::read_to_string(options.output_dir.join("articles/first/index.html")).unwrap();
        assert!(first.contains("<article>First</article>"));
        let second = fs::read_to_string(options.output_dir.join("articles/second/index.html")).unwrap();
        assert!(second.contains("<article>Second</article>"));
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let sequential = setup(dir.path());
        let parallel = BuildOptions {
            output_dir: dir.path().join("out-parallel"),
            parallel: true,
            ..sequential.clone()
        };

        let a = execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &sequential).unwrap();
        let b = execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &parallel).unwrap();

        let routes = |output: &BuildOutput| -> Vec<String> {
            output.pages.iter().map(|page| page.route.clone()).collect()
        };
        assert_eq!(routes(&a), routes(&b));
        for file in output_files(&sequential.output_dir) {
            assert_eq!(
                fs::read_to_string(sequential.output_dir.join(&file)).unwrap(),
                fs::read_to_string(parallel.output_dir.join(&file)).unwrap()
            );
        }
    }

    #[test]
    fn test_sitemap_skips_not_found_pages() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            base_url: Some("https://www.example.com".to_string()),
            static_routes: vec!["/".to_string(), "/nowhere".to_string()],
            sitemap: SitemapOptions {
                enabled: true,
                ..Default::default()
            },
            ..setup(dir.path())
        };

        execute_build(&[&HOME, &ArticlePage], &NotFound, &options).unwrap();

        let sitemap = fs::read_to_string(options.output_dir.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://www.example.com/</loc>"));
        assert!(sitemap.contains("<loc>https://www.example.com/articles/first</loc><lastmod>2026-01-01</lastmod>"));
        assert!(!sitemap.contains("nowhere"));
    }

    #[test]
    fn test_rebuild_into_same_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let options = setup(dir.path());

        execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &options).unwrap();
        let first = fs::read_to_string(options.output_dir.join("index.html")).unwrap();
        let output = execute_build(&[&HOME, &ABOUT, &ArticlePage], &NotFound, &options).unwrap();

        assert!(output.failures.is_empty());
        assert_eq!(
            output_files(&options.output_dir),
            vec!["about/index.html", "articles/first/index.html", "index.html"]
        );
        assert_eq!(fs::read_to_string(options.output_dir.join("index.html")).unwrap(), first);
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            template_path: dir.path().join("missing.html"),
            ..setup(dir.path())
        };

        assert!(matches!(
            execute_build(&[&HOME], &NotFound, &options),
            Err(PrerenderError::Template(_))
        ));
        assert!(!options.output_dir.exists());
    }
}
