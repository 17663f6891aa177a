use std::path::Path;

use prerender::{prerender, routes, BuildOptions, BuildOutput, SitemapOptions};

mod layout;
mod routes;
mod site;

use routes::*;

fn build_options(output_dir: &Path) -> BuildOptions {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    BuildOptions {
        base_url: Some(site::BASE_URL.to_string()),
        output_dir: output_dir.to_path_buf(),
        template_path: manifest_dir.join("index.html"),
        content_glob: manifest_dir
            .join("content/articles/*.md")
            .to_string_lossy()
            .into_owned(),
        static_routes: site::STATIC_ROUTES.iter().map(|route| route.to_string()).collect(),
        fallback_article_slugs: site::FALLBACK_ARTICLE_SLUGS
            .iter()
            .map(|slug| slug.to_string())
            .collect(),
        parallel: std::env::args().any(|arg| arg == "--parallel"),
        sitemap: SitemapOptions {
            enabled: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let output_dir = std::env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .unwrap_or_else(|| "dist/public".to_string());

    prerender(
        routes![
            Index,
            About,
            PracticeAreas,
            Articles,
            ArticlePage,
            Contact,
            PrivacyPolicy,
            TermsOfUse,
            Accessibility,
            NotFound
        ],
        &NotFound,
        build_options(Path::new(&output_dir)),
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn build(output_dir: &Path) -> BuildOutput {
        build_with(build_options(output_dir))
    }

    fn build_with(options: BuildOptions) -> BuildOutput {
        prerender(
            routes![
                Index,
                About,
                PracticeAreas,
                Articles,
                ArticlePage,
                Contact,
                PrivacyPolicy,
                TermsOfUse,
                Accessibility,
                NotFound
            ],
            &NotFound,
            options,
        )
        .unwrap()
    }

    fn read(output_dir: &Path, route: &str) -> String {
        fs::read_to_string(prerender::route_file_path(route, output_dir).unwrap()).unwrap()
    }

    #[test]
    fn test_every_page_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let output = build(dir.path());

        assert!(output.failures.is_empty(), "{:?}", output.failures);
        for route in site::STATIC_ROUTES {
            assert!(prerender::route_file_path(route, dir.path()).unwrap().exists(), "{route}");
        }
        for slug in site::FALLBACK_ARTICLE_SLUGS {
            let route = format!("/articles/{slug}");
            assert!(prerender::route_file_path(&route, dir.path()).unwrap().exists(), "{route}");
        }
    }

    #[test]
    fn test_home_page_is_merged_into_template() {
        let dir = tempfile::tempdir().unwrap();
        build(dir.path());
        let html = read(dir.path(), "/");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>עו״ד יונתן בן דוד</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://www.bdyonatan.co.il/">"#));
        assert!(html.contains(r#"<main id="main-content">"#));
        assert!(!html.contains("<!--SSR-OUTLET-->"));
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<!-- SEO:DYNAMIC:END -->"));
    }

    #[test]
    fn test_article_page_has_its_own_head() {
        let dir = tempfile::tempdir().unwrap();
        build(dir.path());
        let html = read(dir.path(), "/articles/georgia-legal-guide");

        assert!(html.contains(r#"<link rel="canonical" href="https://www.bdyonatan.co.il/articles/georgia-legal-guide">"#));
        assert!(html.contains("| עו״ד יונתן בן דוד</title>"));
        assert!(html.contains(r#""@type":"BreadcrumbList""#));
        assert!(html.contains(r#"<article class="article-content">"#));
        assert!(!html.contains("המאמר לא נמצא"));
    }

    #[test]
    fn test_unknown_article_renders_not_found_content() {
        let routes: &[&dyn prerender::route::Route] = routes![ArticlePage, NotFound];
        let router = prerender::route::Router::new(routes, &NotFound);
        let content = prerender::content::ArticleStore::empty();

        let page = prerender::route::render_route(
            &router,
            "/articles/does-not-exist",
            &content,
            &Some(site::BASE_URL.to_string()),
        )
        .unwrap();

        assert!(!page.is_fallback);
        assert!(page.noindex);
        assert!(page.body.contains("המאמר לא נמצא"));
    }

    #[test]
    fn test_sitemap_leaves_out_not_found_page() {
        let dir = tempfile::tempdir().unwrap();
        build(dir.path());
        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();

        assert!(sitemap.contains("<loc>https://www.bdyonatan.co.il/about</loc>"));
        assert!(sitemap.contains("<loc>https://www.bdyonatan.co.il/articles/due-diligence-checklist</loc>"));
        assert!(!sitemap.contains("/404"));
    }

    #[test]
    fn test_bad_article_files_do_not_hide_the_others() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("articles");
        fs::create_dir_all(&content_dir).unwrap();
        let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/articles");
        for entry in fs::read_dir(source).unwrap() {
            let path = entry.unwrap().path();
            fs::copy(&path, content_dir.join(path.file_name().unwrap())).unwrap();
        }
        fs::write(
            content_dir.join("zz-dup.md"),
            "---\nslug: georgia-legal-guide\ntitle: Duplicate\n---\nBody",
        )
        .unwrap();
        fs::write(content_dir.join("zz-bad.md"), [0xff, 0xfe]).unwrap();

        let output_dir = dir.path().join("out");
        build_with(BuildOptions {
            content_glob: content_dir.join("*.md").to_string_lossy().into_owned(),
            ..build_options(&output_dir)
        });

        for slug in site::FALLBACK_ARTICLE_SLUGS {
            let html = read(&output_dir, &format!("/articles/{slug}"));
            assert!(!html.contains("המאמר לא נמצא"), "{slug}");
            assert!(!html.contains(r#"content="noindex""#), "{slug}");
        }
        assert!(!read(&output_dir, "/articles/georgia-legal-guide").contains("<h1>Duplicate</h1>"));
        assert!(!read(&output_dir, "/articles").contains("בקרוב יעלו כאן מאמרים."));
    }
}
