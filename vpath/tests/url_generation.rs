//! Integration tests for URL generation.
//!
//! URLs are built from the position of an existing target below the root,
//! with an optional base URL in front and the query string carried over.

mod common;

use common::Site;
use vpath::{Mode, PathResolver, StaticBaseUrl};

fn assets_site() -> (Site, PathResolver) {
    let site = Site::new();
    site.file("assets/file.txt");
    site.file("assets/css/app.css");

    let mut resolver = site.resolver();
    resolver
        .set("default", [site.path("assets")], Mode::Prepend)
        .unwrap();
    (site, resolver)
}

#[test]
fn test_relative_and_full_urls() {
    let (_site, resolver) = assets_site();

    assert_eq!(
        resolver.url("default:file.txt", false).unwrap().as_deref(),
        Some("/assets/file.txt")
    );
    assert_eq!(
        resolver.url("default:file.txt", true).unwrap().as_deref(),
        Some("http://localhost/assets/file.txt")
    );
}

#[test]
fn test_query_string_is_preserved() {
    let (_site, resolver) = assets_site();

    assert_eq!(
        resolver
            .url("default:css/app.css?v=3&x=y", false)
            .unwrap()
            .as_deref(),
        Some("/assets/css/app.css?v=3&x=y")
    );
}

#[test]
fn test_real_paths_are_accepted() {
    let (site, resolver) = assets_site();

    assert_eq!(
        resolver
            .url(&site.path("assets/file.txt"), false)
            .unwrap()
            .as_deref(),
        Some("/assets/file.txt")
    );
}

#[test]
fn test_missing_targets_have_no_url() {
    let (site, resolver) = assets_site();

    assert_eq!(resolver.url("default:missing.txt", false).unwrap(), None);
    assert_eq!(resolver.url("unknown:file.txt", true).unwrap(), None);
    assert_eq!(resolver.url(site.root(), false).unwrap(), None);
}

#[test]
fn test_targets_outside_root_have_no_url() {
    let outside = Site::new();
    outside.file("shared/file.txt");
    let (_site, mut resolver) = assets_site();

    resolver
        .set("shared", [outside.path("shared")], Mode::Prepend)
        .unwrap();

    assert!(resolver.get("shared:file.txt").unwrap().is_some());
    assert_eq!(resolver.url("shared:file.txt", false).unwrap(), None);
}

#[test]
fn test_custom_base_url_providers() {
    let (site, resolver) = assets_site();

    let with_prefix = resolver.with_base_url(StaticBaseUrl::new("https://cdn.example.com/static/").unwrap());
    assert_eq!(
        with_prefix.url("default:file.txt", true).unwrap().as_deref(),
        Some("https://cdn.example.com/static/assets/file.txt")
    );

    let dynamic = site
        .resolver()
        .with_base_url(|| "https://tenant.example.com".to_string());
    assert_eq!(
        dynamic
            .url(&site.path("assets/css/app.css"), true)
            .unwrap()
            .as_deref(),
        Some("https://tenant.example.com/assets/css/app.css")
    );
}
