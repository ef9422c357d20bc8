//! Shared fixtures for the integration tests

use bookfinder::catalog::Catalog;
use bookfinder::config::{FetchConfig, SiteConfig};
use mockito::{Matcher, Mock, ServerGuard};
use std::time::Duration;

/// A listing entry as rendered by the search page
#[allow(dead_code)]
pub fn listing_entry(id: &str, title: &str, author: &str) -> String {
    format!(
        r#"<div class="h-[125px]">
  <a href="/md5/{id}" class="js-vim-focus custom-a flex items-center">
    <div class="flex-none"><img src="/covers/{id}.jpg"></div>
    <div class="relative top-[-1] pl-4 grow overflow-hidden">
      <div class="line-clamp-[2] text-xs text-gray-500">English [en], epub, 1.2MB</div>
      <div class="line-clamp-[2] font-bold text-lg">{title}</div>
      <div class="line-clamp-[2] italic">{author}</div>
    </div>
  </a>
</div>"#
    )
}

/// A full listing page around the given entries
#[allow(dead_code)]
pub fn listing_page(entries: &[String], with_next: bool) -> String {
    let next = if with_next {
        r#"<a href="/search?page=2" class="custom-a">Next</a>"#
    } else {
        ""
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>Search - Anna's Archive</title></head>
<body>
  <nav><a href="/">Home</a><a href="/search">Search</a></nav>
  <main>{}</main>
  <div class="pagination"><a href="/search?page=1">Previous</a>{next}</div>
</body>
</html>"#,
        entries.join("\n")
    )
}

/// `count` well-formed entries with ids `00..0{n}`
#[allow(dead_code)]
pub fn numbered_entries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            listing_entry(
                &format!("{i:032x}"),
                &format!("Harry Potter {i}"),
                "J.K. Rowling",
            )
        })
        .collect()
}

/// A detail page; `None` leaves the piece out of the markup
#[allow(dead_code)]
pub fn detail_page(
    title: Option<&str>,
    cover_src: Option<&str>,
    description: Option<&str>,
    downloads: &[(&str, &str)],
) -> String {
    let title = title.map(|t| format!("<h1>{t}</h1>")).unwrap_or_default();
    let cover = cover_src
        .map(|src| format!(r#"<img class="w-full rounded" src="{src}">"#))
        .unwrap_or_default();
    let description = description
        .map(|d| format!(r#"<div class="js-md5-search-result-description text-sm">{d}</div>"#))
        .unwrap_or_default();
    let downloads = downloads
        .iter()
        .map(|(href, text)| format!(r#"<li><a class="js-download-link" href="{href}">{text}</a></li>"#))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<!DOCTYPE html>
<html><body>
  <div class="main">{cover}{title}{description}</div>
  <ul class="downloads">{downloads}</ul>
  <a class="js-download-link" href="/slow_download/abc/0/0">Slow partner server</a>
</body></html>"#
    )
}

/// Catalog pointed at a mock server with a short timeout
#[allow(dead_code)]
pub fn mock_catalog(server: &ServerGuard) -> Catalog {
    let site = SiteConfig::new(&server.url()).expect("Mock server URL should be valid");
    let fetch = FetchConfig {
        timeout: Duration::from_secs(5),
        ..Default::default()
    };
    Catalog::new(site, &fetch).expect("Catalog should build")
}

/// Mock the listing endpoint for `query`/`page`
#[allow(dead_code)]
pub async fn mock_search(
    server: &mut ServerGuard,
    query: &str,
    page: u32,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), query.into()),
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("sort".into(), "relevant".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

/// Mock the detail endpoint for `id`
#[allow(dead_code)]
pub async fn mock_detail(server: &mut ServerGuard, id: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", format!("/md5/{id}").as_str())
        .with_status(status)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}
