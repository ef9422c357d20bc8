//! # Detail Parser Tests

mod common;

use bookfinder::config::SiteConfig;
use bookfinder::detail_parser::parse_detail;
use bookfinder::models::{DownloadLink, NO_DESCRIPTION, TITLE_NOT_FOUND};
use common::detail_page;
use pretty_assertions::assert_eq;

#[test]
fn test_complete_detail_page() {
    let html = detail_page(
        Some("Harry Potter and the Philosopher's Stone"),
        Some("/covers/hp1.jpg"),
        Some("The boy who lived."),
        &[
            ("https://downloads.annas-archive.org/fast/hp1.epub", "EPUB (1.2MB)"),
            ("https://downloads.annas-archive.org/fast/hp1.pdf", " PDF (3.4MB) "),
        ],
    );

    let detail = parse_detail(&html, &SiteConfig::default());
    assert_eq!(detail.title, "Harry Potter and the Philosopher's Stone");
    assert_eq!(detail.cover_url, "https://annas-archive.org/covers/hp1.jpg");
    assert_eq!(detail.description, "The boy who lived.");
    assert_eq!(
        detail.download_links,
        vec![
            DownloadLink {
                format: "EPUB".to_string(),
                url: "https://downloads.annas-archive.org/fast/hp1.epub".to_string(),
            },
            DownloadLink {
                format: "PDF".to_string(),
                url: "https://downloads.annas-archive.org/fast/hp1.pdf".to_string(),
            },
        ]
    );
}

#[test]
fn test_only_download_host_links_survive() {
    let html = detail_page(
        Some("Dune"),
        None,
        None,
        &[
            ("https://ads.example.com/win", "MOBI (free!)"),
            ("https://downloads.annas-archive.org/d/dune.epub", "EPUB"),
            ("http://downloads.annas-archive.org.attacker.net/x", "PDF"),
            ("https://libgen.example/dune.azw3", "AZW3"),
        ],
    );

    let site = SiteConfig::default();
    let detail = parse_detail(&html, &site);
    assert_eq!(detail.download_links.len(), 1);
    for link in &detail.download_links {
        let url = url::Url::parse(&link.url).unwrap();
        assert_eq!(url.host_str(), Some(site.download_host.as_str()));
    }
}

#[test]
fn test_missing_pieces_fall_back() {
    let html = detail_page(None, None, None, &[]);
    let detail = parse_detail(&html, &SiteConfig::default());
    assert_eq!(detail.title, TITLE_NOT_FOUND);
    assert_eq!(detail.cover_url, "");
    assert_eq!(detail.description, "No hay descripción disponible.");
    assert_eq!(detail.description, NO_DESCRIPTION);
    assert!(detail.download_links.is_empty());
}

#[test]
fn test_custom_download_host() {
    let site = SiteConfig {
        download_host: "files.mirror.test".to_string(),
        ..Default::default()
    };
    let html = detail_page(
        Some("Emma"),
        None,
        None,
        &[
            ("https://downloads.annas-archive.org/emma.epub", "EPUB"),
            ("https://files.mirror.test/emma.txt", "TXT (plain)"),
        ],
    );
    let detail = parse_detail(&html, &site);
    assert_eq!(detail.download_links.len(), 1);
    assert_eq!(detail.download_links[0].format, "TXT");
}
