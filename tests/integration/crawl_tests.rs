//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! HTTP fetcher through full crawls.

use ripple_rank::config::Config;
use ripple_rank::crawler::{run_crawl, CrawlReport, HttpFetcher, PageStatus};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given budget and pool width
fn create_test_config(budget: usize, workers: usize) -> Config {
    let mut config = Config::default();
    config.crawler.link_budget = budget;
    config.crawler.worker_pool_width = workers;
    config.crawler.fetch_timeout_secs = 5;
    config.user_agent.crawler_name = "TestBot".to_string();
    config.user_agent.crawler_version = "1.0.0".to_string();
    config
}

async fn mount_page(server: &MockServer, route: &str, links: &[&str]) {
    let base = server.uri();
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}{}">link</a>"#, base, link))
        .collect();

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><body>{}</body></html>", anchors))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn crawl(server: &MockServer, config: &Config) -> CrawlReport {
    let fetcher = HttpFetcher::from_config(&config.user_agent, Duration::from_secs(5))
        .expect("Failed to build HTTP client");
    run_crawl(&format!("{}/", server.uri()), config, Arc::new(fetcher))
        .await
        .expect("Crawl failed to start")
}

#[tokio::test]
async fn test_full_crawl_single_host() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/", &["/page1", "/page2"]).await;
    mount_page(&server, "/page1", &["/page2", "/"]).await;
    mount_page(&server, "/page2", &[]).await;

    let report = crawl(&server, &create_test_config(10, 5)).await;

    assert_eq!(
        report.discovered,
        vec![
            format!("{}/", base),
            format!("{}/page1", base),
            format!("{}/page2", base),
        ]
    );
    assert_eq!(report.stats.count(PageStatus::Crawled), 3);
    assert_eq!(
        report.graph.outbound_of(&format!("{}/page1", base)),
        &[format!("{}/page2", base), format!("{}/", base)]
    );
    assert_eq!(report.graph.edge_count(), 4);
    assert!(!report.graph.is_pending(&format!("{}/page2", base)));
}

#[tokio::test]
async fn test_robots_disallowed_page_is_never_fetched() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, "User-agent: *\nDisallow: /private").await;
    mount_page(&server, "/", &["/private", "/public"]).await;
    mount_page(&server, "/public", &[]).await;

    Mock::given(method("GET"))
        .and(path("/private"))
        .respond_with(ResponseTemplate::new(200).set_body_string("secret"))
        .expect(0)
        .mount(&server)
        .await;

    let report = crawl(&server, &create_test_config(10, 5)).await;

    // Disallowed pages are still discovered, just not fetched
    assert!(report.discovered.contains(&format!("{}/private", base)));
    assert_eq!(report.stats.count(PageStatus::RobotsDenied), 1);
    assert_eq!(report.stats.count(PageStatus::Crawled), 2);
    assert!(report.graph.outbound_of(&format!("{}/private", base)).is_empty());
}

#[tokio::test]
async fn test_robots_txt_fetched_once_per_host() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(1)
        .mount(&server)
        .await;

    mount_page(&server, "/", &["/a", "/b", "/c", "/d"]).await;
    for route in ["/a", "/b", "/c", "/d"] {
        mount_page(&server, route, &["/"]).await;
    }

    let report = crawl(&server, &create_test_config(10, 4)).await;

    assert_eq!(report.discovered.len(), 5);
    assert_eq!(report.stats.robots_fetches, 1);
}

#[tokio::test]
async fn test_missing_robots_txt_allows_everything() {
    let server = MockServer::start().await;

    // No robots.txt mock: wiremock answers 404
    mount_page(&server, "/", &["/a"]).await;
    mount_page(&server, "/a", &[]).await;

    let report = crawl(&server, &create_test_config(10, 2)).await;

    assert_eq!(report.stats.count(PageStatus::Crawled), 2);
    assert_eq!(report.stats.count(PageStatus::RobotsDenied), 0);
}

#[tokio::test]
async fn test_server_error_leaves_dangling_page() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/", &["/broken", "/ok"]).await;
    mount_page(&server, "/ok", &["/"]).await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let report = crawl(&server, &create_test_config(10, 5)).await;
    let broken = format!("{}/broken", base);

    assert!(report.discovered.contains(&broken));
    assert_eq!(report.stats.count(PageStatus::FetchFailed), 1);
    assert!(report.graph.outbound_of(&broken).is_empty());
    assert!(!report.graph.is_pending(&broken));
}

#[tokio::test]
async fn test_budget_caps_discovery() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, "User-agent: *\nAllow: /").await;
    mount_page(&server, "/", &["/p1", "/p2", "/p3", "/p4", "/p5"]).await;
    for route in ["/p1", "/p2"] {
        mount_page(&server, route, &[]).await;
    }
    for route in ["/p3", "/p4", "/p5"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let report = crawl(&server, &create_test_config(3, 5)).await;

    assert_eq!(
        report.discovered,
        vec![
            format!("{}/", base),
            format!("{}/p1", base),
            format!("{}/p2", base),
        ]
    );
    assert_eq!(report.stats.links_dropped, 3);
    // Edges only point at pages that made it into the graph
    assert_eq!(report.graph.outbound_of(&format!("{}/", base)).len(), 2);
}
