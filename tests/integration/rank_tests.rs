//! Crawl-then-rank runs against mock HTTP servers

use ripple_rank::config::Config;
use ripple_rank::crawler::{run_crawl, HttpFetcher};
use ripple_rank::output::format_ranking;
use ripple_rank::rank::{PageRank, RankConfig};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, links: &[&str]) {
    let base = server.uri();
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}{}">link</a>"#, base, link))
        .collect();

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(anchors))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_rank_after_crawl_sums_to_one() {
    let server = MockServer::start().await;
    let base = server.uri();
    let seed = format!("{}/", base);

    mount_page(&server, "/", &["/a", "/b"]).await;
    mount_page(&server, "/a", &["/b"]).await;
    mount_page(&server, "/b", &["/c", "/a"]).await;
    mount_page(&server, "/c", &["/a"]).await;

    let config = Config::default();
    let fetcher = HttpFetcher::from_config(&config.user_agent, Duration::from_secs(5))
        .expect("Failed to build HTTP client");
    let report = run_crawl(&seed, &config, Arc::new(fetcher))
        .await
        .expect("Crawl failed to start");

    let outcome = PageRank::new(RankConfig::from(&config.rank)).rank(&report.graph);

    assert_eq!(outcome.len(), 4);
    assert!((outcome.total() - 1.0).abs() < 1e-9);
    assert!(outcome.deltas().iter().all(|d| *d >= 0.0));

    // Nothing links back to the seed, so it ends with no score
    assert!(outcome.score_of(&seed).unwrap() < 1e-3);

    let lines = format_ranking(&outcome, Some(&seed));
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with("URL: ") && line.contains("|| (PageRank: ")));
}
