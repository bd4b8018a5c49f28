// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{crawler_for, received_bodies, start_webhook_server, HOOK_PATH};
use crawl_notifier::application::crawl_session::CrawlSession;
use crawl_notifier::application::mattermost_notifier::MattermostNotifier;
use crawl_notifier::domain::models::signal::{CrawlFailure, SpiderInfo};
use serde_json::Value;

fn titles(bodies: &[Value]) -> Vec<String> {
    bodies
        .iter()
        .map(|body| body["attachments"][0]["title"].as_str().unwrap().to_string())
        .collect()
}

fn field<'a>(body: &'a Value, title: &str) -> &'a str {
    body["attachments"][0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|field| field["title"] == title)
        .and_then(|field| field["value"].as_str())
        .unwrap_or_else(|| panic!("missing field {}", title))
}

#[tokio::test]
async fn test_crawl_lifecycle_posts_notifications_in_order() {
    let server = start_webhook_server(200).await;
    let crawler = crawler_for(Some(format!("{}{}", server.uri(), HOOK_PATH)));
    assert!(MattermostNotifier::from_crawler(&crawler).unwrap().is_some());

    let session = CrawlSession::new(crawler.clone(), SpiderInfo::new("quotes"));
    session.open().await.unwrap();
    for status in [200, 200, 200, 404, 403] {
        session.record_request().unwrap();
        session.record_response(status).unwrap();
    }
    session.record_request().unwrap();
    session.record_item().unwrap();
    session.record_item().unwrap();
    session
        .report_error(CrawlFailure::new("division by zero"), None)
        .await
        .unwrap();
    session.close("finished").await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(
        titles(&bodies),
        vec!["Spider Opened", "Spider Error", "Spider Closed"]
    );

    let error = &bodies[1];
    assert_eq!(field(error, "Error Message"), ":octagonal_sign: division by zero");

    let closed = &bodies[2];
    assert_eq!(closed["attachments"][0]["color"], "#3283a8");
    assert_eq!(closed["attachments"][0]["footer"], "quotes spider");
    assert_eq!(field(closed, "Reason"), "finished");
    assert_eq!(field(closed, "Scraped Items"), ":books: 2");
    assert_eq!(field(closed, "Success Response"), ":white_check_mark: 3");
    assert_eq!(field(closed, "Error Response"), ":octagonal_sign: 1");
    assert_eq!(field(closed, "Unauthorized Response"), ":alien: 1");
    assert_eq!(field(closed, "Number of Request"), "6");
    assert_eq!(field(closed, "Number of Response"), "5");
    assert!(field(closed, "Elapsed Time").starts_with("0:00:"));
}

#[tokio::test]
async fn test_webhook_failure_does_not_affect_crawl() {
    let server = start_webhook_server(500).await;
    let crawler = crawler_for(Some(format!("{}{}", server.uri(), HOOK_PATH)));
    MattermostNotifier::from_crawler(&crawler).unwrap();

    let session = CrawlSession::new(crawler.clone(), SpiderInfo::new("quotes"));
    assert!(session.open().await.is_ok());
    assert!(session.close("finished").await.is_ok());

    // Both notifications were attempted, none retried
    assert_eq!(received_bodies(&server).await.len(), 2);
}

#[tokio::test]
async fn test_unconfigured_notifier_makes_no_requests() {
    let server = start_webhook_server(200).await;
    let crawler = crawler_for(None);
    assert!(MattermostNotifier::from_crawler(&crawler).unwrap().is_none());

    let session = CrawlSession::new(crawler.clone(), SpiderInfo::new("quotes"));
    session.open().await.unwrap();
    session.close("finished").await.unwrap();

    assert!(received_bodies(&server).await.is_empty());
}
