// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{received_bodies, start_webhook_server, HOOK_PATH};
use chrono::{TimeZone, Utc};
use crawl_notifier::domain::models::signal::SpiderInfo;
use crawl_notifier::domain::services::message_builder::MessageBuilder;
use crawl_notifier::domain::services::notification_service::NotificationSender;
use crawl_notifier::infrastructure::services::webhook_sender_impl::WebhookSenderImpl;
use crawl_notifier::utils::errors::NotifierError;
use std::time::Duration;

#[tokio::test]
async fn test_sender_posts_json_payload() {
    let server = start_webhook_server(200).await;
    let sender = WebhookSenderImpl::new(
        &format!("{}{}", server.uri(), HOOK_PATH),
        Some(Duration::from_secs(5)),
    )
    .unwrap();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let payload = MessageBuilder::default().opened(&SpiderInfo::new("quotes"), now);

    sender.send(&payload).await.unwrap();

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], serde_json::to_value(&payload).unwrap());

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    assert!(user_agent.starts_with("Crawl-Notifier/"));
}

#[tokio::test]
async fn test_sender_reports_rejection() {
    let server = start_webhook_server(403).await;
    let sender = WebhookSenderImpl::new(&format!("{}{}", server.uri(), HOOK_PATH), None).unwrap();
    let payload = MessageBuilder::default().opened(&SpiderInfo::new("quotes"), Utc::now());

    let err = sender.send(&payload).await.unwrap_err();

    match err {
        NotifierError::Rejected { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "hook response");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_sender_reports_transport_failure() {
    // Bind and drop a listener to get a port nobody listens on
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let sender = WebhookSenderImpl::new(
        &format!("http://{}{}", addr, HOOK_PATH),
        Some(Duration::from_secs(2)),
    )
    .unwrap();
    let payload = MessageBuilder::default().opened(&SpiderInfo::new("quotes"), Utc::now());

    let err = sender.send(&payload).await.unwrap_err();

    assert!(matches!(err, NotifierError::Transport(_)));
    assert!(err.status().is_none());
}
