// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawl_notifier::application::crawler::Crawler;
use crawl_notifier::config::settings::Settings;
use crawl_notifier::utils::telemetry;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HOOK_PATH: &str = "/hooks/test";

/// 启动模拟Webhook服务端，所有POST请求返回 `status`
pub async fn start_webhook_server(status: u16) -> MockServer {
    telemetry::try_init_telemetry();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_string("hook response"))
        .mount(&server)
        .await;
    server
}

/// 创建指向模拟服务端的爬取句柄
pub fn crawler_for(webhook_url: Option<String>) -> Crawler {
    let mut settings = Settings::load_from("tests/does-not-exist").expect("load settings");
    settings.notifier.webhook_url = webhook_url;
    settings.notifier.timeout_secs = Some(5);
    Crawler::with_settings(settings)
}

/// 读取服务端收到的全部请求体
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("json body"))
        .collect()
}
