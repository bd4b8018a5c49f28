// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::MessagePayload;
use crate::domain::services::notification_service::NotificationSender;
use crate::utils::errors::NotifierError;
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("Crawl-Notifier/", env!("CARGO_PKG_VERSION"));

/// Webhook发送实现
pub struct WebhookSenderImpl {
    /// HTTP 客户端
    client: Client,
    /// 目标地址
    webhook_url: Url,
}

impl WebhookSenderImpl {
    /// 创建新的 Webhook 发送实现
    ///
    /// # 参数
    ///
    /// * `webhook_url` - Webhook地址
    /// * `timeout` - 请求超时，`None` 时使用客户端默认值
    ///
    /// # 返回值
    ///
    /// * `Ok(WebhookSenderImpl)` - 创建成功
    /// * `Err(NotifierError)` - 地址无效或客户端创建失败
    pub fn new(webhook_url: &str, timeout: Option<Duration>) -> Result<Self, NotifierError> {
        let webhook_url = parse_webhook_url(webhook_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(USER_AGENT),
        );
        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            webhook_url,
        })
    }
}

/// 校验Webhook地址，只接受 http 和 https
pub fn parse_webhook_url(raw: &str) -> Result<Url, NotifierError> {
    let invalid = |reason: String| NotifierError::InvalidWebhookUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[async_trait]
impl NotificationSender for WebhookSenderImpl {
    async fn send(&self, payload: &MessagePayload) -> Result<(), NotifierError> {
        let body = serde_json::to_vec(payload)?;

        let response = self
            .client
            .post(self.webhook_url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(NotifierError::Rejected { status, body })
        }
    }
}
