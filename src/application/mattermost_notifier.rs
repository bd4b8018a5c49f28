// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::crawler::Crawler;
use crate::domain::models::notification::{BotProfile, MessagePayload};
use crate::domain::models::signal::{CrawlSignal, SignalEvent};
use crate::domain::models::stats::CrawlStatsSnapshot;
use crate::domain::services::message_builder::MessageBuilder;
use crate::domain::services::notification_service::NotificationSender;
use crate::domain::services::signal_manager::SignalHandler;
use crate::domain::services::stats_collector::StatsCollector;
use crate::infrastructure::services::webhook_sender_impl::WebhookSenderImpl;
use crate::utils::errors::NotifierError;
use async_trait::async_trait;
use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Mattermost通知器
///
/// 监听爬虫的打开、关闭和错误信号，读取统计注册表，
/// 把统计结果作为附件消息发送到Webhook。
/// 投递失败只记录警告，不影响爬取过程。
pub struct MattermostNotifier {
    /// 统计注册表
    stats: Arc<dyn StatsCollector>,
    /// 消息发送器
    sender: Arc<dyn NotificationSender>,
    /// 消息构造器
    builder: MessageBuilder,
}

impl MattermostNotifier {
    /// 创建新的通知器实例
    pub fn new(
        stats: Arc<dyn StatsCollector>,
        sender: Arc<dyn NotificationSender>,
        profile: BotProfile,
    ) -> Self {
        Self {
            stats,
            sender,
            builder: MessageBuilder::new(profile),
        }
    }

    /// 根据爬取句柄创建通知器并注册信号
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(notifier))` - 已启用并注册到三个信号
    /// * `Ok(None)` - 未配置Webhook地址，通知器不启用
    /// * `Err(NotifierError)` - Webhook地址无效
    pub fn from_crawler(crawler: &Crawler) -> Result<Option<Arc<Self>>, NotifierError> {
        let settings = &crawler.settings.notifier;
        let Some(webhook_url) = settings.webhook_url() else {
            info!("Mattermost notifier disabled: notifier.webhook_url is not set");
            return Ok(None);
        };

        let sender = WebhookSenderImpl::new(
            webhook_url,
            settings.timeout_secs.map(Duration::from_secs),
        )?;
        let notifier = Arc::new(Self::new(
            crawler.stats.clone(),
            Arc::new(sender),
            BotProfile::from(&settings.bot),
        ));

        notifier.connect(crawler);
        info!("Mattermost notifier enabled");
        Ok(Some(notifier))
    }

    /// 注册到全部生命周期信号
    pub fn connect(self: &Arc<Self>, crawler: &Crawler) {
        for signal in CrawlSignal::ALL {
            crawler
                .signals
                .connect(signal, self.clone() as Arc<dyn SignalHandler>);
        }
    }

    /// 构造事件对应的消息负载
    pub fn build_payload(&self, event: &SignalEvent) -> MessagePayload {
        let now = Utc::now();
        match event {
            SignalEvent::SpiderOpened { spider } => self.builder.opened(spider, now),
            SignalEvent::SpiderClosed { spider, reason } => {
                let snapshot = CrawlStatsSnapshot::collect(self.stats.as_ref());
                self.builder.closed(spider, reason, &snapshot, now)
            }
            SignalEvent::SpiderError {
                spider,
                failure,
                response_url,
            } => {
                let snapshot = CrawlStatsSnapshot::collect(self.stats.as_ref());
                self.builder
                    .error(spider, failure, response_url.as_deref(), &snapshot, now)
            }
        }
    }

    async fn deliver(&self, signal: CrawlSignal, spider: &str, payload: &MessagePayload) {
        match self.sender.send(payload).await {
            Ok(()) => {
                counter!("notifications_sent_total", "signal" => signal.as_str()).increment(1);
            }
            Err(e) => {
                warn!(
                    signal = %signal,
                    spider = spider,
                    status = ?e.status(),
                    "Mattermost request failed: {}",
                    e
                );
                counter!("notifications_failed_total", "signal" => signal.as_str()).increment(1);
            }
        }
    }
}

#[async_trait]
impl SignalHandler for MattermostNotifier {
    fn name(&self) -> &str {
        "mattermost_notifier"
    }

    async fn handle(&self, event: &SignalEvent) -> anyhow::Result<()> {
        let spider = event.spider();
        if let SignalEvent::SpiderOpened { .. } = event {
            info!("Spider opened: {}", spider.name);
        }

        let payload = self.build_payload(event);
        self.deliver(event.signal(), &spider.name, &payload).await;
        Ok(())
    }
}
