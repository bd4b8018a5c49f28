// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::{Attachment, AttachmentField, BotProfile, MessagePayload};
use crate::domain::models::signal::{CrawlFailure, SpiderInfo};
use crate::domain::models::stats::CrawlStatsSnapshot;
use chrono::{DateTime, Duration, Utc};

pub const OPENED_COLOR: &str = "#008800";
pub const CLOSED_COLOR: &str = "#3283a8";
pub const ERROR_COLOR: &str = "#f44336";

/// 消息构造器
///
/// 根据爬虫信息和统计快照构造消息负载。构造过程不读取时钟，
/// 事件时间由调用方传入，相同输入总是得到相同的负载。
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    profile: BotProfile,
}

impl MessageBuilder {
    pub fn new(profile: BotProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }

    /// 构造爬虫打开消息
    pub fn opened(&self, spider: &SpiderInfo, now: DateTime<Utc>) -> MessagePayload {
        MessagePayload::single(self.attachment(
            spider,
            "spider opened",
            OPENED_COLOR,
            format!("Spider {} opened", spider.name),
            "Spider Opened",
            Vec::new(),
            now,
        ))
    }

    /// 构造爬虫关闭消息
    ///
    /// # 参数
    ///
    /// * `spider` - 爬虫信息
    /// * `reason` - 结束原因
    /// * `stats` - 统计快照
    /// * `now` - 事件时间
    pub fn closed(
        &self,
        spider: &SpiderInfo,
        reason: &str,
        stats: &CrawlStatsSnapshot,
        now: DateTime<Utc>,
    ) -> MessagePayload {
        let mut fields = vec![AttachmentField::new(false, "Reason", reason)];
        fields.extend(stats_fields(stats, now));

        MessagePayload::single(self.attachment(
            spider,
            "spider closed",
            CLOSED_COLOR,
            format!("Collected data by {}", spider.name),
            "Spider Closed",
            fields,
            now,
        ))
    }

    /// 构造爬虫错误消息
    pub fn error(
        &self,
        spider: &SpiderInfo,
        failure: &CrawlFailure,
        response_url: Option<&str>,
        stats: &CrawlStatsSnapshot,
        now: DateTime<Utc>,
    ) -> MessagePayload {
        let mut fields = vec![AttachmentField::new(
            false,
            "Error Message",
            format!(":octagonal_sign: {}", failure.message),
        )];
        fields.extend(stats_fields(stats, now));
        if let Some(url) = response_url {
            fields.push(AttachmentField::new(false, "Failed URL", url));
        }

        MessagePayload::single(self.attachment(
            spider,
            "spider error",
            ERROR_COLOR,
            format!("Collected data by {}", spider.name),
            "Spider Error",
            fields,
            now,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn attachment(
        &self,
        spider: &SpiderInfo,
        fallback: &str,
        color: &str,
        text: String,
        title: &str,
        fields: Vec<AttachmentField>,
        now: DateTime<Utc>,
    ) -> Attachment {
        Attachment {
            fallback: fallback.to_string(),
            color: color.to_string(),
            text,
            author_name: self.profile.author_name.clone(),
            author_icon: self.profile.author_icon.clone(),
            author_link: self.profile.author_link.clone(),
            thumb_url: self.profile.thumb_url.clone(),
            title: title.to_string(),
            fields,
            footer: format!("{} spider", spider.name),
            footer_icon: self.profile.footer_icon.clone(),
            ts: format_ts(now),
        }
    }
}

fn stats_fields(stats: &CrawlStatsSnapshot, now: DateTime<Utc>) -> Vec<AttachmentField> {
    let mut fields = vec![
        AttachmentField::new(
            false,
            "Scraped Items",
            format!(":books: {}", stats.items_scraped),
        ),
        AttachmentField::new(
            true,
            "Success Response",
            format!(":white_check_mark: {}", stats.success_responses),
        ),
        AttachmentField::new(
            true,
            "Error Response",
            format!(":octagonal_sign: {}", stats.not_found_responses),
        ),
        AttachmentField::new(
            false,
            "Unauthorized Response",
            format!(":alien: {}", stats.unauthorized_responses),
        ),
        AttachmentField::new(true, "Number of Request", stats.request_count.to_string()),
        AttachmentField::new(true, "Number of Response", stats.response_count.to_string()),
    ];

    if let Some(elapsed) = stats.elapsed(now) {
        fields.push(AttachmentField::new(
            true,
            "Elapsed Time",
            format_elapsed(elapsed),
        ));
    }

    fields
}

/// 格式化事件时间为 `:clock11: <Unix秒>`
///
/// 保留微秒精度，去掉小数部分末尾的0，但至少保留一位小数
pub fn format_ts(now: DateTime<Utc>) -> String {
    let micros = now.timestamp_micros();
    let seconds = micros.div_euclid(1_000_000);
    let fraction = format!("{:06}", micros.rem_euclid(1_000_000));
    let fraction = match fraction.trim_end_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };
    format!(":clock11: {}.{}", seconds, fraction)
}

/// 格式化耗时为 `H:MM:SS`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
