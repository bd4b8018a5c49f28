// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::stats_collector::StatsCollector;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 已抓取条目数
pub const ITEM_SCRAPED_COUNT: &str = "item_scraped_count";
/// 已发送请求数
pub const REQUEST_COUNT: &str = "downloader/request_count";
/// 已接收响应数
pub const RESPONSE_COUNT: &str = "downloader/response_count";
/// 爬虫回调异常数
pub const SPIDER_EXCEPTION_COUNT: &str = "spider_exceptions/count";
pub const START_TIME: &str = "start_time";
pub const FINISH_TIME: &str = "finish_time";
pub const FINISH_REASON: &str = "finish_reason";
pub const ELAPSED_TIME_SECONDS: &str = "elapsed_time_seconds";

/// 返回按状态码统计响应数的键
///
/// # 示例
///
/// ```
/// use crawl_notifier::domain::models::stats::response_status_key;
///
/// assert_eq!(response_status_key(404), "downloader/response_status_count/404");
/// ```
pub fn response_status_key(status: u16) -> String {
    format!("downloader/response_status_count/{}", status)
}

/// 统计值
///
/// 统计注册表中的值可以是计数、浮点数、时间戳或文本。
/// 反序列化时按声明顺序依次尝试，便于直接加载JSON格式的统计快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl StatValue {
    /// 以计数形式读取，浮点数向零截断
    pub fn as_count(&self) -> Option<i64> {
        match self {
            StatValue::Int(n) => Some(*n),
            StatValue::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    /// 以时间戳形式读取
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            StatValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Int(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

impl From<DateTime<Utc>> for StatValue {
    fn from(value: DateTime<Utc>) -> Self {
        StatValue::Timestamp(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

/// 爬取统计快照
///
/// 在信号触发时从统计注册表读取的固定字段集合。
/// 注册表中不存在的计数按0处理。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlStatsSnapshot {
    /// 已抓取条目数
    pub items_scraped: i64,
    /// 200响应数
    pub success_responses: i64,
    /// 404响应数
    pub not_found_responses: i64,
    /// 403响应数
    pub unauthorized_responses: i64,
    /// 请求总数
    pub request_count: i64,
    /// 响应总数
    pub response_count: i64,
    /// 爬取开始时间
    pub start_time: Option<DateTime<Utc>>,
}

impl CrawlStatsSnapshot {
    /// 从统计注册表收集快照
    pub fn collect(stats: &dyn StatsCollector) -> Self {
        let count = |key: &str| {
            stats
                .get_value(key)
                .and_then(|value| value.as_count())
                .unwrap_or(0)
        };

        Self {
            items_scraped: count(ITEM_SCRAPED_COUNT),
            success_responses: count(&response_status_key(200)),
            not_found_responses: count(&response_status_key(404)),
            unauthorized_responses: count(&response_status_key(403)),
            request_count: count(REQUEST_COUNT),
            response_count: count(RESPONSE_COUNT),
            start_time: stats
                .get_value(START_TIME)
                .and_then(|value| value.as_timestamp()),
        }
    }

    /// 计算从开始时间到 `now` 的耗时
    ///
    /// 没有开始时间时返回 `None`，时钟回拨时按0处理
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.start_time
            .map(|start| (now - start).max(Duration::zero()))
    }
}
