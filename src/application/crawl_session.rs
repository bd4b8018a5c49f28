// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::crawler::Crawler;
use crate::domain::models::signal::{CrawlFailure, SignalEvent, SpiderInfo};
use crate::domain::models::stats::{
    self, response_status_key, StatValue, ELAPSED_TIME_SECONDS, FINISH_REASON, FINISH_TIME,
    START_TIME,
};
use chrono::Utc;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::utils::errors::SessionError;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Created,
    Opened,
    Closed,
}

/// 爬取会话
///
/// 驱动一次爬取的生命周期：记录统计并按顺序派发信号。
/// 打开信号在每次会话中只派发一次，并且一定早于关闭和错误信号。
pub struct CrawlSession {
    crawler: Crawler,
    spider: SpiderInfo,
    state: Mutex<SessionState>,
}

impl CrawlSession {
    pub fn new(crawler: Crawler, spider: SpiderInfo) -> Self {
        Self {
            crawler,
            spider,
            state: Mutex::new(SessionState::Created),
        }
    }

    pub fn spider(&self) -> &SpiderInfo {
        &self.spider
    }

    pub fn state(&self) -> SessionState {
        *self.state.lock()
    }

    /// 打开会话，记录开始时间并派发打开信号
    pub async fn open(&self) -> Result<(), SessionError> {
        self.transition(SessionState::Created, SessionState::Opened)?;

        self.crawler
            .stats
            .set_value(START_TIME, StatValue::Timestamp(Utc::now()));
        info!(spider = %self.spider.name, "Crawl session opened");

        self.crawler
            .signals
            .send_catch_log(&SignalEvent::SpiderOpened {
                spider: self.spider.clone(),
            })
            .await;
        Ok(())
    }

    /// 记录一次已发送的请求
    pub fn record_request(&self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.crawler.stats.inc_value(stats::REQUEST_COUNT, 1);
        Ok(())
    }

    /// 记录一次收到的响应
    pub fn record_response(&self, status: u16) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.crawler.stats.inc_value(stats::RESPONSE_COUNT, 1);
        self.crawler.stats.inc_value(&response_status_key(status), 1);
        Ok(())
    }

    /// 记录一个已抓取的条目
    pub fn record_item(&self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.crawler.stats.inc_value(stats::ITEM_SCRAPED_COUNT, 1);
        Ok(())
    }

    /// 报告爬虫错误并派发错误信号
    pub async fn report_error(
        &self,
        failure: CrawlFailure,
        response_url: Option<String>,
    ) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.crawler.stats.inc_value(stats::SPIDER_EXCEPTION_COUNT, 1);
        debug!(spider = %self.spider.name, "Spider error: {}", failure);

        self.crawler
            .signals
            .send_catch_log(&SignalEvent::SpiderError {
                spider: self.spider.clone(),
                failure,
                response_url,
            })
            .await;
        Ok(())
    }

    /// 关闭会话，记录结束统计并派发关闭信号
    pub async fn close(&self, reason: &str) -> Result<(), SessionError> {
        self.transition(SessionState::Opened, SessionState::Closed)?;

        let finish_time = Utc::now();
        let registry = &self.crawler.stats;
        registry.set_value(FINISH_TIME, StatValue::Timestamp(finish_time));
        registry.set_value(FINISH_REASON, StatValue::from(reason));
        if let Some(start) = registry.get_value(START_TIME).and_then(|v| v.as_timestamp()) {
            let elapsed = (finish_time - start).num_milliseconds() as f64 / 1000.0;
            registry.set_value(ELAPSED_TIME_SECONDS, StatValue::Float(elapsed));
        }
        info!(spider = %self.spider.name, reason = reason, "Crawl session closed");

        self.crawler
            .signals
            .send_catch_log(&SignalEvent::SpiderClosed {
                spider: self.spider.clone(),
                reason: reason.to_string(),
            })
            .await;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        match *self.state.lock() {
            SessionState::Opened => Ok(()),
            SessionState::Created => Err(SessionError::NotOpened),
            SessionState::Closed => Err(SessionError::AlreadyClosed),
        }
    }

    fn transition(&self, from: SessionState, to: SessionState) -> Result<(), SessionError> {
        let mut state = self.state.lock();
        if *state != from {
            return Err(match *state {
                SessionState::Closed => SessionError::AlreadyClosed,
                SessionState::Opened => SessionError::AlreadyOpened,
                SessionState::Created => SessionError::NotOpened,
            });
        }
        *state = to;
        Ok(())
    }
}
