// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 爬取生命周期信号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlSignal {
    /// 爬虫已打开
    SpiderOpened,
    /// 爬虫已关闭
    SpiderClosed,
    /// 爬虫回调出错
    SpiderError,
}

impl CrawlSignal {
    pub const ALL: [CrawlSignal; 3] = [
        CrawlSignal::SpiderOpened,
        CrawlSignal::SpiderClosed,
        CrawlSignal::SpiderError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlSignal::SpiderOpened => "spider_opened",
            CrawlSignal::SpiderClosed => "spider_closed",
            CrawlSignal::SpiderError => "spider_error",
        }
    }
}

impl fmt::Display for CrawlSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 爬虫信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiderInfo {
    /// 爬虫名称
    pub name: String,
}

impl SpiderInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 爬取失败信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlFailure {
    /// 错误信息
    pub message: String,
    /// 错误类型名称（可选）
    pub kind: Option<String>,
}

impl CrawlFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl fmt::Display for CrawlFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{}: {}", kind, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// 信号事件
///
/// 每个信号携带各自的上下文：爬虫信息、结束原因或失败对象。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalEvent {
    SpiderOpened {
        spider: SpiderInfo,
    },
    SpiderClosed {
        spider: SpiderInfo,
        reason: String,
    },
    SpiderError {
        spider: SpiderInfo,
        failure: CrawlFailure,
        /// 触发错误的响应地址
        response_url: Option<String>,
    },
}

impl SignalEvent {
    /// 返回事件对应的信号
    pub fn signal(&self) -> CrawlSignal {
        match self {
            SignalEvent::SpiderOpened { .. } => CrawlSignal::SpiderOpened,
            SignalEvent::SpiderClosed { .. } => CrawlSignal::SpiderClosed,
            SignalEvent::SpiderError { .. } => CrawlSignal::SpiderError,
        }
    }

    pub fn spider(&self) -> &SpiderInfo {
        match self {
            SignalEvent::SpiderOpened { spider }
            | SignalEvent::SpiderClosed { spider, .. }
            | SignalEvent::SpiderError { spider, .. } => spider,
        }
    }
}
