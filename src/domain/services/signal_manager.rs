// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::signal::{CrawlSignal, SignalEvent};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// 信号处理器特质
#[async_trait]
pub trait SignalHandler: Send + Sync {
    /// 处理器名称，用于日志
    fn name(&self) -> &str;

    /// 处理信号事件
    async fn handle(&self, event: &SignalEvent) -> anyhow::Result<()>;
}

/// 信号管理器
///
/// 按信号类型显式注册处理器。派发时按注册顺序逐个等待处理器完成，
/// 处理器返回的错误只记录日志，不会向派发方传播。
#[derive(Default)]
pub struct SignalManager {
    handlers: RwLock<HashMap<CrawlSignal, Vec<Arc<dyn SignalHandler>>>>,
}

impl SignalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为信号注册处理器
    pub fn connect(&self, signal: CrawlSignal, handler: Arc<dyn SignalHandler>) {
        debug!(signal = %signal, handler = handler.name(), "Connecting signal handler");
        self.handlers.write().entry(signal).or_default().push(handler);
    }

    /// 移除信号的全部处理器
    pub fn disconnect_all(&self, signal: CrawlSignal) {
        self.handlers.write().remove(&signal);
    }

    /// 返回信号已注册的处理器数量
    pub fn handler_count(&self, signal: CrawlSignal) -> usize {
        self.handlers
            .read()
            .get(&signal)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// 派发信号事件并捕获处理器错误
    ///
    /// # 参数
    ///
    /// * `event` - 信号事件
    ///
    /// # 返回值
    ///
    /// 每个处理器的执行结果，顺序与注册顺序一致
    pub async fn send_catch_log(&self, event: &SignalEvent) -> Vec<anyhow::Result<()>> {
        let signal = event.signal();
        // Snapshot the handler list so the lock is not held across awaits
        let handlers = self.handlers.read().get(&signal).cloned().unwrap_or_default();

        let mut results = Vec::with_capacity(handlers.len());
        for handler in handlers {
            let result = handler.handle(event).await;
            if let Err(e) = &result {
                error!(
                    signal = %signal,
                    handler = handler.name(),
                    "Error caught on signal handler: {:#}",
                    e
                );
            }
            results.push(result);
        }
        results
    }
}
