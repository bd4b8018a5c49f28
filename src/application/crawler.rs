// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::signal_manager::SignalManager;
use crate::domain::services::stats_collector::StatsCollector;
use crate::infrastructure::stats::memory_stats::MemoryStatsCollector;
use std::sync::Arc;

/// 爬取进程句柄
///
/// 扩展通过它读取配置、访问统计注册表并注册信号处理器。
#[derive(Clone)]
pub struct Crawler {
    pub settings: Arc<Settings>,
    pub stats: Arc<dyn StatsCollector>,
    pub signals: Arc<SignalManager>,
}

impl Crawler {
    pub fn new(
        settings: Arc<Settings>,
        stats: Arc<dyn StatsCollector>,
        signals: Arc<SignalManager>,
    ) -> Self {
        Self {
            settings,
            stats,
            signals,
        }
    }

    /// 使用内存统计注册表和新的信号管理器创建句柄
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(
            Arc::new(settings),
            Arc::new(MemoryStatsCollector::new()),
            Arc::new(SignalManager::new()),
        )
    }
}
