// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::{bail, Context};
use crawl_notifier::application::crawler::Crawler;
use crawl_notifier::application::mattermost_notifier::MattermostNotifier;
use crawl_notifier::config::settings::Settings;
use crawl_notifier::domain::models::signal::{CrawlFailure, CrawlSignal, SignalEvent, SpiderInfo};
use crawl_notifier::domain::models::stats::StatValue;
use crawl_notifier::domain::services::signal_manager::SignalManager;
use crawl_notifier::infrastructure::stats::memory_stats::MemoryStatsCollector;
use crawl_notifier::utils::telemetry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

const USAGE: &str = "usage: crawl-notifier <opened|closed|error> [stats.json]";

/// 主函数
///
/// 使用JSON统计快照重放一次生命周期事件，用于手动验证Webhook配置
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Parse arguments
    let mut args = std::env::args().skip(1);
    let signal = match args.next().as_deref() {
        Some("opened") => CrawlSignal::SpiderOpened,
        Some("closed") => CrawlSignal::SpiderClosed,
        Some("error") => CrawlSignal::SpiderError,
        _ => bail!(USAGE),
    };
    let stats_path = args.next();

    // 3. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 4. Load stats snapshot
    let stats = match &stats_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read stats file {}", path))?;
            let values: BTreeMap<String, StatValue> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse stats file {}", path))?;
            info!("Loaded {} stats from {}", values.len(), path);
            MemoryStatsCollector::with_values(values)
        }
        None => MemoryStatsCollector::new(),
    };

    let spider = SpiderInfo::new(settings.replay.spider_name.clone());
    let event = match signal {
        CrawlSignal::SpiderOpened => SignalEvent::SpiderOpened { spider },
        CrawlSignal::SpiderClosed => SignalEvent::SpiderClosed {
            spider,
            reason: settings.replay.reason.clone(),
        },
        CrawlSignal::SpiderError => SignalEvent::SpiderError {
            spider,
            failure: CrawlFailure::new(settings.replay.error_message.clone()),
            response_url: None,
        },
    };

    // 5. Install the notifier and dispatch
    let crawler = Crawler::new(
        Arc::new(settings),
        Arc::new(stats),
        Arc::new(SignalManager::new()),
    );
    if MattermostNotifier::from_crawler(&crawler)?.is_none() {
        warn!("No webhook configured, nothing to send");
        return Ok(());
    }

    crawler.signals.send_catch_log(&event).await;
    info!("Replayed {} event", signal);

    Ok(())
}
