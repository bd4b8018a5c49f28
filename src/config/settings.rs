// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::BotProfile;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 旧版部署使用的Webhook环境变量
pub const LEGACY_WEBHOOK_ENV: &str = "MATTERMOST_WEBHOOK_URL";

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 通知器配置
    pub notifier: NotifierSettings,
    /// 命令行重放配置
    pub replay: ReplaySettings,
}

/// 通知器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierSettings {
    /// Webhook地址，未配置时通知器不启用
    pub webhook_url: Option<String>,
    /// 请求超时时间（秒），未配置时使用HTTP客户端默认值
    pub timeout_secs: Option<u64>,
    /// 消息中展示的机器人信息
    pub bot: BotSettings,
}

impl NotifierSettings {
    /// 返回去除空白后的Webhook地址，空字符串视为未配置
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// 机器人展示配置
#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
    pub author_name: String,
    pub author_icon: String,
    pub author_link: String,
    pub thumb_url: String,
    pub footer_icon: String,
}

impl From<&BotSettings> for BotProfile {
    fn from(settings: &BotSettings) -> Self {
        Self {
            author_name: settings.author_name.clone(),
            author_icon: settings.author_icon.clone(),
            author_link: settings.author_link.clone(),
            thumb_url: settings.thumb_url.clone(),
            footer_icon: settings.footer_icon.clone(),
        }
    }
}

/// 命令行重放配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaySettings {
    /// 重放事件使用的爬虫名称
    pub spider_name: String,
    /// 关闭事件的结束原因
    pub reason: String,
    /// 错误事件的错误信息
    pub error_message: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从 `config/` 目录和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序：默认值 → `{dir}/default` → `{dir}/{APP_ENVIRONMENT}` →
    /// `CRAWL_NOTIFIER__*` 环境变量 → `MATTERMOST_WEBHOOK_URL`
    pub fn load_from(dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let legacy_url = std::env::var(LEGACY_WEBHOOK_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty());

        let builder = Config::builder()
            // Bot defaults
            .set_default("notifier.bot.author_name", "Scrapy Bot")?
            .set_default(
                "notifier.bot.author_icon",
                "https://scrapy.org/favicons/favicon-16x16.png",
            )?
            .set_default("notifier.bot.author_link", "https://scrapy.org/")?
            .set_default(
                "notifier.bot.thumb_url",
                "https://scrapy.org/favicons/favicon-192x192.png",
            )?
            .set_default(
                "notifier.bot.footer_icon",
                "https://scrapy.org/favicons/favicon-16x16.png",
            )?
            // Replay defaults
            .set_default("replay.spider_name", "replay")?
            .set_default("replay.reason", "finished")?
            .set_default("replay.error_message", "replayed spider error")?
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, env)).required(false))
            .add_source(Environment::with_prefix("CRAWL_NOTIFIER").separator("__"))
            .set_override_option("notifier.webhook_url", legacy_url)?;

        builder.build()?.try_deserialize()
    }
}
