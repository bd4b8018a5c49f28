// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 聊天消息负载
///
/// 对应Mattermost的附件消息格式，每个事件构造一次，不做持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub attachments: Vec<Attachment>,
}

impl MessagePayload {
    pub fn single(attachment: Attachment) -> Self {
        Self {
            attachments: vec![attachment],
        }
    }
}

/// 消息附件
///
/// 字段按声明顺序序列化，保证相同输入得到相同的JSON。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// 不支持附件的客户端显示的纯文本
    pub fallback: String,
    /// 左侧色条颜色
    pub color: String,
    pub text: String,
    pub author_name: String,
    pub author_icon: String,
    pub author_link: String,
    pub thumb_url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    pub footer: String,
    pub footer_icon: String,
    /// 事件时间
    pub ts: String,
}

/// 附件字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    /// 是否与相邻字段并排显示
    pub short: bool,
    pub title: String,
    pub value: String,
}

impl AttachmentField {
    pub fn new(short: bool, title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            short,
            title: title.into(),
            value: value.into(),
        }
    }
}

/// 机器人展示信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotProfile {
    pub author_name: String,
    pub author_icon: String,
    pub author_link: String,
    pub thumb_url: String,
    pub footer_icon: String,
}

impl Default for BotProfile {
    fn default() -> Self {
        Self {
            author_name: "Scrapy Bot".to_string(),
            author_icon: "https://scrapy.org/favicons/favicon-16x16.png".to_string(),
            author_link: "https://scrapy.org/".to_string(),
            thumb_url: "https://scrapy.org/favicons/favicon-192x192.png".to_string(),
            footer_icon: "https://scrapy.org/favicons/favicon-16x16.png".to_string(),
        }
    }
}
