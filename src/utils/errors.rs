// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 通知错误类型
#[derive(Error, Debug)]
pub enum NotifierError {
    /// 网络层失败（连接、超时等）
    #[error("Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 服务端返回非2xx状态码
    #[error("Webhook rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 配置的Webhook地址无法解析
    #[error("无效的Webhook地址 {url}: {reason}")]
    InvalidWebhookUrl { url: String, reason: String },
}

impl NotifierError {
    /// 返回服务端响应的状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            NotifierError::Transport(e) => e.status().map(|s| s.as_u16()),
            NotifierError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 爬取会话错误类型
///
/// 会话状态转换遵循以下流程：
/// Created → Opened → Closed
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("会话尚未打开")]
    NotOpened,

    #[error("会话已经打开")]
    AlreadyOpened,

    #[error("会话已经关闭")]
    AlreadyClosed,
}
