// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::MessagePayload;
use crate::utils::errors::NotifierError;
use async_trait::async_trait;

/// 通知发送特质
///
/// 定义聊天消息投递的核心逻辑
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// 发送消息
    ///
    /// # 参数
    ///
    /// * `payload` - 消息负载
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 服务端返回2xx
    /// * `Err(NotifierError)` - 网络失败或服务端拒绝
    async fn send(&self, payload: &MessagePayload) -> Result<(), NotifierError>;
}
