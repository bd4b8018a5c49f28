// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 通知（notification）：发送到聊天服务的消息负载
/// - 信号（signal）：爬取生命周期信号及其上下文
/// - 统计（stats）：统计值、统计键和统计快照
pub mod notification;
pub mod signal;
pub mod stats;
