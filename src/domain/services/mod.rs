// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 消息构造（message_builder）：把统计快照格式化为聊天消息
/// - 通知发送（notification_service）：消息投递的抽象接口
/// - 信号管理（signal_manager）：生命周期信号的注册与派发
/// - 统计注册表（stats_collector）：按键读写爬取统计的抽象接口
pub mod message_builder;
pub mod notification_service;
pub mod signal_manager;
pub mod stats_collector;
