// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：信号、统计和消息的数据结构
/// - 服务（services）：消息构造、信号派发以及统计和投递的抽象接口
///
/// 领域层不依赖任何具体的HTTP或存储实现。
pub mod models;
pub mod services;
