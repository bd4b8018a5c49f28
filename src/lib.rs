// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含爬取会话和通知扩展
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含信号、统计和消息模型以及相关服务接口
pub mod domain;

/// 基础设施模块
///
/// 提供HTTP投递和内存统计等具体实现
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型和遥测初始化
pub mod utils;
