// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务模块
///
/// 提供通知投递接口的HTTP实现
pub mod webhook_sender_impl;
