// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 服务实现（services）：基于reqwest的Webhook投递
/// - 统计（stats）：基于内存的统计注册表
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知具体实现。
pub mod services;
pub mod stats;
