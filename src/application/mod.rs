// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含爬取句柄、爬取会话和Mattermost通知扩展
pub mod crawl_session;
pub mod crawler;
pub mod mattermost_notifier;

#[cfg(test)]
mod crawl_session_test;
