// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stats::StatValue;
use std::collections::BTreeMap;

/// 统计注册表特质
///
/// 进程级的键值计数存储，由宿主持有，按字符串键查询。
/// 通知器只读取其中的值。
pub trait StatsCollector: Send + Sync {
    /// 读取统计值
    fn get_value(&self, key: &str) -> Option<StatValue>;

    /// 设置统计值，覆盖已有值
    fn set_value(&self, key: &str, value: StatValue);

    /// 计数加 `count`，键不存在时从0开始
    fn inc_value(&self, key: &str, count: i64);

    /// 返回全部统计值，按键排序
    fn get_stats(&self) -> BTreeMap<String, StatValue>;
}
