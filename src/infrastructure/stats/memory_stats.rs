// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stats::StatValue;
use crate::domain::services::stats_collector::StatsCollector;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// 内存统计注册表
#[derive(Debug, Default)]
pub struct MemoryStatsCollector {
    values: DashMap<String, StatValue>,
}

impl MemoryStatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有的统计值创建注册表
    pub fn with_values(values: impl IntoIterator<Item = (String, StatValue)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// 清空全部统计值
    pub fn clear(&self) {
        self.values.clear();
    }
}

impl StatsCollector for MemoryStatsCollector {
    fn get_value(&self, key: &str) -> Option<StatValue> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    fn set_value(&self, key: &str, value: StatValue) {
        self.values.insert(key.to_string(), value);
    }

    fn inc_value(&self, key: &str, count: i64) {
        self.values
            .entry(key.to_string())
            .and_modify(|value| {
                *value = match value {
                    StatValue::Int(n) => StatValue::Int(n.saturating_add(count)),
                    StatValue::Float(f) => StatValue::Float(*f + count as f64),
                    // Non-numeric values are replaced by the increment
                    _ => StatValue::Int(count),
                }
            })
            .or_insert(StatValue::Int(count));
    }

    fn get_stats(&self) -> BTreeMap<String, StatValue> {
        self.values
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}
