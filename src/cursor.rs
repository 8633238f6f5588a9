// src/cursor.rs

use crate::models::SortKey;
use dashmap::DashMap;
use log::debug;

/// 每种排序方式一个分页游标。空字符串表示从头开始。
///
/// 按 key 分片存储，不同排序方式的并发请求互不覆盖。
pub struct CursorTable {
    cursors: DashMap<SortKey, String>,
}

impl Default for CursorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTable {
    pub fn new() -> Self {
        let cursors = DashMap::new();
        for key in SortKey::ALL {
            cursors.insert(key, String::new());
        }
        Self { cursors }
    }

    pub fn cursor_for(&self, key: SortKey) -> String {
        self.cursors
            .get(&key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn reset_if_first_page(&self, key: SortKey, page: u32) {
        if page == 1 {
            debug!("请求 {} 的第一页，重置游标", key);
            self.cursors.insert(key, String::new());
        }
    }

    /// 推进到本页最后一项的 id；空页会把游标清空
    pub fn advance(&self, key: SortKey, last_item_id: Option<&str>) {
        let next = last_item_id.unwrap_or_default().to_string();
        debug!("游标 {} -> '{}'", key, next);
        self.cursors.insert(key, next);
    }
}
