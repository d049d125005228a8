//! HTTP 处理器模块

use serde::Deserialize;

pub mod auth;
pub mod event;
pub mod group;
pub mod health;
pub mod notification;
pub mod participant;
pub mod room;
pub mod status;
pub mod user;

/// 列表查询参数（limit/offset 分页）
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 100);
        assert_eq!(query.offset, 0);
    }
}
