//! schand 客户端共享模型
//!
//! - `model`: 后端实体（商品、订单、帖子……）
//! - `protocol`: 接口声明（路径、方法、载荷、返回类型）
//! - `date`: 后端时间字符串

use serde::{Deserialize, Serialize};

pub mod date;
pub mod model;
pub mod protocol;

pub use chrono;
pub use date::ServerTime;
pub use model::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 携带会话令牌的请求头
pub const HEADER_TOKEN: &str = "token";
/// 信封中表示成功的业务码
pub const SUCCESS_CODE: &str = "200";
/// 后端分页默认值
pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// =========================================================
// 响应信封 (Envelope)
// =========================================================

/// 所有后端接口统一返回的 `{code, msg, data}` 结构
///
/// `data` 保持为原始 JSON，由调用方按接口声明的返回类型再解析。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            code: SUCCESS_CODE.to_string(),
            msg: Some("成功".to_string()),
            data,
        }
    }

    pub fn error(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            msg: Some(msg.into()),
            data: serde_json::Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// 错误消息；后端没给时退回到业务码
    pub fn message(&self) -> String {
        match &self.msg {
            Some(msg) if !msg.is_empty() => msg.clone(),
            _ => format!("请求失败 (code {})", self.code),
        }
    }
}

// =========================================================
// 分页 (Pagination)
// =========================================================

/// PageHelper 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub list: Vec<T>,
    #[serde(default)]
    pub page_num: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub pages: u32,
}

impl<T> Default for PageInfo<T> {
    fn default() -> Self {
        Self {
            total: 0,
            list: Vec::new(),
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
            pages: 0,
        }
    }
}

/// 不带过滤条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoFilter {}

/// 分页查询参数，过滤字段与页码平铺在同一层 query 中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery<F = NoFilter> {
    pub page_num: u32,
    pub page_size: u32,
    #[serde(flatten)]
    pub filter: F,
}

impl<F: Default> PageQuery<F> {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
            filter: F::default(),
        }
    }
}

impl<F> PageQuery<F> {
    pub fn filtered(page_num: u32, page_size: u32, filter: F) -> Self {
        Self {
            page_num,
            page_size,
            filter,
        }
    }

    pub fn with_filter<G>(self, filter: G) -> PageQuery<G> {
        PageQuery {
            page_num: self.page_num,
            page_size: self.page_size,
            filter,
        }
    }
}

impl<F: Default> Default for PageQuery<F> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE)
    }
}

/// 图表数据点（订单折线图 / 柱状图）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_accepts_missing_data_and_msg() {
        let env: Envelope = serde_json::from_value(json!({ "code": "200" })).unwrap();
        assert!(env.is_success());
        assert!(env.data.is_null());
    }

    #[test]
    fn envelope_message_falls_back_to_code() {
        let env: Envelope = serde_json::from_value(json!({ "code": "5001", "msg": "" })).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.message(), "请求失败 (code 5001)");
    }

    #[test]
    fn page_info_tolerates_partial_payload() {
        let page: PageInfo<i32> =
            serde_json::from_value(json!({ "total": 2, "list": [1, 2] })).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.list, vec![1, 2]);
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn page_query_flattens_filter() {
        #[derive(Serialize, Default)]
        #[serde(rename_all = "camelCase")]
        struct ByName {
            goods_name: Option<String>,
        }

        let query = PageQuery::<NoFilter>::new(2, 5).with_filter(ByName {
            goods_name: Some("书".into()),
        });
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({ "pageNum": 2, "pageSize": 5, "goodsName": "书" }));
    }
}
