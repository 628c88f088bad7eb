//! 外部新闻聚合接口
//!
//! 不走 `{code, msg, data}` 信封，也不携带会话令牌，
//! 只作为只读的外部数据源。

use super::RequestDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSource {
    Weibo,
    Zhihu,
    Wallstreetcn,
}

impl NewsSource {
    pub const ALL: [NewsSource; 3] = [Self::Weibo, Self::Zhihu, Self::Wallstreetcn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weibo => "weibo",
            Self::Zhihu => "zhihu",
            Self::Wallstreetcn => "wallstreetcn",
        }
    }

    /// `GET /{source}?key=...`
    pub fn descriptor(&self, api_key: Option<&str>) -> RequestDescriptor {
        let mut desc = RequestDescriptor::get(format!("/{}", self.as_str()));
        if let Some(key) = api_key {
            desc.query.push(("key".to_string(), key.to_string()));
        }
        desc
    }
}

impl fmt::Display for NewsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeed {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub updated_time: Option<i64>,
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// 各来源的 id 类型不同（字符串或数字）
    #[serde(default)]
    pub id: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub mobile_url: Option<String>,
    #[serde(default)]
    pub extra: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_is_only_sent_when_configured() {
        assert!(NewsSource::Zhihu.descriptor(None).query.is_empty());
        let desc = NewsSource::Weibo.descriptor(Some("k"));
        assert_eq!(desc.path, "/weibo");
        assert_eq!(desc.query, vec![("key".to_string(), "k".to_string())]);
    }

    #[test]
    fn feed_accepts_numeric_and_string_ids() {
        let feed: NewsFeed = serde_json::from_value(json!({
            "status": "success",
            "items": [
                { "id": 1, "title": "a" },
                { "id": "x", "title": "b", "mobileUrl": "m" }
            ]
        }))
        .unwrap();
        assert_eq!(feed.items.len(), 2);
        assert_eq!(feed.items[1].mobile_url.as_deref(), Some("m"));
    }
}
