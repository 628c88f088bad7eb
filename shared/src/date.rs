//! 时间类型模块
//!
//! 后端所有时间字段都以 `yyyy-MM-dd HH:mm:ss` 字符串传输。
//! `ServerTime` 原样保存该字符串，需要计算时再按需解析为 `NaiveDateTime`，
//! 这样即使后端偶尔返回其他格式，反序列化也不会失败。

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 后端时间字段的格式
pub const SERVER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =========================================================
// ServerTime - 可传输的时间字符串
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ServerTime(String);

impl ServerTime {
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// 按后端格式生成时间字符串
    pub fn from_naive(time: NaiveDateTime) -> Self {
        Self(time.format(SERVER_TIME_FORMAT).to_string())
    }

    /// 获取原始字符串
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 解析为 `NaiveDateTime`
    ///
    /// 同时接受仅有日期的 `yyyy-MM-dd`（视为当天零点），
    /// 其他格式返回 None
    pub fn parse(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        NaiveDateTime::parse_from_str(raw, SERVER_TIME_FORMAT)
            .ok()
            .or_else(|| {
                chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

impl From<&str> for ServerTime {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ServerTime {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<NaiveDateTime> for ServerTime {
    fn from(time: NaiveDateTime) -> Self {
        Self::from_naive(time)
    }
}

impl fmt::Display for ServerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
