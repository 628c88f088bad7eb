//! 运行时配置
//!
//! 所有配置项都从环境变量读取（支持 `.env`），读不到或解析失败时使用默认值。

use std::path::PathBuf;
use std::time::Duration;

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:9090";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=utf-8";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
/// 后端在令牌失效时返回的 HTTP 状态码
pub const DEFAULT_SESSION_EXPIRED_STATUS: u16 = 500;
/// 新闻代理 `/news` 转发的上游地址（已去掉前缀）
pub const DEFAULT_NEWS_BASE_URL: &str = "https://whyta.cn/api";
pub const DEFAULT_NEWS_TIMEOUT: Duration = Duration::from_millis(10000);
pub const NEWS_ACCEPT: &str = "application/json, text/plain, */*";

// =========================================================
// 环境变量名
// =========================================================

pub const ENV_BASE_URL: &str = "SCHAND_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "SCHAND_API_TIMEOUT_MS";
pub const ENV_SESSION_EXPIRED_STATUS: &str = "SCHAND_SESSION_EXPIRED_STATUS";
pub const ENV_SESSION_FILE: &str = "SCHAND_SESSION_FILE";
pub const ENV_NEWS_BASE_URL: &str = "SCHAND_NEWS_BASE_URL";
pub const ENV_NEWS_API_KEY: &str = "SCHAND_NEWS_API_KEY";

/// 外部新闻源配置
#[derive(Debug, Clone, PartialEq)]
pub struct NewsConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub api_key: Option<String>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NEWS_BASE_URL.to_string(),
            timeout: DEFAULT_NEWS_TIMEOUT,
            api_key: None,
        }
    }
}

/// API 客户端配置
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub content_type: String,
    pub timeout: Duration,
    pub session_expired_status: u16,
    /// 会话持久化文件；为 None 时会话只保存在内存中
    pub session_file: Option<PathBuf>,
    pub news: NewsConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            session_expired_status: DEFAULT_SESSION_EXPIRED_STATUS,
            session_file: None,
            news: NewsConfig::default(),
        }
    }
}

impl ClientConfig {
    /// 加载 `.env` 后从进程环境读取
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过注入的查找函数读取配置，读不到就用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            base_url: var(ENV_BASE_URL)
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            content_type: defaults.content_type,
            timeout: var(ENV_TIMEOUT_MS)
                .and_then(|v| parse_or_warn::<u64>(ENV_TIMEOUT_MS, &v))
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            session_expired_status: var(ENV_SESSION_EXPIRED_STATUS)
                .and_then(|v| parse_or_warn::<u16>(ENV_SESSION_EXPIRED_STATUS, &v))
                .unwrap_or(defaults.session_expired_status),
            session_file: var(ENV_SESSION_FILE).map(PathBuf::from),
            news: NewsConfig {
                base_url: var(ENV_NEWS_BASE_URL)
                    .map(|v| normalize_base_url(&v))
                    .unwrap_or(defaults.news.base_url),
                timeout: defaults.news.timeout,
                api_key: var(ENV_NEWS_API_KEY),
            },
        }
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// 拼接后端地址与接口路径
    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = raw, "invalid config value, using default");
            None
        }
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
