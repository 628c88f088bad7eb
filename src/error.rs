use thiserror::Error;

// =========================================================
// 错误类别
// =========================================================

/// 错误类别
/// 对应界面上的两种提示：普通失败（警告）与会话失效（错误 + 跳转登录）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorStatus {
    /// 连接失败、DNS、TLS 等传输层错误
    Network,
    /// 超过固定超时时间
    Timeout,
    /// 非 2xx 且不是会话失效信号
    Http,
    /// 信封中的业务码不是成功码
    Business,
    /// 后端判定令牌失效
    SessionExpired,
    /// 请求体 / 响应体 JSON 处理失败
    Serialization,
    /// 会话持久化读写失败
    Storage,
    /// 客户端构建失败
    Config,
}

impl ApiErrorStatus {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorStatus::Network => "NETWORK_ERROR",
            ApiErrorStatus::Timeout => "REQUEST_TIMEOUT",
            ApiErrorStatus::Http => "HTTP_ERROR",
            ApiErrorStatus::Business => "BUSINESS_ERROR",
            ApiErrorStatus::SessionExpired => "SESSION_EXPIRED",
            ApiErrorStatus::Serialization => "JSON_PARSE_ERROR",
            ApiErrorStatus::Storage => "STORAGE_ERROR",
            ApiErrorStatus::Config => "CONFIG_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("网络错误: {0}")]
    Network(String),

    #[error("请求超时")]
    Timeout,

    #[error("请求失败，状态码 {status}")]
    Http { status: u16, body: String },

    /// 显示文本就是后端返回的 `msg`
    #[error("{msg}")]
    Envelope { code: String, msg: String },

    #[error("请重新登录")]
    SessionExpired,

    #[error("数据解析失败: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("本地存储失败: {0}")]
    Storage(#[from] std::io::Error),

    #[error("客户端配置错误: {0}")]
    Config(String),
}

impl ApiError {
    pub fn status(&self) -> ApiErrorStatus {
        match self {
            ApiError::Network(_) => ApiErrorStatus::Network,
            ApiError::Timeout => ApiErrorStatus::Timeout,
            ApiError::Http { .. } => ApiErrorStatus::Http,
            ApiError::Envelope { .. } => ApiErrorStatus::Business,
            ApiError::SessionExpired => ApiErrorStatus::SessionExpired,
            ApiError::Serialization(_) => ApiErrorStatus::Serialization,
            ApiError::Storage(_) => ApiErrorStatus::Storage,
            ApiError::Config(_) => ApiErrorStatus::Config,
        }
    }

    /// 机器可读的错误代码
    pub fn error_code(&self) -> &'static str {
        self.status().error_code()
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// 后端业务码（仅信封错误有）
    pub fn business_code(&self) -> Option<&str> {
        match self {
            ApiError::Envelope { code, .. } => Some(code),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
