//! 请求装饰器
//!
//! 每一层都实现 `HttpClient` 并包裹内层：
//! `TokenLayer<SessionExpiryLayer<Transport>>`。
//! 请求由外向内经过，响应由内向外返回。

use crate::error::{ApiError, ApiResult};
use crate::notify::{Notifier, Toast};
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::router::Navigator;
use crate::session::SessionStore;
use schand_shared::HEADER_TOKEN;
use std::sync::Arc;

/// 会话失效时给用户的提示
pub const RELOGIN_MESSAGE: &str = "请重新登录";

// =========================================================
// 令牌注入
// =========================================================

/// 发送前读取会话，有非空令牌时写入 `token` 请求头
pub struct TokenLayer<C> {
    inner: C,
    session: SessionStore,
}

impl<C> TokenLayer<C> {
    pub fn new(inner: C, session: SessionStore) -> Self {
        Self { inner, session }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<C: HttpClient> HttpClient for TokenLayer<C> {
    async fn send(&self, mut req: HttpRequest) -> ApiResult<HttpResponse> {
        if let Some(token) = self.session.token() {
            req.headers.insert(HEADER_TOKEN.to_string(), token);
        }
        self.inner.send(req).await
    }
}

// =========================================================
// 会话失效处理
// =========================================================

/// 识别后端的会话失效信号
///
/// 命中时：替换式跳转登录页一次、发出错误提示、以 `SessionExpired` 结束这次请求。
pub struct SessionExpiryLayer<C> {
    inner: C,
    expired_status: u16,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl<C> SessionExpiryLayer<C> {
    pub fn new(
        inner: C,
        expired_status: u16,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            inner,
            expired_status,
            navigator,
            notifier,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait::async_trait]
impl<C: HttpClient> HttpClient for SessionExpiryLayer<C> {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let url = req.url.clone();
        let resp = self.inner.send(req).await?;

        if resp.status == self.expired_status {
            tracing::warn!(
                url = %url,
                status = resp.status,
                "session expired, redirecting to login"
            );
            self.navigator.redirect_to_login();
            self.notifier.notify(Toast::error(RELOGIN_MESSAGE));
            return Err(ApiError::SessionExpired);
        }
        Ok(resp)
    }
}
