//! 后端 API 客户端
//!
//! 负责把接口描述变成 HTTP 请求、经过装饰器链发送、拆开 `{code, msg, data}` 信封，
//! 失败时发出提示。会话、路由、提示三个协作者都在构造时显式传入。

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::middleware::{SessionExpiryLayer, TokenLayer};
use crate::notify::{Notifier, Toast, TracingNotifier};
use crate::request::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::router::Router;
use crate::session::SessionStore;
use schand_shared::Envelope;
use schand_shared::protocol::{ApiRequest, RequestDescriptor};
use serde_json::Value;
use std::sync::Arc;

type Chain<C> = TokenLayer<SessionExpiryLayer<C>>;

pub struct ApiClient<C = ReqwestHttpClient> {
    config: Arc<ClientConfig>,
    session: SessionStore,
    router: Router,
    notifier: Arc<dyn Notifier>,
    transport: Arc<Chain<C>>,
}

impl<C> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: self.session.clone(),
            router: self.router.clone(),
            notifier: self.notifier.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl ApiClient {
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            session: None,
            router: None,
            notifier: None,
        }
    }

    /// 默认协作者：按配置恢复的会话、绑定该会话的路由、写日志的提示
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Self::builder(config).build()
    }

    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }
}

impl<C> ApiClient<C> {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// 调用一个接口，返回信封里的 `data`（按接口声明的类型解析）
    pub async fn call<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let result = match request.descriptor() {
            Ok(descriptor) => self
                .send_descriptor(descriptor)
                .await
                .and_then(|data| Ok(serde_json::from_value(data)?)),
            Err(e) => Err(e.into()),
        };
        self.report(result)
    }

    /// 调用一个接口，`data` 原样返回
    pub async fn execute(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        let result = self.send_descriptor(descriptor).await;
        self.report(result)
    }

    async fn send_descriptor(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        let req = HttpRequest::from_descriptor(&self.config.base_url, descriptor);
        tracing::debug!(method = req.method.as_str(), url = %req.url, "request");

        let resp = self.transport.send(req).await?;
        tracing::debug!(status = resp.status, "response");

        unwrap_envelope(resp)
    }

    /// 会话失效已经由装饰器提示过，这里只处理其他失败
    pub(crate) fn report<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(err) = &result {
            if !err.is_session_expired() {
                tracing::warn!(code = err.error_code(), error = %err, "request failed");
                self.notifier.notify(Toast::warning(err.to_string()));
            }
        }
        result
    }
}

fn unwrap_envelope(resp: HttpResponse) -> ApiResult<Value> {
    if !resp.is_success() {
        return Err(ApiError::Http {
            status: resp.status,
            body: resp.body,
        });
    }

    let envelope: Envelope = resp.json()?;
    if envelope.is_success() {
        Ok(envelope.data)
    } else {
        Err(ApiError::Envelope {
            msg: envelope.message(),
            code: envelope.code,
        })
    }
}

// =========================================================
// Builder
// =========================================================

pub struct ApiClientBuilder {
    config: ClientConfig,
    session: Option<SessionStore>,
    router: Option<Router>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ApiClientBuilder {
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    /// 会话失效时由它跳转登录页
    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn build(self) -> ApiResult<ApiClient> {
        let transport = ReqwestHttpClient::from_config(&self.config)?;
        Ok(self.build_with(transport))
    }

    /// 使用自定义传输层（测试时传入 mock）
    pub fn build_with<C: HttpClient>(self, transport: C) -> ApiClient<C> {
        let session = self
            .session
            .unwrap_or_else(|| SessionStore::from_config(&self.config));
        let router = self.router.unwrap_or_else(|| Router::for_session(&session));
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier));

        let expiry = SessionExpiryLayer::new(
            transport,
            self.config.session_expired_status,
            Arc::new(router.clone()),
            notifier.clone(),
        );
        let chain = TokenLayer::new(expiry, session.clone());

        ApiClient {
            config: Arc::new(self.config),
            session,
            router,
            notifier,
            transport: Arc::new(chain),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests;
