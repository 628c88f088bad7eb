//! schand 客户端
//!
//! - `client`: 带会话的后端 API 客户端（令牌注入、信封拆解、失败提示）
//! - `api`: 各资源的业务接口
//! - `session` / `storage`: 登录身份及其持久化
//! - `route` / `router`: 路由表与带守卫的导航
//! - `news`: 外部新闻源

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod news;
pub mod notify;
pub mod request;
pub mod route;
pub mod router;
pub mod session;
pub mod storage;

pub use schand_shared as shared;

pub use api::{ChatApi, ResourceApi};
pub use client::{ApiClient, ApiClientBuilder};
pub use config::{ClientConfig, NewsConfig};
pub use error::{ApiError, ApiErrorStatus, ApiResult};
pub use news::NewsClient;
pub use notify::{Notifier, Toast, ToastLevel, ToastQueue, TracingNotifier};
pub use request::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use route::{AppRoute, ManagerPage, PersonalTab};
pub use router::{Navigation, Navigator, Router};
pub use session::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
