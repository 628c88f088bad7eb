//! 路由服务模块 - 核心引擎
//!
//! 维护一份与浏览器 History 等价的历史栈，实现"请求 -> 验证 -> 加载"的导航流程。
//! 认证状态由外部注入，路由本身不依赖会话实现。

use crate::route::AppRoute;
use crate::session::SessionStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// HTTP 层在会话失效时用来强制跳转登录页
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// 一次导航的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Entered(AppRoute),
    /// 目标需要登录，被守卫改到了登录页
    Redirected { requested: AppRoute, to: AppRoute },
}

impl Navigation {
    /// 最终停留的路由
    pub fn route(&self) -> &AppRoute {
        match self {
            Navigation::Entered(route) => route,
            Navigation::Redirected { to, .. } => to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}

#[derive(Debug)]
struct RouterState {
    /// 历史栈，最后一项是当前页面；永远不为空
    history: Vec<AppRoute>,
    scroll_top: u32,
}

type AuthCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// 路由器服务
///
/// 克隆出的句柄共享同一份历史栈。
#[derive(Clone)]
pub struct Router {
    state: Arc<Mutex<RouterState>>,
    /// 认证状态检查（注入，实现解耦）
    is_authenticated: AuthCheck,
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("state", &*self.state())
            .finish_non_exhaustive()
    }
}

impl Router {
    /// 创建新的路由服务，初始停在首页
    pub fn new(is_authenticated: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(RouterState {
                history: vec![AppRoute::default()],
                scroll_top: 0,
            })),
            is_authenticated: Arc::new(is_authenticated),
        }
    }

    /// 以会话的登录状态作为守卫依据
    pub fn for_session(session: &SessionStore) -> Self {
        let session = session.clone();
        Self::new(move || session.is_authenticated())
    }

    fn state(&self) -> MutexGuard<'_, RouterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> AppRoute {
        self.state().history.last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<AppRoute> {
        self.state().history.clone()
    }

    pub fn scroll_top(&self) -> u32 {
        self.state().scroll_top
    }

    /// 界面滚动时回写位置
    pub fn set_scroll_top(&self, top: u32) {
        self.state().scroll_top = top;
    }

    /// **核心方法：导航与守卫**（pushState）
    pub fn navigate(&self, path: &str) -> Navigation {
        self.navigate_to_route(AppRoute::from_path(path), true)
    }

    /// 替换当前历史项（replaceState）
    pub fn replace(&self, path: &str) -> Navigation {
        self.navigate_to_route(AppRoute::from_path(path), false)
    }

    /// 导航到指定路由
    ///
    /// `use_push` 为 true 时压栈，否则替换栈顶。
    pub fn navigate_to_route(&self, target: AppRoute, use_push: bool) -> Navigation {
        let outcome = self.guard(target);
        let mut state = self.state();
        let route = outcome.route().clone();
        if use_push {
            state.history.push(route);
        } else if let Some(top) = state.history.last_mut() {
            *top = route;
        }
        state.scroll_top = 0;
        outcome
    }

    /// 后退一步，目标页面重新经过守卫
    ///
    /// 已在历史栈底时返回 None。
    pub fn back(&self) -> Option<Navigation> {
        let target = {
            let mut state = self.state();
            if state.history.len() < 2 {
                return None;
            }
            state.history.pop();
            state.history.last().cloned().unwrap_or_default()
        };
        Some(self.navigate_to_route(target, false))
    }

    /// 认证状态变化后（如退出登录）重新校验当前页面
    pub fn refresh_guard(&self) -> Navigation {
        self.navigate_to_route(self.current(), false)
    }

    fn guard(&self, target: AppRoute) -> Navigation {
        if target.requires_auth() && !(self.is_authenticated)() {
            let to = AppRoute::auth_failure_redirect();
            tracing::info!(
                requested = %target,
                redirect = %to,
                "access denied, redirecting to login"
            );
            return Navigation::Redirected {
                requested: target,
                to,
            };
        }
        tracing::debug!(route = %target, "navigate");
        Navigation::Entered(target)
    }
}

impl Navigator for Router {
    fn redirect_to_login(&self) {
        self.navigate_to_route(AppRoute::auth_failure_redirect(), false);
    }
}
