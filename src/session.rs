//! 会话状态
//!
//! 当前登录身份保存在一个共享句柄里：HTTP 客户端每次请求读取令牌，
//! 登录、退出、资料更新时写入。每次修改都同步落盘，启动时恢复。

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::storage::{FileStorage, MemoryStorage, SessionStorage};
use schand_shared::UserInfo;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 持久化使用的键
pub const SESSION_KEY: &str = "user";

#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<UserInfo>>,
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    /// 从存储中恢复上次的会话；读取失败或内容损坏时从空会话开始
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let storage: Arc<dyn SessionStorage> = Arc::new(storage);
        let info = load(storage.as_ref());
        Self {
            state: Arc::new(RwLock::new(info)),
            storage,
        }
    }

    pub fn in_memory() -> Self {
        Self::restore(MemoryStorage::new())
    }

    /// 配置了会话文件就落盘，否则只保存在内存中
    pub fn from_config(config: &ClientConfig) -> Self {
        match &config.session_file {
            Some(path) => Self::restore(FileStorage::new(path)),
            None => Self::in_memory(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, UserInfo> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserInfo> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// 当前身份的快照
    pub fn current(&self) -> UserInfo {
        self.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token().is_some()
    }

    /// 整体替换当前身份
    ///
    /// 落盘失败时内存状态回退到调用前，并返回 `ApiError::Storage`。
    pub fn set(&self, info: UserInfo) -> ApiResult<()> {
        let mut state = self.write();
        let previous = std::mem::replace(&mut *state, info);
        if let Err(e) = self.persist(&state) {
            *state = previous;
            return Err(e);
        }
        Ok(())
    }

    /// 浅合并：`partial` 中出现的顶层字段覆盖当前值，其余保持不变
    pub fn patch<T: Serialize + ?Sized>(&self, partial: &T) -> ApiResult<UserInfo> {
        let patch = match serde_json::to_value(partial)? {
            Value::Object(map) => map,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(ApiError::Config(format!(
                    "session patch must be an object, got {}",
                    other
                )));
            }
        };

        let mut state = self.write();
        let mut merged = match serde_json::to_value(&*state)? {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        merged.extend(patch);

        let updated: UserInfo = serde_json::from_value(Value::Object(merged))?;
        self.persist(&updated)?;
        *state = updated.clone();
        Ok(updated)
    }

    /// 清空身份（退出登录）
    pub fn clear(&self) -> ApiResult<()> {
        let mut state = self.write();
        *state = UserInfo::default();
        self.storage.delete(SESSION_KEY)?;
        Ok(())
    }

    fn persist(&self, info: &UserInfo) -> ApiResult<()> {
        let text = serde_json::to_string(info)?;
        self.storage.set(SESSION_KEY, &text).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist session");
            ApiError::Storage(e)
        })
    }
}

fn load(storage: &dyn SessionStorage) -> UserInfo {
    let text = match storage.get(SESSION_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return UserInfo::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted session, starting empty");
            return UserInfo::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(info) => {
            tracing::debug!("session restored");
            info
        }
        Err(e) => {
            tracing::warn!(error = %e, "persisted session is corrupt, starting empty");
            UserInfo::default()
        }
    }
}
