//! 认证模块
//!
//! 登录成功后把后端返回的身份写入会话；退出时清空会话并让路由重新校验当前页面。

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;
use schand_shared::protocol::{Login, Register, Resource, Update, UpdatePassword};
use schand_shared::{Account, UserInfo};
use serde_json::{Map, Value};

/// 登录并保存身份
///
/// 失败时会话保持不变，错误原样返回。身份写不进本地存储也算登录失败。
pub async fn login<C: HttpClient>(api: &ApiClient<C>, account: Account) -> ApiResult<UserInfo> {
    let username = account.username.clone();
    let info = api.call(&Login(account)).await?;
    api.report(api.session().set(info.clone()))?;
    tracing::info!(username = %username, role = ?info.role, "logged in");
    Ok(info)
}

/// 注销并清除状态
pub fn logout<C>(api: &ApiClient<C>) -> ApiResult<()> {
    let result = api.session().clear();
    api.router().refresh_guard();
    tracing::info!("logged out");
    result
}

pub async fn register<C: HttpClient>(api: &ApiClient<C>, account: Account) -> ApiResult<()> {
    api.call(&Register(account)).await
}

pub async fn update_password<C: HttpClient>(
    api: &ApiClient<C>,
    account: Account,
) -> ApiResult<()> {
    api.call(&UpdatePassword(account)).await
}

/// 保存个人资料并把改动合并进当前会话
///
/// `profile` 是 `User` 或 `Admin`，取决于当前登录的角色。密码不进入会话。
pub async fn update_profile<C: HttpClient, T: Resource>(
    api: &ApiClient<C>,
    profile: T,
) -> ApiResult<UserInfo> {
    let request = Update(profile);
    api.call(&request).await?;

    let mut changes = match serde_json::to_value(&request.0)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    changes.remove("password");
    api.report(api.session().patch(&changes))
}
