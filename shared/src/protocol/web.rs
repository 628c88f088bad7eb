//! 登录 / 注册 / 修改密码

use super::{ApiRequest, RequestDescriptor};
use crate::{Account, UserInfo};

/// Authenticate and receive the identity with its session token.
#[derive(Debug, Clone)]
pub struct Login(pub Account);

impl ApiRequest for Login {
    type Response = UserInfo;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::post("/login").with_json(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Register(pub Account);

impl ApiRequest for Register {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::post("/register").with_json(&self.0)
    }
}

/// `Account::new_password` carries the new password.
#[derive(Debug, Clone)]
pub struct UpdatePassword(pub Account);

impl ApiRequest for UpdatePassword {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::put("/updatePassword").with_json(&self.0)
    }
}
