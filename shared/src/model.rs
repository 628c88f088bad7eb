//! 领域模型 (Domain Models)
//!
//! 后端实体字段几乎全部可空：新增时只填必填项，更新时只传改动的字段，
//! 查询时实体本身又充当过滤条件。因此实体统一由 `entity!` 生成，
//! 所有字段为 `Option`，序列化时跳过 `None`。

use crate::ServerTime;
use serde::{Deserialize, Serialize};

macro_rules! entity {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }
    };
}

// =========================================================
// 账号 (Accounts)
// =========================================================

/// 账号角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
    /// 后端新增而客户端不认识的角色
    #[serde(other)]
    Unknown,
}

/// 登录后的用户身份
///
/// 除已知字段外，后端额外返回的字段原样保存在 `extra` 中，
/// 这样资料更新后的浅合并与持久化都不会丢字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserInfo {
    /// 非空令牌
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 登录 / 注册 / 修改密码的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

entity!(
    /// 普通用户
    User {
        id: i64,
        username: String,
        password: String,
        name: String,
        phone: String,
        email: String,
        avatar: String,
        role: Role,
        token: String,
    }
);

entity!(
    /// 管理员
    Admin {
        id: i64,
        username: String,
        password: String,
        name: String,
        phone: String,
        email: String,
        avatar: String,
        role: Role,
        token: String,
    }
);

// =========================================================
// 交易 (Market)
// =========================================================

entity!(
    /// 二手商品
    Goods {
        id: i64,
        name: String,
        price: f64,
        content: String,
        address: String,
        img: String,
        date: ServerTime,
        /// 审核状态
        status: String,
        category: String,
        user_id: i64,
        /// 上架状态
        sale_status: String,
        read_count: i64,
        user_name: String,
        sort: String,
        user_likes: bool,
        user_collect: bool,
        likes_count: i64,
        collect_count: i64,
    }
);

entity!(
    /// 订单
    Orders {
        id: i64,
        goods_name: String,
        goods_img: String,
        order_no: String,
        total: f64,
        time: ServerTime,
        pay_no: String,
        pay_time: ServerTime,
        user_id: i64,
        address: String,
        phone: String,
        user_name: String,
        status: String,
        sale_id: i64,
        goods_id: i64,
        address_id: i64,
        user: String,
        sale_name: String,
    }
);

entity!(
    /// 求购（悬赏）
    Help {
        id: i64,
        title: String,
        content: String,
        img: String,
        time: ServerTime,
        solved: String,
        status: String,
        user_id: i64,
        user_name: String,
        avatar: String,
    }
);

entity!(
    /// 收货地址
    Address {
        id: i64,
        name: String,
        address: String,
        phone: String,
        user_id: i64,
        user_name: String,
    }
);

entity!(
    /// 商品分类
    Category {
        id: i64,
        name: String,
    }
);

entity!(
    /// 收藏
    Collect {
        id: i64,
        fid: i64,
        user_id: i64,
        module: String,
        goods_name: String,
        goods_img: String,
    }
);

entity!(
    /// 点赞
    Likes {
        id: i64,
        fid: i64,
        user_id: i64,
        module: String,
    }
);

// =========================================================
// 社区 (Community)
// =========================================================

entity!(
    /// 帖子
    Posts {
        id: i64,
        title: String,
        img: String,
        descr: String,
        content: String,
        time: ServerTime,
        user_id: i64,
        user_name: String,
        circle: String,
        read_count: i64,
        status: String,
    }
);

entity!(
    /// 圈子
    Circles {
        id: i64,
        name: String,
        img: String,
    }
);

entity!(
    /// 公告
    Notice {
        id: i64,
        title: String,
        content: String,
        time: ServerTime,
        user: String,
    }
);

entity!(
    /// 意见反馈
    Feedback {
        id: i64,
        title: String,
        content: String,
        user_id: i64,
        user_name: String,
        phone: String,
        email: String,
        reply: String,
        #[serde(rename = "createtime")]
        create_time: ServerTime,
    }
);

/// 评论（树形结构，`children` 为回复）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<ServerTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Comment>,
}

// =========================================================
// 聊天 (Chat)
// =========================================================

entity!(
    /// 聊天消息
    ChatInfo {
        id: i64,
        chat_user_id: i64,
        user_id: i64,
        text: String,
        is_read: String,
        time: ServerTime,
        chat_user_name: String,
        chat_user_avatar: String,
        user_name: String,
        user_avatar: String,
    }
);

entity!(
    /// 聊天会话
    ChatGroup {
        id: i64,
        chat_user_id: i64,
        user_id: i64,
        chat_user_name: String,
        chat_user_avatar: String,
        user_name: String,
        user_avatar: String,
        unread: i64,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_skips_unset_fields() {
        let goods = Goods {
            id: Some(7),
            name: Some("旧台灯".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&goods).unwrap(),
            json!({ "id": 7, "name": "旧台灯" })
        );
    }

    #[test]
    fn entity_reads_camel_case_fields() {
        let order: Orders = serde_json::from_value(json!({
            "id": 1,
            "orderNo": "NO1",
            "saleId": 3,
            "payTime": null
        }))
        .unwrap();
        assert_eq!(order.order_no.as_deref(), Some("NO1"));
        assert_eq!(order.sale_id, Some(3));
        assert!(order.pay_time.is_none());
    }

    #[test]
    fn feedback_uses_lowercase_createtime() {
        let fb: Feedback =
            serde_json::from_value(json!({ "createtime": "2025-01-01 08:00:00" })).unwrap();
        assert_eq!(fb.create_time.unwrap().as_str(), "2025-01-01 08:00:00");
    }

    #[test]
    fn user_info_keeps_unknown_fields() {
        let info: UserInfo = serde_json::from_value(json!({
            "id": 1,
            "token": "T",
            "role": "ADMIN",
            "level": 3
        }))
        .unwrap();
        assert_eq!(info.role, Some(Role::Admin));
        assert_eq!(info.extra.get("level"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&info).unwrap()["level"], json!(3));
    }

    #[test]
    fn empty_token_is_not_a_token() {
        let info = UserInfo {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(info.token().is_none());
    }

    #[test]
    fn unknown_role_does_not_fail() {
        let role: Role = serde_json::from_value(json!("MERCHANT")).unwrap();
        assert_eq!(role, Role::Unknown);
    }
}
