//! 私聊消息与会话

use super::{ApiRequest, RequestDescriptor};
use crate::{ChatGroup, ChatInfo};

/// 与某个用户的聊天记录
#[derive(Debug, Clone, Copy)]
pub struct UserChat {
    pub chat_user_id: i64,
}

impl ApiRequest for UserChat {
    type Response = Vec<ChatInfo>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get(format!(
            "/chatInfo/selectUserChat/{}",
            self.chat_user_id
        )))
    }
}

#[derive(Debug, Clone)]
pub struct AddChatInfo(pub ChatInfo);

impl ApiRequest for AddChatInfo {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::post("/chatInfo/add").with_json(&self.0)
    }
}

/// 把与某个用户的消息全部标记为已读
#[derive(Debug, Clone, Copy)]
pub struct MarkChatRead {
    pub chat_user_id: i64,
}

impl ApiRequest for MarkChatRead {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::put(format!(
            "/chatInfo/updateRead/{}",
            self.chat_user_id
        )))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserChatGroups;

impl ApiRequest for UserChatGroups {
    type Response = Vec<ChatGroup>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get("/chatGroup/selectUserGroup"))
    }
}

/// 发起会话（`chat_user_id` 为对方，`user_id` 为当前用户）
#[derive(Debug, Clone)]
pub struct AddChatGroup(pub ChatGroup);

impl ApiRequest for AddChatGroup {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::post("/chatGroup/add").with_json(&self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteChatGroup {
    pub id: i64,
}

impl ApiRequest for DeleteChatGroup {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::delete(format!("/chatGroup/delete/{}", self.id)))
    }
}
