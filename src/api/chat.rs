//! 私聊

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{HttpClient, ReqwestHttpClient};
use schand_shared::protocol::{
    AddChatGroup, AddChatInfo, DeleteChatGroup, MarkChatRead, UserChat, UserChatGroups,
};
use schand_shared::{ChatGroup, ChatInfo};

pub struct ChatApi<'a, C = ReqwestHttpClient> {
    client: &'a ApiClient<C>,
}

impl<'a, C> ChatApi<'a, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self { client }
    }
}

impl<C: HttpClient> ChatApi<'_, C> {
    /// 与某个用户的全部消息
    pub async fn messages_with(&self, chat_user_id: i64) -> ApiResult<Vec<ChatInfo>> {
        self.client.call(&UserChat { chat_user_id }).await
    }

    pub async fn send(&self, message: ChatInfo) -> ApiResult<()> {
        self.client.call(&AddChatInfo(message)).await
    }

    pub async fn mark_read(&self, chat_user_id: i64) -> ApiResult<()> {
        self.client.call(&MarkChatRead { chat_user_id }).await
    }

    /// 会话列表
    pub async fn groups(&self) -> ApiResult<Vec<ChatGroup>> {
        self.client.call(&UserChatGroups).await
    }

    pub async fn open_group(&self, group: ChatGroup) -> ApiResult<()> {
        self.client.call(&AddChatGroup(group)).await
    }

    pub async fn close_group(&self, id: i64) -> ApiResult<()> {
        self.client.call(&DeleteChatGroup { id }).await
    }
}
