//! 帖子、评论、圈子

use super::ResourceApi;
use crate::error::ApiResult;
use crate::request::HttpClient;
use schand_shared::protocol::{
    CircleDetail, CircleList, CircleMembers, CommentCount, CommentTree, CreateCircle, HotCircles,
    JoinCircle, LeaveCircle, PostsFrontPage, UpdatePostsCount, UserCircles,
};
use schand_shared::{Circles, Comment, PageInfo, PageQuery, Posts};
use serde_json::Value;

impl<C: HttpClient> ResourceApi<'_, Posts, C> {
    pub async fn update_count(&self, id: i64) -> ApiResult<()> {
        self.client.call(&UpdatePostsCount { id }).await
    }

    pub async fn front_page(&self, query: PageQuery<Posts>) -> ApiResult<PageInfo<Posts>> {
        self.client.call(&PostsFrontPage(query)).await
    }
}

impl<C: HttpClient> ResourceApi<'_, Comment, C> {
    /// 评论树，分页只作用于顶层评论
    pub async fn tree(&self, request: CommentTree) -> ApiResult<PageInfo<Comment>> {
        self.client.call(&request).await
    }

    pub async fn count(&self, fid: i64, module: impl Into<String>) -> ApiResult<u64> {
        self.client
            .call(&CommentCount {
                fid,
                module: module.into(),
            })
            .await
    }
}

impl<C: HttpClient> ResourceApi<'_, Circles, C> {
    pub async fn list(&self) -> ApiResult<Vec<Circles>> {
        self.client.call(&CircleList).await
    }

    pub async fn detail(&self, id: i64) -> ApiResult<Circles> {
        self.client.call(&CircleDetail { id }).await
    }

    pub async fn create(&self, circle: Circles) -> ApiResult<Value> {
        self.client.call(&CreateCircle(circle)).await
    }

    pub async fn join(&self, id: i64) -> ApiResult<Value> {
        self.client.call(&JoinCircle { id }).await
    }

    pub async fn leave(&self, id: i64) -> ApiResult<Value> {
        self.client.call(&LeaveCircle { id }).await
    }

    /// 当前用户加入的圈子
    pub async fn mine(&self) -> ApiResult<Vec<Circles>> {
        self.client.call(&UserCircles).await
    }

    pub async fn hot(&self, limit: Option<u32>) -> ApiResult<Vec<Circles>> {
        self.client.call(&HotCircles { limit }).await
    }

    pub async fn members(&self, id: i64, page: PageQuery) -> ApiResult<Value> {
        self.client.call(&CircleMembers { id, page }).await
    }
}
