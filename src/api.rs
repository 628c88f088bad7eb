//! 业务接口
//!
//! 每种资源共用同一组标准操作（`ResourceApi<T>`），资源特有的接口
//! 以 `impl ResourceApi<'_, Goods, C>` 之类的形式挂在对应资源上。

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{HttpClient, ReqwestHttpClient};
use schand_shared::protocol::{
    Add, DeleteBatch, DeleteById, Resource, SelectAll, SelectById, SelectPage,
};
use schand_shared::{
    Address, Admin, Category, Circles, Collect, Comment, Feedback, Goods, Help, Likes, Notice,
    Orders, PageInfo, PageQuery, Posts, User,
};
use std::marker::PhantomData;

mod chat;
mod community;
mod file;
mod market;

pub use chat::ChatApi;

/// 一种资源的标准增删改查
pub struct ResourceApi<'a, T, C = ReqwestHttpClient> {
    client: &'a ApiClient<C>,
    _resource: PhantomData<fn() -> T>,
}

impl<'a, T, C> ResourceApi<'a, T, C> {
    pub fn new(client: &'a ApiClient<C>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

impl<T: Resource, C: HttpClient> ResourceApi<'_, T, C> {
    /// POST `{prefix}/add`
    pub async fn add(&self, item: T) -> ApiResult<()> {
        self.client.call(&Add(item)).await
    }

    /// PUT `{prefix}/update`，按实体里的 id 更新
    pub async fn update(&self, item: T) -> ApiResult<()> {
        self.client.call(&schand_shared::protocol::Update(item)).await
    }

    /// DELETE `{prefix}/delete/{id}`
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.call(&DeleteById::<T>::new(id)).await
    }

    /// DELETE `{prefix}/delete/batch`，id 列表放在请求体
    pub async fn delete_batch(&self, ids: impl Into<Vec<i64>>) -> ApiResult<()> {
        self.client.call(&DeleteBatch::<T>::new(ids)).await
    }

    /// GET `{prefix}/selectById/{id}`
    pub async fn get_by_id(&self, id: i64) -> ApiResult<T> {
        self.client.call(&SelectById::<T>::new(id)).await
    }

    /// GET `{prefix}/selectAll`，实体本身作为过滤条件
    pub async fn get_all(&self, filter: T) -> ApiResult<Vec<T>> {
        self.client.call(&SelectAll(filter)).await
    }

    /// GET `{prefix}/selectPage`
    pub async fn get_page(&self, query: PageQuery<T>) -> ApiResult<PageInfo<T>> {
        self.client.call(&SelectPage(query)).await
    }
}

impl<C> ApiClient<C> {
    pub fn resource<T: Resource>(&self) -> ResourceApi<'_, T, C> {
        ResourceApi::new(self)
    }

    pub fn users(&self) -> ResourceApi<'_, User, C> {
        self.resource()
    }

    pub fn admins(&self) -> ResourceApi<'_, Admin, C> {
        self.resource()
    }

    pub fn goods(&self) -> ResourceApi<'_, Goods, C> {
        self.resource()
    }

    pub fn orders(&self) -> ResourceApi<'_, Orders, C> {
        self.resource()
    }

    pub fn posts(&self) -> ResourceApi<'_, Posts, C> {
        self.resource()
    }

    pub fn help(&self) -> ResourceApi<'_, Help, C> {
        self.resource()
    }

    pub fn notices(&self) -> ResourceApi<'_, Notice, C> {
        self.resource()
    }

    pub fn feedback(&self) -> ResourceApi<'_, Feedback, C> {
        self.resource()
    }

    pub fn addresses(&self) -> ResourceApi<'_, Address, C> {
        self.resource()
    }

    pub fn categories(&self) -> ResourceApi<'_, Category, C> {
        self.resource()
    }

    pub fn circles(&self) -> ResourceApi<'_, Circles, C> {
        self.resource()
    }

    pub fn comments(&self) -> ResourceApi<'_, Comment, C> {
        self.resource()
    }

    pub fn collects(&self) -> ResourceApi<'_, Collect, C> {
        self.resource()
    }

    pub fn likes(&self) -> ResourceApi<'_, Likes, C> {
        self.resource()
    }

    pub fn chat(&self) -> ChatApi<'_, C> {
        ChatApi::new(self)
    }
}

#[cfg(test)]
mod tests;
