//! 商品、订单、求购

use super::ResourceApi;
use crate::error::ApiResult;
use crate::request::HttpClient;
use schand_shared::protocol::{
    GoodsFrontFilter, GoodsFrontPage, HelpFrontPage, OrdersBarChart, OrdersLineChart,
    OrdersSalePage, UpdateGoodsReadCount,
};
use schand_shared::{ChartPoint, Goods, Help, Orders, PageInfo, PageQuery};

impl<C: HttpClient> ResourceApi<'_, Goods, C> {
    /// 浏览量 +1
    pub async fn update_read_count(&self, id: i64) -> ApiResult<()> {
        self.client.call(&UpdateGoodsReadCount { id }).await
    }

    /// 前台商品列表（按分类、排序、关键词）
    pub async fn front_page(
        &self,
        query: PageQuery<GoodsFrontFilter>,
    ) -> ApiResult<PageInfo<Goods>> {
        self.client.call(&GoodsFrontPage(query)).await
    }
}

impl<C: HttpClient> ResourceApi<'_, Orders, C> {
    /// 我卖出的订单
    pub async fn sale_page(&self, query: PageQuery<Orders>) -> ApiResult<PageInfo<Orders>> {
        self.client.call(&OrdersSalePage(query)).await
    }

    pub async fn line_chart(&self) -> ApiResult<Vec<ChartPoint>> {
        self.client.call(&OrdersLineChart).await
    }

    pub async fn bar_chart(&self) -> ApiResult<Vec<ChartPoint>> {
        self.client.call(&OrdersBarChart).await
    }
}

impl<C: HttpClient> ResourceApi<'_, Help, C> {
    pub async fn front_page(&self, query: PageQuery<Help>) -> ApiResult<PageInfo<Help>> {
        self.client.call(&HelpFrontPage(query)).await
    }
}
