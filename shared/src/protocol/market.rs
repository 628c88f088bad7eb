//! 商品、订单、求购的非标准接口

use super::{ApiRequest, RequestDescriptor};
use crate::{ChartPoint, Goods, Help, Orders, PageInfo, PageQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct UpdateGoodsReadCount {
    pub id: i64,
}

impl ApiRequest for UpdateGoodsReadCount {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::put(format!(
            "/goods/updateReadCount/{}",
            self.id
        )))
    }
}

/// 前台商品列表的筛选条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoodsFrontFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// 搜索关键词
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 前台分页（只包含已审核、在售的商品）
#[derive(Debug, Clone, Default)]
pub struct GoodsFrontPage(pub PageQuery<GoodsFrontFilter>);

impl ApiRequest for GoodsFrontPage {
    type Response = PageInfo<Goods>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get("/goods/selectFrontPage").with_query(&self.0)
    }
}

/// 当前用户卖出的订单
#[derive(Debug, Clone, Default)]
pub struct OrdersSalePage(pub PageQuery<Orders>);

impl ApiRequest for OrdersSalePage {
    type Response = PageInfo<Orders>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get("/orders/selectSalePage").with_query(&self.0)
    }
}

/// 每个用户的订单总金额
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersLineChart;

impl ApiRequest for OrdersLineChart {
    type Response = Vec<ChartPoint>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get("/orders/selectLine"))
    }
}

/// 每日销售额
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdersBarChart;

impl ApiRequest for OrdersBarChart {
    type Response = Vec<ChartPoint>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get("/orders/selectBar"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct HelpFrontPage(pub PageQuery<Help>);

impl ApiRequest for HelpFrontPage {
    type Response = PageInfo<Help>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get("/help/selectFrontPage").with_query(&self.0)
    }
}
