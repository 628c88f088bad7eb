//! 帖子、评论、圈子的非标准接口

use super::{ApiRequest, RequestDescriptor};
use crate::{Circles, Comment, DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE, PageInfo, PageQuery, Posts};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct UpdatePostsCount {
    pub id: i64,
}

impl ApiRequest for UpdatePostsCount {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::put(format!("/posts/updateCount/{}", self.id)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostsFrontPage(pub PageQuery<Posts>);

impl ApiRequest for PostsFrontPage {
    type Response = PageInfo<Posts>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get("/posts/selectFrontPage").with_query(&self.0)
    }
}

// =========================================================
// 评论
// =========================================================

/// 某条内容下的评论树（分页作用于顶层评论）
#[derive(Debug, Clone)]
pub struct CommentTree {
    pub fid: i64,
    pub module: String,
    pub page_num: u32,
    pub page_size: u32,
}

impl CommentTree {
    pub fn new(fid: i64, module: impl Into<String>) -> Self {
        Self {
            fid,
            module: module.into(),
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(mut self, page_num: u32, page_size: u32) -> Self {
        self.page_num = page_num;
        self.page_size = page_size;
        self
    }
}

impl ApiRequest for CommentTree {
    type Response = PageInfo<Comment>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/comment/selectTree/{}/{}", self.fid, self.module))
            .with_query(&PageQuery::<crate::NoFilter>::new(self.page_num, self.page_size))
    }
}

#[derive(Debug, Clone)]
pub struct CommentCount {
    pub fid: i64,
    pub module: String,
}

impl ApiRequest for CommentCount {
    type Response = u64;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get(format!(
            "/comment/selectCount/{}/{}",
            self.fid, self.module
        )))
    }
}

// =========================================================
// 圈子社交接口（`/circle/*`，区别于后台的 `/circles/*`）
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleList;

impl ApiRequest for CircleList {
    type Response = Vec<Circles>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get("/circle/list"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CircleDetail {
    pub id: i64,
}

impl ApiRequest for CircleDetail {
    type Response = Circles;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get(format!("/circle/detail/{}", self.id)))
    }
}

#[derive(Debug, Clone)]
pub struct CreateCircle(pub Circles);

impl ApiRequest for CreateCircle {
    type Response = serde_json::Value;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::post("/circle/create").with_json(&self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JoinCircle {
    pub id: i64,
}

impl ApiRequest for JoinCircle {
    type Response = serde_json::Value;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::post(format!("/circle/join/{}", self.id)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LeaveCircle {
    pub id: i64,
}

impl ApiRequest for LeaveCircle {
    type Response = serde_json::Value;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::post(format!("/circle/leave/{}", self.id)))
    }
}

/// 当前用户已加入的圈子
#[derive(Debug, Clone, Copy, Default)]
pub struct UserCircles;

impl ApiRequest for UserCircles {
    type Response = Vec<Circles>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get("/circle/user"))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HotCircles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ApiRequest for HotCircles {
    type Response = Vec<Circles>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get("/circle/hot").with_query(self)
    }
}

#[derive(Debug, Clone)]
pub struct CircleMembers {
    pub id: i64,
    pub page: PageQuery,
}

impl ApiRequest for CircleMembers {
    type Response = serde_json::Value;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get(format!("/circle/members/{}", self.id)).with_query(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_tree_puts_target_in_path_and_page_in_query() {
        let desc = CommentTree::new(3, "goods").page(2, 5).descriptor().unwrap();
        assert_eq!(desc.path, "/comment/selectTree/3/goods");
        assert_eq!(
            desc.query,
            vec![
                ("pageNum".to_string(), "2".to_string()),
                ("pageSize".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn hot_circles_without_limit_has_no_query() {
        let desc = HotCircles::default().descriptor().unwrap();
        assert!(desc.query.is_empty());
    }
}
