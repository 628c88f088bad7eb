//! 路由定义模块 - 领域模型
//!
//! 纯粹的路由表：路径解析、反向生成、守卫标记与标题。
//! 不涉及历史记录和导航副作用，那些在 `router` 中。

use std::fmt::Display;

/// 个人中心的子页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PersonalTab {
    #[default]
    MyInfo,
    MyGoods,
    MyOrder,
    MyFeedback,
    MyAddress,
    MyCollection,
    MyWanted,
    MyPost,
}

impl PersonalTab {
    pub const ALL: [PersonalTab; 8] = [
        Self::MyInfo,
        Self::MyGoods,
        Self::MyOrder,
        Self::MyFeedback,
        Self::MyAddress,
        Self::MyCollection,
        Self::MyWanted,
        Self::MyPost,
    ];

    pub fn segment(&self) -> &'static str {
        match self {
            Self::MyInfo => "myinfo",
            Self::MyGoods => "mygoods",
            Self::MyOrder => "myorder",
            Self::MyFeedback => "myfeedback",
            Self::MyAddress => "myaddress",
            Self::MyCollection => "mycollection",
            Self::MyWanted => "mywanted",
            Self::MyPost => "mypost",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.segment() == segment)
    }
}

/// 管理后台页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ManagerPage {
    #[default]
    Dashboard,
    Business,
    Role,
    Category,
    Goods,
    Feedback,
    Wanted,
    Notice,
    Circles,
    Posts,
    Address,
    Comment,
    User,
    Admin,
}

impl ManagerPage {
    pub const ALL: [ManagerPage; 14] = [
        Self::Dashboard,
        Self::Business,
        Self::Role,
        Self::Category,
        Self::Goods,
        Self::Feedback,
        Self::Wanted,
        Self::Notice,
        Self::Circles,
        Self::Posts,
        Self::Address,
        Self::Comment,
        Self::User,
        Self::Admin,
    ];

    pub fn segment(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Business => "business",
            Self::Role => "role",
            Self::Category => "category",
            Self::Goods => "goods",
            Self::Feedback => "feedback",
            Self::Wanted => "wanted",
            Self::Notice => "notice",
            Self::Circles => "circles",
            Self::Posts => "posts",
            Self::Address => "address",
            Self::Comment => "comment",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.segment() == segment)
    }

    /// 侧边栏显示名
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("系统仪表盘"),
            Self::Business => Some("业务管理"),
            Self::Role => Some("角色管理"),
            _ => None,
        }
    }
}

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 广场（首页）
    #[default]
    Square,
    Community,
    PostDetail(i64),
    PostCreate,
    Wanted,
    WantedCreate,
    WantedDetail(i64),
    Notice,
    Feedback,
    GoodsCreate,
    GoodsDetail(i64),
    Chat,
    Pay,
    PayBack,
    Personal(PersonalTab),
    Login,
    Register,
    Manager(ManagerPage),
    /// 页面未找到
    NotFound,
}

/// 去掉查询串与片段，按 `/` 切分
fn segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举（重定向已展开）
    pub fn from_path(path: &str) -> Self {
        let id = |raw: &str, make: fn(i64) -> Self| raw.parse().map(make).unwrap_or(Self::NotFound);

        match segments(path).as_slice() {
            [] | ["square"] => Self::Square,
            ["community"] => Self::Community,
            ["post", "create"] => Self::PostCreate,
            ["post", "detail", raw] => id(*raw, Self::PostDetail),
            ["wanted"] => Self::Wanted,
            ["wanted", "create"] => Self::WantedCreate,
            ["wanted", "detail", raw] => id(*raw, Self::WantedDetail),
            ["notice"] => Self::Notice,
            ["feedback"] => Self::Feedback,
            ["goods", "create"] => Self::GoodsCreate,
            ["goods", "detail", raw] => id(*raw, Self::GoodsDetail),
            ["chat"] => Self::Chat,
            ["pay"] => Self::Pay,
            ["payback"] => Self::PayBack,
            ["personal"] => Self::Personal(PersonalTab::default()),
            ["personal", tab] => PersonalTab::from_segment(tab)
                .map(Self::Personal)
                .unwrap_or(Self::NotFound),
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["manager"] => Self::Manager(ManagerPage::default()),
            ["manager", page] => ManagerPage::from_segment(page)
                .map(Self::Manager)
                .unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Square => "/square".to_string(),
            Self::Community => "/community".to_string(),
            Self::PostDetail(id) => format!("/post/detail/{}", id),
            Self::PostCreate => "/post/create".to_string(),
            Self::Wanted => "/wanted".to_string(),
            Self::WantedCreate => "/wanted/create".to_string(),
            Self::WantedDetail(id) => format!("/wanted/detail/{}", id),
            Self::Notice => "/notice".to_string(),
            Self::Feedback => "/feedback".to_string(),
            Self::GoodsCreate => "/goods/create".to_string(),
            Self::GoodsDetail(id) => format!("/goods/detail/{}", id),
            Self::Chat => "/chat".to_string(),
            Self::Pay => "/pay".to_string(),
            Self::PayBack => "/payback".to_string(),
            Self::Personal(tab) => format!("/personal/{}", tab.segment()),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Manager(page) => format!("/manager/{}", page.segment()),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// 路由名
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Community => "community",
            Self::PostDetail(_) => "postdetail",
            Self::PostCreate => "postcreate",
            Self::Wanted => "wanted",
            Self::WantedCreate => "wantedcreate",
            Self::WantedDetail(_) => "wanteddetail",
            Self::Notice => "notice",
            Self::Feedback => "feedback",
            Self::GoodsCreate => "goodscreate",
            Self::GoodsDetail(_) => "goodsdetail",
            Self::Chat => "chat",
            Self::Pay => "pay",
            Self::PayBack => "payback",
            Self::Personal(tab) => tab.segment(),
            Self::Login => "login",
            Self::Register => "register",
            Self::Manager(ManagerPage::Dashboard) => "dashboard",
            Self::Manager(ManagerPage::Business) => "business",
            Self::Manager(ManagerPage::Role) => "role",
            Self::Manager(ManagerPage::Category) => "m-category",
            Self::Manager(ManagerPage::Goods) => "m-goods",
            Self::Manager(ManagerPage::Feedback) => "m-feedback",
            Self::Manager(ManagerPage::Wanted) => "m-wanted",
            Self::Manager(ManagerPage::Notice) => "m-notice",
            Self::Manager(ManagerPage::Circles) => "m-circles",
            Self::Manager(ManagerPage::Posts) => "m-posts",
            Self::Manager(ManagerPage::Address) => "m-address",
            Self::Manager(ManagerPage::Comment) => "m-comment",
            Self::Manager(ManagerPage::User) => "m-user",
            Self::Manager(ManagerPage::Admin) => "m-admin",
            Self::NotFound => "notfound",
        }
    }

    /// 页面标题
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Square => Some("广场"),
            Self::Community => Some("社区"),
            Self::PostDetail(_) => Some("帖子详情"),
            Self::PostCreate => Some("发布帖子"),
            Self::Wanted => Some("悬赏"),
            Self::WantedCreate => Some("发布悬赏"),
            Self::WantedDetail(_) => Some("悬赏详情"),
            Self::Notice => Some("公告"),
            Self::Feedback => Some("反馈"),
            Self::GoodsCreate => Some("发布商品"),
            Self::GoodsDetail(_) => Some("商品详情"),
            Self::Pay => Some("订单支付"),
            Self::PayBack => Some("支付结果"),
            Self::Manager(page) => page.title(),
            _ => None,
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    ///
    /// 个人中心的子页面继承父级的标记。
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::PostCreate | Self::Pay | Self::PayBack | Self::Personal(_)
        )
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_parents_expand_redirects() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Square);
        assert_eq!(AppRoute::from_path(""), AppRoute::Square);
        assert_eq!(
            AppRoute::from_path("/personal"),
            AppRoute::Personal(PersonalTab::MyInfo)
        );
        assert_eq!(
            AppRoute::from_path("/manager/"),
            AppRoute::Manager(ManagerPage::Dashboard)
        );
    }

    #[test]
    fn detail_routes_parse_ids() {
        assert_eq!(AppRoute::from_path("/goods/detail/42"), AppRoute::GoodsDetail(42));
        assert_eq!(AppRoute::from_path("/post/detail/7?from=square"), AppRoute::PostDetail(7));
        assert_eq!(AppRoute::from_path("/wanted/detail/abc"), AppRoute::NotFound);
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(AppRoute::from_path("/pay?orderNo=NO1"), AppRoute::Pay);
        assert_eq!(AppRoute::from_path("/chat#bottom"), AppRoute::Chat);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/personal/other"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/square/extra"), AppRoute::NotFound);
    }

    #[test]
    fn every_route_parses_back_from_its_path() {
        let mut routes = vec![
            AppRoute::Square,
            AppRoute::Community,
            AppRoute::PostDetail(3),
            AppRoute::PostCreate,
            AppRoute::Wanted,
            AppRoute::WantedCreate,
            AppRoute::WantedDetail(4),
            AppRoute::Notice,
            AppRoute::Feedback,
            AppRoute::GoodsCreate,
            AppRoute::GoodsDetail(5),
            AppRoute::Chat,
            AppRoute::Pay,
            AppRoute::PayBack,
            AppRoute::Login,
            AppRoute::Register,
        ];
        routes.extend(PersonalTab::ALL.map(AppRoute::Personal));
        routes.extend(ManagerPage::ALL.map(AppRoute::Manager));

        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route, "{}", route);
        }
    }

    #[test]
    fn guard_flags_follow_route_table() {
        assert!(AppRoute::PostCreate.requires_auth());
        assert!(AppRoute::Pay.requires_auth());
        assert!(AppRoute::PayBack.requires_auth());
        assert!(PersonalTab::ALL.iter().all(|t| AppRoute::Personal(*t).requires_auth()));

        assert!(!AppRoute::Square.requires_auth());
        assert!(!AppRoute::WantedCreate.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Manager(ManagerPage::Dashboard).requires_auth());
    }

    #[test]
    fn titles_and_names() {
        assert_eq!(AppRoute::Square.title(), Some("广场"));
        assert_eq!(AppRoute::Chat.title(), None);
        assert_eq!(AppRoute::Manager(ManagerPage::Role).title(), Some("角色管理"));
        assert_eq!(AppRoute::Manager(ManagerPage::Goods).name(), "m-goods");
        assert_eq!(AppRoute::Personal(PersonalTab::MyPost).name(), "mypost");
    }
}
