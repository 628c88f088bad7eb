//! 外部新闻源
//!
//! 与后端 API 完全分开：不带会话令牌、不拆信封、超时更长。
//! 新闻只是首页的点缀，拉取失败时返回空列表而不是报错。

use crate::config::{DEFAULT_CONTENT_TYPE, NEWS_ACCEPT, NewsConfig};
use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpRequest, ReqwestHttpClient};
use schand_shared::protocol::{NewsFeed, NewsSource};

pub struct NewsClient<C = ReqwestHttpClient> {
    http: C,
    base_url: String,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn from_config(config: &NewsConfig) -> ApiResult<Self> {
        let http = ReqwestHttpClient::new(config.timeout, DEFAULT_CONTENT_TYPE)?;
        Ok(Self::with_transport(http, config))
    }
}

impl<C: HttpClient> NewsClient<C> {
    pub fn with_transport(http: C, config: &NewsConfig) -> Self {
        Self {
            http,
            base_url: crate::config::normalize_base_url(&config.base_url),
            api_key: config.api_key.clone(),
        }
    }

    /// 拉取一个来源，失败时返回错误
    pub async fn try_fetch(&self, source: NewsSource) -> ApiResult<NewsFeed> {
        let descriptor = source.descriptor(self.api_key.as_deref());
        let req = HttpRequest::from_descriptor(&self.base_url, descriptor)
            .with_header("Accept", NEWS_ACCEPT);

        let resp = self.http.send(req).await?;
        if !resp.is_success() {
            return Err(ApiError::Http {
                status: resp.status,
                body: resp.body,
            });
        }
        resp.json()
    }

    /// 拉取一个来源，失败时记录日志并返回空列表
    pub async fn fetch(&self, source: NewsSource) -> NewsFeed {
        match self.try_fetch(source).await {
            Ok(feed) => {
                tracing::debug!(source = %source, items = feed.items.len(), "news fetched");
                feed
            }
            Err(e) => {
                tracing::warn!(
                    source = %source,
                    error = %e,
                    "news fetch failed, showing empty feed"
                );
                NewsFeed::default()
            }
        }
    }

    /// 依次拉取全部来源
    pub async fn fetch_all(&self) -> Vec<(NewsSource, NewsFeed)> {
        let mut feeds = Vec::with_capacity(NewsSource::ALL.len());
        for source in NewsSource::ALL {
            feeds.push((source, self.fetch(source).await));
        }
        feeds
    }
}
