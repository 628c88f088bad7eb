use crate::config::{ClientConfig, join_url};
use crate::error::{ApiError, ApiResult};
use schand_shared::protocol::{FilePart, HttpMethod, RequestBody, RequestDescriptor};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// 把接口描述挂到后端地址下
    pub fn from_descriptor(base_url: &str, descriptor: RequestDescriptor) -> Self {
        let RequestDescriptor {
            method,
            path,
            query,
            body,
            headers,
        } = descriptor;

        Self {
            url: join_url(base_url, &path),
            method,
            headers: headers.into_iter().collect(),
            query,
            body,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// 按名称查找请求头（不区分大小写）
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 令牌注入、会话失效处理都以装饰器的形式实现这个 trait，
/// 最内层才是真正发请求的传输实现。
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 实现层: reqwest 客户端 (Production)
// =========================================================

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    content_type: String,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration, content_type: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            content_type: content_type.into(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Self::new(config.timeout, config.content_type.clone())
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

fn multipart_form(part: FilePart) -> ApiResult<reqwest::multipart::Form> {
    let FilePart {
        field,
        file_name,
        mime,
        bytes,
    } = part;

    let mut file = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    if let Some(mime) = mime {
        file = file
            .mime_str(&mime)
            .map_err(|e| ApiError::Config(format!("invalid mime type {}: {}", mime, e)))?;
    }
    Ok(reqwest::multipart::Form::new().part(field, file))
}

#[async_trait::async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };

        let has_content_type = req.header("content-type").is_some();
        let mut builder = self.client.request(method, &req.url);

        for (k, v) in &req.headers {
            builder = builder.header(k.as_str(), v.as_str());
        }

        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }

        match req.body {
            Some(RequestBody::Json(value)) => {
                if !has_content_type {
                    builder =
                        builder.header(reqwest::header::CONTENT_TYPE, self.content_type.as_str());
                }
                builder = builder.body(serde_json::to_vec(&value)?);
            }
            // multipart 自带 boundary，不能套用默认的 JSON 内容类型
            Some(RequestBody::Multipart(part)) => {
                builder = builder.multipart(multipart_form(part)?);
            }
            None => {}
        }

        let resp = builder.send().await.map_err(transport_error)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport_error)?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 实现层: Mock 客户端 (Testing)
// =========================================================

#[cfg(test)]
pub use mock::{MOCK_BASE_URL, MockHttpClient};


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_is_joined_to_base_url() {
        let desc = RequestDescriptor::get("/goods/selectAll")
            .with_query(&json!({ "name": "书" }))
            .unwrap()
            .with_header("X-Trace", "1");
        let req = HttpRequest::from_descriptor("http://localhost:9090", desc);
        assert_eq!(req.url, "http://localhost:9090/goods/selectAll");
        assert_eq!(req.query, vec![("name".to_string(), "书".to_string())]);
        assert_eq!(req.header("x-trace"), Some("1"));
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[tokio::test]
    async fn mock_records_requests_and_defaults_to_404() {
        let mock = MockHttpClient::new();
        mock.mock_data(HttpMethod::Get, "/circle/list", json!([]));

        let ok = mock
            .send(HttpRequest::new(&format!("{}/circle/list", MOCK_BASE_URL), HttpMethod::Get))
            .await
            .unwrap();
        assert_eq!(ok.status, 200);

        let missing = mock
            .send(HttpRequest::new(&format!("{}/nope", MOCK_BASE_URL), HttpMethod::Get))
            .await
            .unwrap();
        assert_eq!(missing.status, 404);
        assert_eq!(mock.requests().len(), 2);
    }
}
