use super::*;
use crate::notify::{ToastLevel, ToastQueue};
use crate::request::{MOCK_BASE_URL, MockHttpClient};
use crate::route::AppRoute;
use schand_shared::protocol::{HttpMethod, SelectById, SelectPage};
use schand_shared::{Goods, PageQuery, UserInfo};
use serde_json::json;

/// 指向 mock 传输层的客户端，附带提示队列
pub(crate) struct Harness {
    pub api: ApiClient<MockHttpClient>,
    pub mock: MockHttpClient,
    pub toasts: ToastQueue,
}

pub(crate) fn harness() -> Harness {
    harness_with(SessionStore::in_memory())
}

pub(crate) fn harness_with(session: SessionStore) -> Harness {
    let mock = MockHttpClient::new();
    let toasts = ToastQueue::new();
    let api = ApiClient::builder(ClientConfig::default().with_base_url(MOCK_BASE_URL))
        .session(session)
        .notifier(toasts.clone())
        .build_with(mock.clone());
    Harness { api, mock, toasts }
}

pub(crate) fn sign_in(api: &ApiClient<MockHttpClient>, token: &str) {
    api.session()
        .set(UserInfo {
            id: Some(1),
            token: Some(token.to_string()),
            ..Default::default()
        })
        .unwrap();
}

#[tokio::test]
async fn success_envelope_yields_data_unmodified() {
    let h = harness();
    let data = json!({ "id": 5, "name": "台灯", "price": 20.5, "extra": [1, 2] });
    h.mock.mock_data(HttpMethod::Get, "/goods/selectById/5", data.clone());

    let raw = h
        .api
        .execute(RequestDescriptor::get("/goods/selectById/5"))
        .await
        .unwrap();
    assert_eq!(raw, data);

    let goods: Goods = h.api.call(&SelectById::<Goods>::new(5)).await.unwrap();
    assert_eq!(goods.name.as_deref(), Some("台灯"));
    assert!(h.toasts.is_empty());
}

#[tokio::test]
async fn requests_carry_session_token() {
    let h = harness();
    sign_in(&h.api, "T");
    h.mock.mock_data(HttpMethod::Get, "/goods/selectPage", json!({ "total": 0, "list": [] }));

    h.api
        .call(&SelectPage(PageQuery::<Goods>::new(1, 10)))
        .await
        .unwrap();

    let sent = h.mock.last_request().unwrap();
    assert_eq!(sent.url, format!("{}/goods/selectPage", MOCK_BASE_URL));
    assert_eq!(sent.header("token"), Some("T"));
    assert_eq!(
        sent.query,
        vec![
            ("pageNum".to_string(), "1".to_string()),
            ("pageSize".to_string(), "10".to_string())
        ]
    );
}

#[tokio::test]
async fn anonymous_requests_have_no_token_header() {
    let h = harness();
    h.mock.mock_data(HttpMethod::Get, "/notice/selectAll", json!([]));

    h.api
        .execute(RequestDescriptor::get("/notice/selectAll"))
        .await
        .unwrap();

    assert!(h.mock.last_request().unwrap().header("token").is_none());
}

#[tokio::test]
async fn business_failure_carries_backend_message() {
    let h = harness();
    h.mock.mock_envelope(
        HttpMethod::Post,
        "/goods/add",
        Envelope::error("5001", "商品名称不能为空"),
    );

    let err = h
        .api
        .execute(RequestDescriptor::post("/goods/add"))
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        ApiError::Envelope { code, msg } if code == "5001" && msg == "商品名称不能为空"
    ));
    assert_eq!(h.toasts.drain(), vec![Toast::warning("商品名称不能为空")]);
}

#[tokio::test]
async fn session_expiry_navigates_to_login_once() {
    let h = harness();
    sign_in(&h.api, "stale");
    h.api.router().navigate("/personal/mygoods");
    h.mock.mock_response(HttpMethod::Get, "/goods/selectPage", 500, "");

    let err = h
        .api
        .execute(RequestDescriptor::get("/goods/selectPage"))
        .await
        .unwrap_err();

    assert!(err.is_session_expired());
    assert_eq!(
        h.api.router().history(),
        vec![AppRoute::Square, AppRoute::Login]
    );
    let toasts = h.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(h.mock.requests().len(), 1);
}

#[tokio::test]
async fn network_failure_warns_and_rejects() {
    let h = harness();
    h.mock
        .mock_network_error(HttpMethod::Get, "/circle/list", "connection refused");

    let err = h
        .api
        .execute(RequestDescriptor::get("/circle/list"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "NETWORK_ERROR");
    let toasts = h.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Warning);
    assert!(toasts[0].message.contains("connection refused"));
}

#[tokio::test]
async fn timeout_is_reported() {
    let h = harness();
    h.mock.mock_timeout(HttpMethod::Get, "/orders/selectLine");

    let err = h
        .api
        .execute(RequestDescriptor::get("/orders/selectLine"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Timeout));
    assert_eq!(h.toasts.drain(), vec![Toast::warning("请求超时")]);
}

#[tokio::test]
async fn other_http_statuses_are_plain_failures() {
    let h = harness();

    let err = h
        .api
        .execute(RequestDescriptor::get("/missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 404, .. }));
    assert_eq!(h.api.router().current(), AppRoute::Square);
}

#[tokio::test]
async fn malformed_body_is_a_serialization_error() {
    let h = harness();
    h.mock
        .mock_response(HttpMethod::Get, "/category/selectAll", 200, "<html>");

    let err = h
        .api
        .execute(RequestDescriptor::get("/category/selectAll"))
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "JSON_PARSE_ERROR");
}

#[tokio::test]
async fn data_of_wrong_shape_fails_to_decode() {
    let h = harness();
    h.mock
        .mock_data(HttpMethod::Get, "/goods/selectById/1", json!("not an object"));

    let err = h.api.call(&SelectById::<Goods>::new(1)).await.unwrap_err();

    assert!(matches!(err, ApiError::Serialization(_)));
    assert_eq!(h.toasts.len(), 1);
}
