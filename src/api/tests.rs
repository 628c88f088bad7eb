use crate::client::tests::harness;
use schand_shared::protocol::{CommentTree, FilePart, GoodsFrontFilter, HttpMethod, RequestBody};
use schand_shared::{ChatInfo, Circles, Collect, Goods, Notice, PageQuery, Posts};
use serde_json::json;

#[tokio::test]
async fn standard_operations_follow_resource_prefix() {
    let h = harness();
    h.mock.mock_data(HttpMethod::Post, "/notice/add", json!(null));
    h.mock.mock_data(HttpMethod::Put, "/notice/update", json!(null));
    h.mock.mock_data(HttpMethod::Delete, "/notice/delete/3", json!(null));
    h.mock.mock_data(HttpMethod::Delete, "/notice/delete/batch", json!(null));

    let notices = h.api.notices();
    notices
        .add(Notice {
            title: Some("停电通知".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    notices
        .update(Notice {
            id: Some(3),
            content: Some("改期".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    notices.delete(3).await.unwrap();
    notices.delete_batch(vec![3, 4]).await.unwrap();

    let sent = h.mock.requests();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[0].body, Some(RequestBody::Json(json!({ "title": "停电通知" }))));
    assert_eq!(sent[1].body, Some(RequestBody::Json(json!({ "id": 3, "content": "改期" }))));
    assert!(sent[2].body.is_none());
    assert_eq!(sent[3].method, HttpMethod::Delete);
    assert_eq!(sent[3].body, Some(RequestBody::Json(json!([3, 4]))));
    assert!(h.toasts.is_empty());
}

#[tokio::test]
async fn select_operations_decode_payloads() {
    let h = harness();
    h.mock.mock_data(
        HttpMethod::Get,
        "/posts/selectPage",
        json!({
            "total": 11,
            "pages": 2,
            "pageNum": 2,
            "pageSize": 10,
            "list": [{ "id": 11, "title": "求推荐" }]
        }),
    );
    h.mock.mock_data(
        HttpMethod::Get,
        "/collect/selectAll",
        json!([{ "id": 1, "fid": 9, "module": "goods" }]),
    );

    let page = h
        .api
        .posts()
        .get_page(PageQuery::filtered(
            2,
            10,
            Posts {
                circle: Some("数码".into()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    assert_eq!(page.total, 11);
    assert_eq!(page.list[0].title.as_deref(), Some("求推荐"));

    let sent = h.mock.last_request().unwrap();
    assert!(sent.query.contains(&("circle".to_string(), "数码".to_string())));
    assert!(sent.query.contains(&("pageNum".to_string(), "2".to_string())));

    let collects = h
        .api
        .collects()
        .get_all(Collect {
            module: Some("goods".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(collects[0].fid, Some(9));
}

#[tokio::test]
async fn goods_specific_endpoints() {
    let h = harness();
    h.mock
        .mock_data(HttpMethod::Put, "/goods/updateReadCount/8", json!(null));
    h.mock.mock_data(
        HttpMethod::Get,
        "/goods/selectFrontPage",
        json!({ "total": 1, "list": [{ "id": 8, "name": "吉他" }] }),
    );

    h.api.goods().update_read_count(8).await.unwrap();
    let page = h
        .api
        .goods()
        .front_page(PageQuery::filtered(
            1,
            12,
            GoodsFrontFilter {
                category: Some("乐器".into()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();

    assert_eq!(
        page.list,
        vec![Goods {
            id: Some(8),
            name: Some("吉他".into()),
            ..Default::default()
        }]
    );
}

#[tokio::test]
async fn order_charts() {
    let h = harness();
    h.mock.mock_data(
        HttpMethod::Get,
        "/orders/selectLine",
        json!([{ "name": "2025-01-01", "value": 3 }]),
    );

    let points = h.api.orders().line_chart().await.unwrap();
    assert_eq!(points[0].value, 3.0);
}

#[tokio::test]
async fn comment_tree_and_batch_delete() {
    let h = harness();
    h.mock.mock_data(
        HttpMethod::Get,
        "/comment/selectTree/5/posts",
        json!({
            "total": 1,
            "list": [{ "id": 1, "content": "顶", "children": [{ "id": 2, "pid": 1 }] }]
        }),
    );
    h.mock
        .mock_data(HttpMethod::Delete, "/comment/deleteBatch", json!(null));

    let tree = h
        .api
        .comments()
        .tree(CommentTree::new(5, "posts").page(1, 5))
        .await
        .unwrap();
    assert_eq!(tree.list[0].children[0].pid, Some(1));

    h.api.comments().delete_batch(vec![1, 2]).await.unwrap();
    let sent = h.mock.last_request().unwrap();
    assert_eq!(sent.body, Some(RequestBody::Json(json!({ "ids": [1, 2] }))));
}

#[tokio::test]
async fn circle_social_endpoints() {
    let h = harness();
    h.mock.mock_data(
        HttpMethod::Get,
        "/circle/hot",
        json!([{ "id": 1, "name": "摄影" }]),
    );
    h.mock
        .mock_data(HttpMethod::Post, "/circle/join/1", json!({ "joined": true }));

    let hot = h.api.circles().hot(Some(5)).await.unwrap();
    assert_eq!(
        hot,
        vec![Circles {
            id: Some(1),
            name: Some("摄影".into()),
            ..Default::default()
        }]
    );
    assert_eq!(
        h.mock.last_request().unwrap().query,
        vec![("limit".to_string(), "5".to_string())]
    );

    let joined = h.api.circles().join(1).await.unwrap();
    assert_eq!(joined, json!({ "joined": true }));
}

#[tokio::test]
async fn chat_endpoints() {
    let h = harness();
    h.mock.mock_data(
        HttpMethod::Get,
        "/chatInfo/selectUserChat/7",
        json!([{ "id": 1, "text": "在吗", "chatUserId": 7 }]),
    );
    h.mock
        .mock_data(HttpMethod::Put, "/chatInfo/updateRead/7", json!(null));
    h.mock.mock_data(HttpMethod::Post, "/chatInfo/add", json!(null));

    let chat = h.api.chat();
    let messages = chat.messages_with(7).await.unwrap();
    assert_eq!(messages[0].text.as_deref(), Some("在吗"));
    chat.mark_read(7).await.unwrap();
    chat.send(ChatInfo {
        chat_user_id: Some(7),
        text: Some("在".into()),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(h.mock.requests().len(), 3);
}

#[tokio::test]
async fn upload_sends_multipart_and_returns_url() {
    let h = harness();
    h.mock.mock_data(
        HttpMethod::Post,
        "/files/upload",
        json!("http://localhost:9090/files/download/1.png"),
    );

    let url = h
        .api
        .upload(FilePart::new("1.png", vec![1, 2, 3]).with_mime("image/png"))
        .await
        .unwrap();

    assert_eq!(url, "http://localhost:9090/files/download/1.png");
    match h.mock.last_request().unwrap().body {
        Some(RequestBody::Multipart(part)) => {
            assert_eq!(part.field, "file");
            assert_eq!(part.bytes, vec![1, 2, 3]);
        }
        other => panic!("expected multipart body, got {:?}", other),
    }
}
