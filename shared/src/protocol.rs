use crate::{
    Address, Admin, Category, Circles, Collect, Comment, Feedback, Goods, Help, Likes, Notice,
    Orders, PageInfo, PageQuery, Posts, User,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

mod chat;
mod community;
mod file;
mod market;
mod news;
mod web;

pub use chat::*;
pub use community::*;
pub use file::*;
pub use market::*;
pub use news::*;
pub use web::*;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

// =========================================================
// Request Descriptor
// =========================================================

/// A file sent as one part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: "file".to_string(),
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(FilePart),
}

/// Everything needed to issue one backend call, relative to the base URL.
///
/// Built per call and never stored. Auth headers are not part of it:
/// they are added by the client when the request is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Flattens a serializable parameter object into query pairs.
    pub fn with_query<T: Serialize + ?Sized>(mut self, params: &T) -> serde_json::Result<Self> {
        self.query.extend(query_pairs(params)?);
        Ok(self)
    }

    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> serde_json::Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    pub fn with_file(mut self, part: FilePart) -> Self {
        self.body = Some(RequestBody::Multipart(part));
        self
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }
}

/// Turns a parameter object into `key=value` pairs the way the browser client
/// did: `null` fields are dropped, scalars are stringified, arrays repeat the
/// key, nested objects are sent as JSON text.
pub fn query_pairs<T: Serialize + ?Sized>(params: &T) -> serde_json::Result<Vec<(String, String)>> {
    use serde::ser::Error;
    use serde_json::Value;

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }

    let object = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(serde_json::Error::custom(format!(
                "query parameters must be an object, got {}",
                other
            )));
        }
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::Array(items) => {
                pairs.extend(items.iter().filter_map(scalar).map(|v| (key.clone(), v)));
            }
            other => {
                if let Some(v) = scalar(&other) {
                    pairs.push((key, v));
                }
            }
        }
    }
    Ok(pairs)
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The `data` type inside the success envelope.
    type Response: DeserializeOwned;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor>;
}

// =========================================================
// Standard resource endpoints
// =========================================================

/// A backend resource exposing the standard endpoint set under one prefix:
/// `add`, `update`, `delete/{id}`, `delete/batch`, `selectById/{id}`,
/// `selectAll`, `selectPage`.
///
/// The entity doubles as the filter object for `selectAll` / `selectPage`.
pub trait Resource: Serialize + DeserializeOwned + Default {
    /// Path prefix, e.g. `/goods`.
    const PREFIX: &'static str;

    /// Batch delete sends the id list as the body of a DELETE request.
    fn delete_batch(ids: &[i64]) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::delete(format!("{}/delete/batch", Self::PREFIX)).with_json(ids)
    }
}

macro_rules! resources {
    ($($ty:ty => $prefix:literal),* $(,)?) => {
        $(
            impl Resource for $ty {
                const PREFIX: &'static str = $prefix;
            }
        )*
    };
}

resources! {
    User => "/user",
    Admin => "/admin",
    Goods => "/goods",
    Orders => "/orders",
    Posts => "/posts",
    Help => "/help",
    Notice => "/notice",
    Feedback => "/feedback",
    Address => "/address",
    Category => "/category",
    Circles => "/circles",
    Collect => "/collect",
    Likes => "/likes",
}

impl Resource for Comment {
    const PREFIX: &'static str = "/comment";

    fn delete_batch(ids: &[i64]) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::delete("/comment/deleteBatch")
            .with_json(&serde_json::json!({ "ids": ids }))
    }
}

/// Create
#[derive(Debug, Clone)]
pub struct Add<T>(pub T);

impl<T: Resource> ApiRequest for Add<T> {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::post(format!("{}/add", T::PREFIX)).with_json(&self.0)
    }
}

/// Update by the id carried inside the entity
#[derive(Debug, Clone)]
pub struct Update<T>(pub T);

impl<T: Resource> ApiRequest for Update<T> {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::put(format!("{}/update", T::PREFIX)).with_json(&self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteById<T> {
    pub id: i64,
    _resource: PhantomData<fn() -> T>,
}

impl<T> DeleteById<T> {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> ApiRequest for DeleteById<T> {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::delete(format!(
            "{}/delete/{}",
            T::PREFIX,
            self.id
        )))
    }
}

#[derive(Debug, Clone)]
pub struct DeleteBatch<T> {
    pub ids: Vec<i64>,
    _resource: PhantomData<fn() -> T>,
}

impl<T> DeleteBatch<T> {
    pub fn new(ids: impl Into<Vec<i64>>) -> Self {
        Self {
            ids: ids.into(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> ApiRequest for DeleteBatch<T> {
    type Response = ();

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        T::delete_batch(&self.ids)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SelectById<T> {
    pub id: i64,
    _resource: PhantomData<fn() -> T>,
}

impl<T> SelectById<T> {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> ApiRequest for SelectById<T> {
    type Response = T;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::get(format!(
            "{}/selectById/{}",
            T::PREFIX,
            self.id
        )))
    }
}

/// List everything matching the filter entity
#[derive(Debug, Clone, Default)]
pub struct SelectAll<T>(pub T);

impl<T: Resource> ApiRequest for SelectAll<T> {
    type Response = Vec<T>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get(format!("{}/selectAll", T::PREFIX)).with_query(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectPage<T>(pub PageQuery<T>);

impl<T: Resource> ApiRequest for SelectPage<T> {
    type Response = PageInfo<T>;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        RequestDescriptor::get(format!("{}/selectPage", T::PREFIX)).with_query(&self.0)
    }
}
