use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;
use schand_shared::protocol::{FilePart, UploadFile};

impl<C: HttpClient> ApiClient<C> {
    /// 上传文件，返回可访问的 URL
    pub async fn upload(&self, file: FilePart) -> ApiResult<String> {
        self.call(&UploadFile(file)).await
    }
}
