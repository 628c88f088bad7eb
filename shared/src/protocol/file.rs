use super::{ApiRequest, FilePart, RequestDescriptor};

/// Upload a file; the envelope data is the public URL of the stored file.
#[derive(Debug, Clone)]
pub struct UploadFile(pub FilePart);

impl ApiRequest for UploadFile {
    type Response = String;

    fn descriptor(&self) -> serde_json::Result<RequestDescriptor> {
        Ok(RequestDescriptor::post("/files/upload").with_file(self.0.clone()))
    }
}
