use std::time::Duration;

use anyhow::Context as _;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::domain::repository::ObjectStorage;
use crate::error::PortalError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the external object store.
///
/// Objects live at `{base}/object/{bucket}/{path}` and are publicly served
/// from `{base}/object/public/{bucket}/{path}`.
#[derive(Clone)]
pub struct HttpObjectStore {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl HttpObjectStore {
    pub fn new(base_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build object storage client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            http,
        })
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/object/public/{bucket}/{path}", self.base_url)
    }
}

impl ObjectStorage for HttpObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, PortalError> {
        let url = format!("{}/object/{bucket}/{path}", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .context("object storage upload")?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PortalError::UploadFailed(format!(
                "storage returned {status}: {detail}"
            )));
        }
        Ok(self.public_url(bucket, path))
    }
}
