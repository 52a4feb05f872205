use async_trait::async_trait;
use reqwest::{multipart, Client};
use tokio::time::Duration;

use crate::config::Config;
use crate::errors::AppResult;
use crate::queue::QueuedFile;

/// Moves a file's bytes to the server and reports the terminal HTTP
/// status. The status is returned raw; deciding what counts as success
/// is the orchestrator's job, and the response body is never parsed.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn upload(&self, file: &QueuedFile) -> AppResult<u16>;
}

/// Transport that POSTs a multipart form to a fixed endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(file: &QueuedFile) -> AppResult<multipart::Form> {
        let mime_type = match file.name.rsplit('.').next().map(str::to_lowercase).as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            _ => "application/octet-stream",
        };

        let part = multipart::Part::bytes(file.payload.as_ref().clone())
            .file_name(file.name.clone())
            .mime_str(mime_type)?;

        Ok(multipart::Form::new()
            .part("file", part)
            .text("filename", file.name.clone())
            .text("filesize", file.size.to_string()))
    }
}

#[async_trait]
impl UploadTransport for HttpTransport {
    async fn upload(&self, file: &QueuedFile) -> AppResult<u16> {
        let form = Self::build_form(file)?;

        log::debug!(
            "POST {} with {} ({} bytes)",
            self.endpoint,
            file.name,
            file.size
        );

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status().as_u16();
        log::debug!("Endpoint answered {} for {}", status, file.name);

        Ok(status)
    }
}
