//! HTTP implementation of the gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Gateway, GatewayResult};
use crate::config::Config;
use crate::errors::{GatewayError, GatewayErrorBody};
use crate::models::{
    AdminSnapshot, ApplicationForm, ApplicationReceipt, Category, ContactAck, ContactMessage,
    Exam, HomeStats, ResultRecord,
};

/// Gateway reached over HTTP under a common path prefix.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for `base_url` (for example `http://host/api`).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> GatewayResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a gateway from the loaded configuration.
    pub fn from_config(config: &Config) -> GatewayResult<Self> {
        Self::new(config.api_base.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        decode_accepted(response).await
    }
}

/// Turn a gateway response into a record or a classified error.
async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes)?);
    }
    Err(rejection(status, &bytes))
}

/// Like `decode`, but any 2xx counts as accepted.
///
/// An empty or unexpected body on success yields `T::default()`; the gateway
/// has already acted on the request at that point.
async fn decode_accepted<T: DeserializeOwned + Default>(response: Response) -> GatewayResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        return Err(rejection(status, &bytes));
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    match serde_json::from_slice(&bytes) {
        Ok(record) => Ok(record),
        Err(e) => {
            tracing::warn!("Accepted with an unreadable body ({}): {}", status, e);
            Ok(T::default())
        }
    }
}

fn rejection(status: StatusCode, bytes: &[u8]) -> GatewayError {
    let message = serde_json::from_slice::<GatewayErrorBody>(bytes)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    if status == StatusCode::NOT_FOUND {
        GatewayError::NotFound(message)
    } else {
        GatewayError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn home_stats(&self) -> GatewayResult<HomeStats> {
        self.get_json("stats").await
    }

    async fn list_exams(&self, category: Category) -> GatewayResult<Vec<Exam>> {
        self.get_json(&format!("exams/{}", category.as_path())).await
    }

    async fn exam(&self, exam_id: &str) -> GatewayResult<Exam> {
        self.get_json(&format!("exam/{}", exam_id)).await
    }

    async fn apply(
        &self,
        exam_id: &str,
        form: &ApplicationForm,
    ) -> GatewayResult<ApplicationReceipt> {
        self.post_json(&format!("exam/{}/apply", exam_id), form).await
    }

    async fn result(&self, roll_number: &str, exam_id: &str) -> GatewayResult<ResultRecord> {
        self.get_json(&format!("result/{}/{}", roll_number, exam_id))
            .await
    }

    async fn contact(&self, message: &ContactMessage) -> GatewayResult<ContactAck> {
        self.post_json("contact", message).await
    }

    async fn admin_dashboard(&self) -> GatewayResult<AdminSnapshot> {
        self.get_json("admin/dashboard").await
    }
}
