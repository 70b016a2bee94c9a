use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use staffhub_domain::{DataServiceConfig, Result, StaffHubError};
use tracing::debug;

use crate::errors::InfraError;

const BASE_BACKOFF: Duration = Duration::from_millis(200);

/// HTTP transport for the HR data service.
///
/// Wraps `reqwest` with bounded retries and exponential backoff on 5xx
/// responses and transient transport failures, and maps every non-success
/// status onto the domain error taxonomy before the caller sees a
/// response: 404 is a missing record, any other 4xx a rejected payload,
/// 5xx a data-service fault.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    max_attempts: usize,
    base_backoff: Duration,
}

impl HttpClient {
    /// Build a transport from data-service connection settings.
    ///
    /// # Errors
    /// Returns a domain error when the underlying `reqwest` client cannot
    /// be constructed.
    pub fn from_config(config: &DataServiceConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("staffhub/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()
            .map_err(|err| StaffHubError::from(InfraError::from(err)))?;

        Ok(Self {
            client,
            max_attempts: (config.max_attempts as usize).max(1),
            base_backoff: BASE_BACKOFF,
        })
    }

    /// Fetch a JSON document and deserialize it.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.execute(self.client.get(url)).await?;
        response
            .json()
            .await
            .map_err(|e| StaffHubError::DataService(format!("failed to parse {url}: {e}")))
    }

    /// Send a record as JSON (POST or PUT); the response body is discarded.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<()> {
        self.execute(self.client.request(method, url).json(body)).await?;
        Ok(())
    }

    /// Delete a record.
    pub async fn delete(&self, url: &str) -> Result<()> {
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let attempts = self.max_attempts;

        for attempt in 0..attempts {
            let cloned = builder.try_clone().ok_or_else(|| {
                StaffHubError::Internal(
                    "request body cannot be cloned; buffer the body to enable retries".into(),
                )
            })?;

            let request =
                cloned.build().map_err(|err| StaffHubError::from(InfraError::from(err)))?;
            let method = request.method().clone();
            let url = request.url().clone();
            debug!(attempt = attempt + 1, %method, %url, "data service request");

            match self.client.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    debug!(attempt = attempt + 1, %method, %url, %status, "data service response");

                    if status.is_server_error() && attempt + 1 < attempts {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    return check_status(response).await;
                }
                Err(err) => {
                    debug!(attempt = attempt + 1, %method, %url, error = %err, "data service request failed");

                    if attempt + 1 < attempts && should_retry_error(&err) {
                        self.sleep_with_backoff(attempt + 1).await;
                        continue;
                    }

                    return Err(StaffHubError::from(InfraError::from(err)));
                }
            }
        }

        Err(StaffHubError::Internal(
            "transport exhausted retries without producing a result".into(),
        ))
    }

    fn backoff_delay(&self, retry_number: usize) -> Duration {
        let shift = retry_number.saturating_sub(1).min(8) as u32;
        self.base_backoff.saturating_mul(1u32 << shift)
    }

    async fn sleep_with_backoff(&self, retry_number: usize) {
        let delay = self.backoff_delay(retry_number);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Map a non-success status onto the domain error, carrying the response
/// body in the message when the service provides one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();
    let message = if body.is_empty() {
        format!("{url} returned status {status}")
    } else {
        format!("{url} returned status {status}: {body}")
    };

    Err(match status {
        StatusCode::NOT_FOUND => StaffHubError::NotFound(message),
        s if s.is_client_error() => StaffHubError::InvalidInput(message),
        _ => StaffHubError::DataService(message),
    })
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_request() || err.is_connect()
}
