use crate::config::Config;
use crate::errors::LookupError;
use crate::service::Service;
use reqwest::{StatusCode, Url};

/// HTTP client shared by both lookup tasks.
#[derive(Clone)]
pub struct CepClient {
    client: reqwest::Client,
}

impl CepClient {
    /// Creates a new `CepClient` whose requests are bounded by
    /// `config.request_timeout`.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| LookupError::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the raw body of a `200 OK` response.
    ///
    /// # Arguments
    ///
    /// * `service` - The service being contacted, used to label failures.
    /// * `url` - The fully-formed request URL.
    pub async fn try_fetch(&self, service: Service, url: &str) -> Result<Vec<u8>, LookupError> {
        let url = Url::parse(url).map_err(|e| LookupError::RequestBuild {
            service,
            message: format!("{} ({})", e, url),
        })?;

        tracing::debug!("Fetching {} from {}", service, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::from_send(service, e))?;

        if response.status() != StatusCode::OK {
            return Err(LookupError::Status {
                service,
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::from_body(service, e))?;

        Ok(body.to_vec())
    }

    /// Like [`CepClient::try_fetch`], but logs the failure and returns `None`.
    ///
    /// Timeouts are logged as warnings, everything else as errors.
    pub async fn fetch(&self, service: Service, url: &str) -> Option<Vec<u8>> {
        match self.try_fetch(service, url).await {
            Ok(body) => Some(body),
            Err(e) if e.is_timeout() => {
                tracing::warn!("{}", e);
                None
            }
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = CepClient::new(&Config::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_url_is_request_build_error() {
        let client = CepClient::new(&Config::default()).unwrap();
        let err = client
            .try_fetch(Service::ViaCep, "not a url")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LookupError::RequestBuild {
                service: Service::ViaCep,
                ..
            }
        ));
        assert!(client.fetch(Service::ViaCep, "not a url").await.is_none());
    }
}
