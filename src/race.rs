//! Races BrasilAPI against ViaCEP for a single postal code.
//!
//! Each service is queried from its own task which fetches, decodes and hands
//! the rendered JSON over a oneshot channel. The first channel to deliver, or
//! the race timeout, decides the outcome. Tasks still running at that point
//! are aborted.

use crate::cep::Cep;
use crate::client::CepClient;
use crate::config::Config;
use crate::formatter::body_to_json;
use crate::models::{BrasilApiAddress, ViaCepAddress};
use crate::service::Service;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Result of a race. The string is the winner's indented JSON, empty when
/// its fetch or decode failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    /// BrasilAPI answered first.
    BrasilApi(String),
    /// ViaCEP answered first.
    ViaCep(String),
    /// Neither answered within the race timeout.
    Timeout,
}

impl RaceOutcome {
    pub fn winner(&self) -> Option<Service> {
        match self {
            RaceOutcome::BrasilApi(_) => Some(Service::BrasilApi),
            RaceOutcome::ViaCep(_) => Some(Service::ViaCep),
            RaceOutcome::Timeout => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            RaceOutcome::BrasilApi(json) | RaceOutcome::ViaCep(json) => Some(json),
            RaceOutcome::Timeout => None,
        }
    }
}

/// Renders exactly what the binary prints on stdout.
impl fmt::Display for RaceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.winner(), self.body()) {
            (Some(service), Some(json)) => write!(f, "Response from {}:\n{}", service, json),
            _ => f.write_str("timeout"),
        }
    }
}

fn spawn_lookup<T>(
    client: CepClient,
    service: Service,
    url: String,
) -> (JoinHandle<()>, oneshot::Receiver<String>)
where
    T: DeserializeOwned + Serialize + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let body = client.fetch(service, &url).await;
        let json = body_to_json::<T>(body.as_deref());

        // The receiver is gone once another branch has won.
        if tx.send(json).is_err() {
            tracing::debug!("{} answered after the race was decided", service);
        }
    });

    (handle, rx)
}

/// Queries both services for `cep` and returns whichever answers first,
/// or [`RaceOutcome::Timeout`] after `config.race_timeout`.
pub async fn race(client: &CepClient, config: &Config, cep: &Cep) -> RaceOutcome {
    let deadline = tokio::time::sleep(config.race_timeout);
    tokio::pin!(deadline);

    let (brasil_task, brasil_rx) = spawn_lookup::<BrasilApiAddress>(
        client.clone(),
        Service::BrasilApi,
        Service::BrasilApi.url(config, cep),
    );
    let (via_cep_task, via_cep_rx) = spawn_lookup::<ViaCepAddress>(
        client.clone(),
        Service::ViaCep,
        Service::ViaCep.url(config, cep),
    );

    // The deadline is polled first so it wins ties. A receiver resolving to
    // `Err` means its task died without sending; that branch is disabled and
    // the others keep racing.
    let outcome = tokio::select! {
        biased;
        _ = &mut deadline => RaceOutcome::Timeout,
        Ok(json) = brasil_rx => RaceOutcome::BrasilApi(json),
        Ok(json) = via_cep_rx => RaceOutcome::ViaCep(json),
    };

    // An answer observed once the deadline has passed is too late, even if
    // the timer has not fired yet.
    let outcome = if Instant::now() >= deadline.deadline() {
        RaceOutcome::Timeout
    } else {
        outcome
    };

    brasil_task.abort();
    via_cep_task.abort();

    match outcome.winner() {
        Some(service) => tracing::info!("{} answered first for CEP {}", service, cep),
        None => tracing::warn!(
            "No answer for CEP {} within {:?}",
            cep,
            config.race_timeout
        ),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_winner() {
        let outcome = RaceOutcome::ViaCep("{\n \"cep\": \"01153-000\"\n}".to_string());
        assert_eq!(
            outcome.to_string(),
            "Response from ViaCEP:\n{\n \"cep\": \"01153-000\"\n}"
        );
    }

    #[test]
    fn test_display_empty_body_keeps_header() {
        let outcome = RaceOutcome::BrasilApi(String::new());
        assert_eq!(outcome.to_string(), "Response from BrasilAPI:\n");
        assert_eq!(outcome.winner(), Some(Service::BrasilApi));
    }

    #[test]
    fn test_display_timeout() {
        assert_eq!(RaceOutcome::Timeout.to_string(), "timeout");
        assert_eq!(RaceOutcome::Timeout.body(), None);
    }
}
