use crate::service::Service;
use std::fmt;

/// Failures that can occur while looking up a postal code.
///
/// None of these escape the fetch/decode layer: they are logged and turned
/// into an absent body or an empty string before reaching the race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Postal code does not match the `NNNNNNNN` / `NNNNN-NNN` format.
    InvalidCep(String),
    /// The shared HTTP client could not be created.
    ClientInit(String),
    /// The request could not be built (malformed URL).
    RequestBuild { service: Service, message: String },
    /// DNS, connection or other transport failure.
    Transport { service: Service, message: String },
    /// The per-request deadline elapsed.
    Timeout { service: Service, message: String },
    /// The service answered with something other than `200 OK`.
    Status { service: Service, status: u16 },
    /// The response body could not be read.
    BodyRead { service: Service, message: String },
    /// The body is not valid JSON for the expected record.
    Decode(String),
    /// The decoded record could not be serialized back to JSON.
    Encode(String),
}

impl LookupError {
    /// Classifies a `reqwest` failure raised while sending a request.
    pub fn from_send(service: Service, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout {
                service,
                message: err.to_string(),
            }
        } else if err.is_builder() {
            LookupError::RequestBuild {
                service,
                message: err.to_string(),
            }
        } else {
            LookupError::Transport {
                service,
                message: err.to_string(),
            }
        }
    }

    /// Classifies a `reqwest` failure raised while reading the body.
    pub fn from_body(service: Service, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout {
                service,
                message: err.to_string(),
            }
        } else {
            LookupError::BodyRead {
                service,
                message: err.to_string(),
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Timeout { .. })
    }

    /// The service the failure is attributed to, if any.
    pub fn service(&self) -> Option<Service> {
        match self {
            LookupError::RequestBuild { service, .. }
            | LookupError::Transport { service, .. }
            | LookupError::Timeout { service, .. }
            | LookupError::Status { service, .. }
            | LookupError::BodyRead { service, .. } => Some(*service),
            LookupError::InvalidCep(_)
            | LookupError::ClientInit(_)
            | LookupError::Decode(_)
            | LookupError::Encode(_) => None,
        }
    }
}

impl fmt::Display for LookupError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::InvalidCep(cep) => write!(f, "Invalid CEP: {:?}", cep),
            LookupError::ClientInit(msg) => write!(f, "Failed to create HTTP client: {}", msg),
            LookupError::RequestBuild { service, message } => {
                write!(f, "Failed to build {} request: {}", service, message)
            }
            LookupError::Transport { service, message } => {
                write!(f, "{} request failed: {}", service, message)
            }
            LookupError::Timeout { service, message } => {
                write!(f, "{} request timed out: {}", service, message)
            }
            LookupError::Status { service, status } => {
                write!(f, "{} returned status {}", service, status)
            }
            LookupError::BodyRead { service, message } => {
                write!(f, "Failed to read {} response body: {}", service, message)
            }
            LookupError::Decode(msg) => write!(f, "Failed to decode JSON: {}", msg),
            LookupError::Encode(msg) => write!(f, "Failed to encode JSON: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}
