use crate::service::CEP_PLACEHOLDER;
use std::time::Duration;

pub const BRASIL_API_URL: &str = "https://brasilapi.com.br/api/cep/v1/{cep}";
pub const VIA_CEP_URL: &str = "https://viacep.com.br/ws/{cep}/json";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);
pub const RACE_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Config {
    /// BrasilAPI URL template, `{cep}` is replaced with the postal code.
    pub brasil_api_url: String,
    /// ViaCEP URL template, `{cep}` is replaced with the postal code.
    pub via_cep_url: String,
    /// Postal code to look up, validated by `Cep::parse`.
    pub cep: String,
    /// Deadline for a single GET, including reading the body.
    pub request_timeout: Duration,
    /// How long the race waits for the first answer.
    pub race_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brasil_api_url: BRASIL_API_URL.to_string(),
            via_cep_url: VIA_CEP_URL.to_string(),
            cep: crate::cep::DEFAULT_CEP.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            race_timeout: RACE_TIMEOUT,
        }
    }
}

impl Config {
    /// Loads the defaults, letting `BRASIL_API_URL` and `VIA_CEP_URL` point
    /// the lookups at other endpoints. Postal code and timeouts are fixed.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            brasil_api_url: std::env::var("BRASIL_API_URL")
                .map(|url| validate_template("BRASIL_API_URL", url))
                .unwrap_or_else(|_| Ok(defaults.brasil_api_url.clone()))?,
            via_cep_url: std::env::var("VIA_CEP_URL")
                .map(|url| validate_template("VIA_CEP_URL", url))
                .unwrap_or_else(|_| Ok(defaults.via_cep_url.clone()))?,
            ..defaults
        };

        tracing::debug!("BrasilAPI URL template: {}", config.brasil_api_url);
        tracing::debug!("ViaCEP URL template: {}", config.via_cep_url);

        Ok(config)
    }
}

fn validate_template(name: &str, url: String) -> anyhow::Result<String> {
    if url.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", name);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", name);
    }
    if !url.contains(CEP_PLACEHOLDER) {
        anyhow::bail!("{} must contain the {} placeholder", name, CEP_PLACEHOLDER);
    }
    url::Url::parse(&url.replace(CEP_PLACEHOLDER, crate::cep::DEFAULT_CEP))
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", name, e))?;

    Ok(url)
}
