use crate::cep::Cep;
use crate::config::Config;
use std::fmt;

/// Placeholder substituted with the postal code in URL templates.
pub const CEP_PLACEHOLDER: &str = "{cep}";

/// The two postal-code lookup services raced against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// `brasilapi.com.br`, CEP v1 endpoint.
    BrasilApi,
    /// `viacep.com.br` JSON web service.
    ViaCep,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::BrasilApi => "BrasilAPI",
            Service::ViaCep => "ViaCEP",
        }
    }

    pub fn template<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Service::BrasilApi => &config.brasil_api_url,
            Service::ViaCep => &config.via_cep_url,
        }
    }

    /// Builds the request URL for `cep` from this service's template.
    pub fn url(&self, config: &Config, cep: &Cep) -> String {
        self.template(config).replace(CEP_PLACEHOLDER, cep.as_str())
    }
}

impl fmt::Display for Service {
    /// Formats the service by its display name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = Config::default();
        let cep = Cep::parse("01153000").unwrap();

        assert_eq!(
            Service::BrasilApi.url(&config, &cep),
            "https://brasilapi.com.br/api/cep/v1/01153000"
        );
        assert_eq!(
            Service::ViaCep.url(&config, &cep),
            "https://viacep.com.br/ws/01153000/json"
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Service::BrasilApi.to_string(), "BrasilAPI");
        assert_eq!(Service::ViaCep.to_string(), "ViaCEP");
    }
}
