use serde::{Deserialize, Serialize};

// ============ BrasilAPI ============

/// Address returned by `GET /api/cep/v1/{cep}` on BrasilAPI.
///
/// Missing keys decode as empty strings and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrasilApiAddress {
    pub cep: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    /// Upstream provider BrasilAPI resolved the CEP with.
    pub service: String,
}

// ============ ViaCEP ============

/// Address returned by `GET /ws/{cep}/json` on ViaCEP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViaCepAddress {
    pub cep: String,
    /// Street.
    pub logradouro: String,
    pub complemento: String,
    /// Neighborhood.
    pub bairro: String,
    /// City.
    pub localidade: String,
    /// State abbreviation.
    pub uf: String,
    /// IBGE municipality code.
    pub ibge: String,
    /// GIA fiscal code (São Paulo only).
    pub gia: String,
    /// Telephone area code.
    pub ddd: String,
    /// SIAFI municipality code.
    pub siafi: String,
}
