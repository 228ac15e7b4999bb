use crate::errors::LookupError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// The postal code looked up by the binary.
pub const DEFAULT_CEP: &str = "01153000";

fn cep_regex() -> &'static Regex {
    static CEP_RE: OnceLock<Regex> = OnceLock::new();
    CEP_RE.get_or_init(|| Regex::new(r"^(\d{5})-?(\d{3})$").expect("valid CEP regex"))
}

/// A Brazilian postal code normalized to eight digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

impl Cep {
    /// Parses `NNNNNNNN` or `NNNNN-NNN`, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let caps = cep_regex()
            .captures(raw.trim())
            .ok_or_else(|| LookupError::InvalidCep(raw.to_string()))?;

        Ok(Self(format!("{}{}", &caps[1], &caps[2])))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
