//! CEP service
//!
//! Resolves a Brazilian postal code to its locality through ViaCEP.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::domain::entities::{Cep, Locality};
use crate::domain::ports::HttpClient;
use crate::error::CepError;

pub const DEFAULT_CEP_URL: &str = "https://viacep.com.br/ws/{cep}/json/";

/// ViaCEP lookup response. Only the fields we consume.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    #[serde(default, deserialize_with = "deserialize_erro_flag")]
    erro: bool,
}

/// ViaCEP has returned `"erro": true` and `"erro": "true"` over time.
fn deserialize_erro_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Text(s)) => s.eq_ignore_ascii_case("true"),
        None => false,
    })
}

/// Service for resolving postal codes
pub struct CepService<H>
where
    H: HttpClient,
{
    http: Arc<H>,
    url_template: String,
}

impl<H> CepService<H>
where
    H: HttpClient,
{
    pub fn new(http: Arc<H>) -> Self {
        Self::with_url_template(http, DEFAULT_CEP_URL.to_string())
    }

    /// `url_template` must contain a `{cep}` placeholder
    pub fn with_url_template(http: Arc<H>, url_template: String) -> Self {
        Self { http, url_template }
    }

    /// Resolve a raw postal code to its locality
    ///
    /// Malformed codes are rejected before any network call. ViaCEP answers
    /// 400 for codes it considers malformed, which is classified the same way.
    pub async fn resolve(&self, code: &str) -> Result<Locality, CepError> {
        let cep = Cep::parse(code).ok_or(CepError::InvalidFormat)?;

        let url = self.url_template.replace("{cep}", cep.as_str());
        let response = self.http.get(&url).await?;

        if response.is_bad_request() {
            return Err(CepError::InvalidFormat);
        }

        let parsed: ViaCepResponse = serde_json::from_slice(&response.body)?;

        if parsed.erro {
            return Err(CepError::NotFound);
        }

        let locality = Locality::new(parsed.localidade).ok_or(CepError::NotFound)?;
        tracing::debug!(cep = %cep, locality = %locality, "Resolved CEP");

        Ok(locality)
    }
}
