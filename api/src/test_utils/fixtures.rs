//! Test fixtures
//!
//! Canned upstream payloads shared by service and router tests.

use crate::domain::ports::HttpResponse;

pub const VIACEP_HOST: &str = "viacep.com.br";
pub const WEATHERAPI_HOST: &str = "api.weatherapi.com";

/// ViaCEP answer for 01001-000 (Praça da Sé)
pub fn viacep_sao_paulo() -> HttpResponse {
    HttpResponse::new(
        200,
        r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP"
        }"#,
    )
}

/// ViaCEP answer for a well-formed but unknown code
pub fn viacep_not_found() -> HttpResponse {
    HttpResponse::new(200, r#"{"erro": "true"}"#)
}

/// WeatherAPI current conditions with the given Celsius temperature
pub fn weatherapi_current(temp_c: f64) -> HttpResponse {
    HttpResponse::new(
        200,
        format!(
            r#"{{"location": {{"name": "Sao Paulo"}}, "current": {{"temp_c": {temp_c:?}, "condition": {{"text": "Sunny"}}}}}}"#
        ),
    )
}
