// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use std::fmt;

use gloo_net::http::Request;
use web_sys::FormData;

use crate::config::CONFIG;
use crate::models::{ReportListResponse, SubmitReportResponse};

/// Fallo de una llamada al API, separado por capa
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// La petición nunca se completó (red caída, servidor apagado, CORS)
    Network(String),
    /// El servidor respondió pero el cuerpo no se pudo interpretar como JSON
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detalle) => write!(f, "Error de red: {}", detalle),
            ApiError::Decode(detalle) => write!(f, "Respuesta ilegible: {}", detalle),
        }
    }
}

/// Respuesta que sí llegó del servidor: estado de transporte + cuerpo decodificado.
/// La clasificación lógica (success/warning/error) la hace el viewmodel.
#[derive(Debug, Clone)]
pub struct HttpReply<T> {
    pub ok: bool,
    pub status: u16,
    pub body: T,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url().to_string(),
        }
    }

    /// Enviar un reporte de infracción como multipart/form-data.
    /// El FormData va directo como body; el navegador pone el Content-Type
    /// con el boundary correcto.
    pub async fn enviar_reporte(
        &self,
        form_data: FormData,
    ) -> Result<HttpReply<SubmitReportResponse>, ApiError> {
        let url = format!("{}/reportar-infraccion/", self.base_url);

        log::info!("📤 Enviando reporte a {}", url);

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| ApiError::Network(format!("No se pudo preparar la petición: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .json::<SubmitReportResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(HttpReply { ok, status, body })
    }

    /// Obtener el listado completo de reportes
    pub async fn obtener_reportes(&self) -> Result<HttpReply<ReportListResponse>, ApiError> {
        let url = format!("{}/reportes/", self.base_url);

        log::info!("📥 Cargando reportes desde {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .json::<ReportListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(HttpReply { ok, status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_se_muestra_con_su_detalle() {
        let red = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(red.to_string(), "Error de red: Failed to fetch");

        let cuerpo = ApiError::Decode("EOF while parsing".to_string());
        assert!(cuerpo.to_string().starts_with("Respuesta ilegible:"));
    }
}
