// ============================================================================
// REPORT LIST VIEWMODEL - Lógica del listado de reportes
// ============================================================================

use crate::config::CONFIG;
use crate::models::ListingOutcome;
use crate::services::{ApiClient, ApiError};

pub struct ReportListViewModel {
    api_client: ApiClient,
}

impl ReportListViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Carga el listado una vez y clasifica el resultado. Nunca falla.
    pub async fn cargar(&self) -> ListingOutcome {
        match self.api_client.obtener_reportes().await {
            Ok(reply) => {
                if !reply.ok {
                    log::warn!("⚠️ [REPORTES] El servidor respondió HTTP {}", reply.status);
                }
                let outcome = ListingOutcome::classify(reply.ok, reply.body);
                match &outcome {
                    ListingOutcome::Loaded(reportes) => {
                        log::info!("✅ [REPORTES] {} reportes recibidos", reportes.len());
                    }
                    ListingOutcome::Failed { mensaje } => {
                        log::error!("❌ [REPORTES] {}", mensaje);
                    }
                    ListingOutcome::ConnectionError { mensaje } => {
                        log::error!("❌ [REPORTES] {}", mensaje);
                    }
                }
                outcome
            }
            Err(ApiError::Decode(detalle)) => {
                log::error!("❌ [REPORTES] Respuesta ilegible del servidor: {}", detalle);
                ListingOutcome::decode_failure()
            }
            Err(ApiError::Network(detalle)) => {
                log::error!("❌ [REPORTES] Error de conexión: {}", detalle);
                ListingOutcome::connection_error(CONFIG.server_display())
            }
        }
    }
}
