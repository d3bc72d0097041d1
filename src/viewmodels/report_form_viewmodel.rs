// ============================================================================
// REPORT FORM VIEWMODEL - Lógica del envío de reportes
// ============================================================================
// Orquesta el servicio HTTP y clasifica el resultado; SIN tocar el DOM
// ============================================================================

use web_sys::FormData;

use crate::config::CONFIG;
use crate::models::SubmissionOutcome;
use crate::services::{ApiClient, ApiError};

pub struct ReportFormViewModel {
    api_client: ApiClient,
}

impl ReportFormViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Envía el formulario y clasifica el resultado. Nunca falla: todos los
    /// caminos terminan en un outcome que la vista puede pintar.
    pub async fn enviar(&self, form_data: FormData) -> SubmissionOutcome {
        match self.api_client.enviar_reporte(form_data).await {
            Ok(reply) => {
                if !reply.ok {
                    log::warn!("⚠️ [REPORTE] El servidor respondió HTTP {}", reply.status);
                }
                let outcome = SubmissionOutcome::classify(reply.ok, reply.body);
                match &outcome {
                    SubmissionOutcome::Success { placa, .. } => {
                        log::info!("✅ [REPORTE] Reporte enviado, placa {}", placa);
                    }
                    SubmissionOutcome::Warning { placa, .. } => {
                        log::warn!("⚠️ [REPORTE] Guardado sin propietario a quien notificar, placa {}", placa);
                    }
                    SubmissionOutcome::Error { mensaje } => {
                        log::error!("❌ [REPORTE] {}", mensaje);
                    }
                }
                outcome
            }
            Err(ApiError::Decode(detalle)) => {
                log::error!("❌ [REPORTE] Respuesta ilegible del servidor: {}", detalle);
                SubmissionOutcome::decode_failure()
            }
            Err(ApiError::Network(detalle)) => {
                log::error!("❌ [REPORTE] Error de conexión: {}", detalle);
                SubmissionOutcome::connection_error(CONFIG.server_display())
            }
        }
    }
}
