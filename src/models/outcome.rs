// ============================================================================
// SUBMISSION OUTCOME - Clasificación del envío de un reporte
// ============================================================================

use serde::Deserialize;

/// Respuesta de POST /reportar-infraccion/. Todas las claves son opcionales:
/// los 200 traen {status, placa_detectada, mensaje} y los errores HTTP {detail}.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReportResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub placa_detectada: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Resultado de un intento de envío. Se produce exactamente uno por envío
/// y se descarta después de actualizar la línea de estado.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Placa encontrada y propietario notificado
    Success { placa: String, mensaje: String },
    /// Reporte guardado, pero sin propietario a quien notificar
    Warning { placa: String, mensaje: String },
    /// Fallo lógico del servidor o fallo de conexión
    Error { mensaje: String },
}

impl SubmissionOutcome {
    /// Clasifica una respuesta que sí llegó del servidor. Cualquier status
    /// distinto de success/warning se trata como error, incluido el caso en
    /// que el backend devuelve 200 con status "error".
    pub fn classify(ok: bool, body: SubmitReportResponse) -> Self {
        if ok {
            let status = body.status.as_deref();
            if status == Some("success") || status == Some("warning") {
                let es_success = status == Some("success");
                let placa = body
                    .placa_detectada
                    .unwrap_or_else(|| "NO_DETECTADA".to_string());
                let mensaje = body
                    .mensaje
                    .unwrap_or_else(|| "Sin mensaje del servidor.".to_string());
                return if es_success {
                    SubmissionOutcome::Success { placa, mensaje }
                } else {
                    SubmissionOutcome::Warning { placa, mensaje }
                };
            }
        }

        let detalle = body
            .detail
            .or(body.mensaje)
            .unwrap_or_else(|| "Error desconocido".to_string());
        SubmissionOutcome::Error {
            mensaje: format!("Error del servidor: {}", detalle),
        }
    }

    /// Fallo de transporte: la petición nunca se completó
    pub fn connection_error(server: &str) -> Self {
        SubmissionOutcome::Error {
            mensaje: format!(
                "Error de conexión. Asegúrate de que el servidor ({}) esté corriendo y la IP sea correcta.",
                server
            ),
        }
    }

    /// El servidor respondió pero el cuerpo no era JSON interpretable
    pub fn decode_failure() -> Self {
        SubmissionOutcome::Error {
            mensaje: "Error del servidor: Error desconocido".to_string(),
        }
    }

    /// Clase CSS que colorea la línea de estado
    pub fn css_class(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success { .. } => "success",
            SubmissionOutcome::Warning { .. } => "warning",
            SubmissionOutcome::Error { .. } => "error",
        }
    }

    /// Texto que ve el usuario en la línea de estado
    pub fn mensaje_usuario(&self) -> String {
        match self {
            SubmissionOutcome::Success { placa, mensaje }
            | SubmissionOutcome::Warning { placa, mensaje } => {
                format!("Placa detectada: {}. Mensaje del servidor: {}", placa, mensaje)
            }
            SubmissionOutcome::Error { mensaje } => mensaje.clone(),
        }
    }

    /// El formulario solo se limpia cuando el reporte quedó registrado
    pub fn resets_form(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Success { .. } | SubmissionOutcome::Warning { .. }
        )
    }
}
