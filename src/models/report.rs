// ============================================================================
// REPORTE - Estructuras compartidas con el backend (GET /reportes/)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Propietario asociado a la placa. Viene anidado bajo la clave
/// `propietario_id` (relación de la base de datos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propietario {
    pub nombre_completo: String,
}

/// Un reporte de infracción tal como lo devuelve el servidor.
/// Las columnas extra que agregue el backend se ignoran al deserializar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reporte {
    pub placa_detectada: String,
    /// NULL cuando la placa no corresponde a ningún propietario registrado
    pub propietario_id: Option<Propietario>,
    pub fecha_reporte: String,
    pub descripcion: String,
    pub url_foto_placa: String,
    pub url_foto_infraccion: String,
}

impl Reporte {
    /// Nombre del propietario, o el texto fijo cuando la relación viene NULL
    pub fn nombre_propietario(&self) -> &str {
        self.propietario_id
            .as_ref()
            .map(|p| p.nombre_completo.as_str())
            .unwrap_or("Propietario No Registrado")
    }
}

/// Envoltura de GET /reportes/. Todas las claves son opcionales porque los
/// errores HTTP llegan como {detail} y los 200 como {status, data, mensaje?}.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportListResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Reporte>>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

/// Resultado clasificado de una carga del listado. Se produce exactamente
/// uno por página y se descarta después de pintar la vista.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingOutcome {
    /// El servidor respondió success; cero o más reportes en orden del servidor
    Loaded(Vec<Reporte>),
    /// El servidor respondió, pero con fallo lógico o cuerpo indescifrable
    Failed { mensaje: String },
    /// La petición nunca llegó al servidor
    ConnectionError { mensaje: String },
}

impl ListingOutcome {
    /// Clasifica una respuesta que sí llegó del servidor
    pub fn classify(ok: bool, body: ReportListResponse) -> Self {
        if ok && body.status.as_deref() == Some("success") {
            return ListingOutcome::Loaded(body.data.unwrap_or_default());
        }

        let detalle = body
            .detail
            .or(body.mensaje)
            .unwrap_or_else(|| "Error desconocido".to_string());
        ListingOutcome::Failed {
            mensaje: format!("Error al cargar reportes: {}", detalle),
        }
    }

    /// Fallo de transporte: servidor apagado, red caída, IP incorrecta
    pub fn connection_error(server: &str) -> Self {
        ListingOutcome::ConnectionError {
            mensaje: format!(
                "Error de conexión: Asegúrate de que el servidor esté corriendo en {}.",
                server
            ),
        }
    }

    /// El servidor respondió pero el cuerpo no era JSON interpretable
    pub fn decode_failure() -> Self {
        ListingOutcome::Failed {
            mensaje: "Error al cargar reportes: Error desconocido".to_string(),
        }
    }
}

/// Solo se enlazan fotos con esquema http/https; cualquier otro esquema
/// (javascript:, data:, rutas relativas raras) se degrada a texto plano.
pub fn es_url_segura(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fecha del reporte en hora local del visor. Acepta ISO con zona horaria
/// o naive; si no se puede interpretar, se muestra tal cual llegó.
pub fn formatear_fecha(raw: &str) -> String {
    if let Ok(con_zona) = chrono::DateTime::parse_from_rfc3339(raw) {
        return con_zona
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M")
            .to_string();
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%d/%m/%Y %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reporte_de_prueba(placa: &str) -> Reporte {
        Reporte {
            placa_detectada: placa.to_string(),
            propietario_id: None,
            fecha_reporte: "2025-01-07T08:15:30".to_string(),
            descripcion: "Mal estacionado".to_string(),
            url_foto_placa: "https://storage.example.com/placa.jpg".to_string(),
            url_foto_infraccion: "https://storage.example.com/infraccion.jpg".to_string(),
        }
    }

    #[test]
    fn propietario_null_usa_texto_fijo() {
        let reporte = reporte_de_prueba("ABC123");
        assert_eq!(reporte.nombre_propietario(), "Propietario No Registrado");
    }

    #[test]
    fn propietario_presente_usa_su_nombre() {
        let mut reporte = reporte_de_prueba("ABC123");
        reporte.propietario_id = Some(Propietario {
            nombre_completo: "Juan Pérez".to_string(),
        });
        assert_eq!(reporte.nombre_propietario(), "Juan Pérez");
    }

    #[test]
    fn deserializa_reporte_con_propietario_null() {
        let json = r#"{
            "placa_detectada": "XYZ789",
            "propietario_id": null,
            "fecha_reporte": "2024-03-15T10:30:00+00:00",
            "descripcion": "Semáforo en rojo",
            "url_foto_placa": "https://storage.example.com/a.jpg",
            "url_foto_infraccion": "https://storage.example.com/b.jpg"
        }"#;
        let reporte: Reporte = serde_json::from_str(json).unwrap();
        assert_eq!(reporte.placa_detectada, "XYZ789");
        assert!(reporte.propietario_id.is_none());
    }

    #[test]
    fn deserializa_ignorando_columnas_extra() {
        let json = r#"{
            "id": 42,
            "created_at": "2024-03-15T10:30:00+00:00",
            "placa_detectada": "XYZ789",
            "propietario_id": {"nombre_completo": "Ana Ruiz", "email": "ana@example.com"},
            "fecha_reporte": "2024-03-15T10:30:00+00:00",
            "descripcion": "Exceso de velocidad",
            "url_foto_placa": "https://storage.example.com/a.jpg",
            "url_foto_infraccion": "https://storage.example.com/b.jpg"
        }"#;
        let reporte: Reporte = serde_json::from_str(json).unwrap();
        assert_eq!(reporte.nombre_propietario(), "Ana Ruiz");
    }

    #[test]
    fn classify_success_conserva_el_orden() {
        let body = ReportListResponse {
            status: Some("success".to_string()),
            data: Some(vec![reporte_de_prueba("AAA111"), reporte_de_prueba("BBB222")]),
            detail: None,
            mensaje: None,
        };
        match ListingOutcome::classify(true, body) {
            ListingOutcome::Loaded(reportes) => {
                assert_eq!(reportes[0].placa_detectada, "AAA111");
                assert_eq!(reportes[1].placa_detectada, "BBB222");
            }
            otro => panic!("se esperaba Loaded, llegó {:?}", otro),
        }
    }

    #[test]
    fn classify_success_sin_registros_es_lista_vacia() {
        let body = ReportListResponse {
            status: Some("success".to_string()),
            data: Some(vec![]),
            detail: None,
            mensaje: Some("No hay reportes registrados.".to_string()),
        };
        assert_eq!(ListingOutcome::classify(true, body), ListingOutcome::Loaded(vec![]));
    }

    #[test]
    fn classify_fallo_logico_usa_detail() {
        let body = ReportListResponse {
            status: None,
            data: None,
            detail: Some("Fallo al conectar con la base de datos para obtener reportes.".to_string()),
            mensaje: None,
        };
        match ListingOutcome::classify(false, body) {
            ListingOutcome::Failed { mensaje } => {
                assert!(mensaje.starts_with("Error al cargar reportes:"));
                assert!(mensaje.contains("base de datos"));
            }
            otro => panic!("se esperaba Failed, llegó {:?}", otro),
        }
    }

    #[test]
    fn classify_sin_detail_ni_mensaje_cae_en_texto_generico() {
        let body = ReportListResponse {
            status: Some("error".to_string()),
            data: None,
            detail: None,
            mensaje: None,
        };
        match ListingOutcome::classify(true, body) {
            ListingOutcome::Failed { mensaje } => {
                assert_eq!(mensaje, "Error al cargar reportes: Error desconocido");
            }
            otro => panic!("se esperaba Failed, llegó {:?}", otro),
        }
    }

    #[test]
    fn connection_error_nombra_al_servidor() {
        match ListingOutcome::connection_error("192.168.100.132:8000") {
            ListingOutcome::ConnectionError { mensaje } => {
                assert!(mensaje.contains("192.168.100.132:8000"));
                assert!(mensaje.starts_with("Error de conexión"));
            }
            otro => panic!("se esperaba ConnectionError, llegó {:?}", otro),
        }
    }

    #[test]
    fn urls_http_y_https_son_seguras() {
        assert!(es_url_segura("https://storage.example.com/foto.jpg"));
        assert!(es_url_segura("http://192.168.100.132:8000/foto.jpg"));
        assert!(es_url_segura("HTTPS://STORAGE.EXAMPLE.COM/FOTO.JPG"));
    }

    #[test]
    fn otros_esquemas_no_son_seguros() {
        assert!(!es_url_segura("javascript:alert(1)"));
        assert!(!es_url_segura("data:text/html,<script>alert(1)</script>"));
        assert!(!es_url_segura("ftp://servidor/foto.jpg"));
        assert!(!es_url_segura(""));
        assert!(!es_url_segura("  javascript:alert(1)"));
    }

    #[test]
    fn formatea_fecha_con_zona_horaria() {
        let salida = formatear_fecha("2024-03-15T10:30:00+00:00");
        // La hora exacta depende de la zona del visor, el mes y el año no
        assert!(salida.contains("/03/2024"), "salida inesperada: {}", salida);
    }

    #[test]
    fn formatea_fecha_naive() {
        assert_eq!(formatear_fecha("2025-01-07T08:15:30"), "07/01/2025 08:15");
    }

    #[test]
    fn formatea_fecha_con_fraccion_de_segundo() {
        assert_eq!(formatear_fecha("2025-01-07T08:15:30.123456"), "07/01/2025 08:15");
    }

    #[test]
    fn fecha_ilegible_se_muestra_tal_cual() {
        assert_eq!(formatear_fecha("ayer por la tarde"), "ayer por la tarde");
    }
}
