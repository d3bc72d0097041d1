use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://192.168.100.132:8000".to_string(),
            api_url_production: "https://api.reportes-matriculas.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or("http://192.168.100.132:8000").to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or("https://api.reportes-matriculas.example.com").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Obtiene la URL base del API según el entorno actual
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Dirección del servidor tal como se muestra en los mensajes de
    /// error de conexión (sin el esquema http/https)
    pub fn server_display(&self) -> &str {
        let url = self.api_url();
        url.strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_usa_development_por_defecto() {
        let config = AppConfig::default();
        assert_eq!(config.api_url(), "http://192.168.100.132:8000");
    }

    #[test]
    fn api_url_cambia_en_produccion() {
        let mut config = AppConfig::default();
        config.environment = "production".to_string();
        assert_eq!(config.api_url(), config.api_url_production);
    }

    #[test]
    fn entorno_desconocido_cae_en_development() {
        let mut config = AppConfig::default();
        config.environment = "staging".to_string();
        assert_eq!(config.api_url(), config.api_url_development);
    }

    #[test]
    fn server_display_quita_el_esquema() {
        let config = AppConfig::default();
        assert_eq!(config.server_display(), "192.168.100.132:8000");

        let mut prod = AppConfig::default();
        prod.environment = "production".to_string();
        assert!(!prod.server_display().starts_with("https://"));
    }
}
