// ============================================================================
// CONFIGURACIÓN - Resuelta en tiempo de compilación
// ============================================================================
// El único valor externo es la URL base del API. El resto son constantes
// internas del panel agrupadas aquí para no repetirlas por los módulos.
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    /// Productos por página en la tabla
    pub page_size: u32,
    /// Tamaño de la muestra usada para las estadísticas del dashboard
    pub stats_sample_size: u32,
    pub low_stock_threshold: u32,
    pub query: QueryConfig,
    pub token_storage_key: String,
    /// `expiresInMins` enviado en el login (None = valor por defecto del servidor)
    pub login_expires_in_mins: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    pub retry: u32,
    pub retry_delay_ms: u32,
    pub refetch_on_focus: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            retry: 1,
            retry_delay_ms: 1000,
            refetch_on_focus: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            enable_logging: true,
            page_size: 10,
            stats_sample_size: 100,
            low_stock_threshold: 10,
            query: QueryConfig::default(),
            token_storage_key: "accessToken".to_string(),
            login_expires_in_mins: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            login_expires_in_mins: option_env!("LOGIN_EXPIRES_IN_MINS")
                .and_then(|v| v.parse().ok()),
            ..defaults
        }
    }

    /// Nivel de log según `ENABLE_LOGGING`
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
