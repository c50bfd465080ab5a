// ============================================================================
// ERRORES - Taxonomía única para transporte y controladores
// ============================================================================

use thiserror::Error;

/// Origen de un fallo HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// No hubo respuesta (red caída, CORS, URL inválida...)
    Network,
    /// El servidor respondió con un estado fuera de 2xx
    Status,
    /// La respuesta no tiene la forma esperada
    Decode,
}

/// Error HTTP normalizado. Los componentes solo necesitan `message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
    pub kind: HttpErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl HttpError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Network,
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Status,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Decode,
            status: None,
            message: message.into(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status, Some(code) if (400..500).contains(&code))
    }
}

/// Errores visibles en la interfaz
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Credenciales rechazadas: se muestra en el formulario, sin navegar
    #[error("{0}")]
    Auth(String),
    /// Fallo de red o del servidor: se muestra junto al panel afectado
    #[error("{0}")]
    Network(#[from] HttpError),
    /// Campos obligatorios del formulario
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Mensaje apto para mostrar al usuario
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(err) if err.kind == HttpErrorKind::Network => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            AppError::Network(err) if err.kind == HttpErrorKind::Decode => {
                "The server returned an unexpected response. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
