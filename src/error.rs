//! Error types for the movements screen

use thiserror::Error;

/// Banner prefix for a failed load
pub const LOAD_CONTEXT: &str = "Error al cargar los datos";
/// Banner prefix for a failed create/update
pub const SAVE_CONTEXT: &str = "Error al guardar el movimiento";
/// Banner prefix for a failed delete
pub const DELETE_CONTEXT: &str = "Error al eliminar el movimiento";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid request body: {0}")]
    Encode(String),

    #[error("invalid date-time: {0}")]
    InvalidTimestamp(String),

    #[error("{0}")]
    Validation(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Build the single human-readable string shown in the error banner
pub fn user_message(context: &str, error: &ApiError) -> String {
    format!("{}: {}", context, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefixes_context() {
        let err = ApiError::Status { status: 500, body: "ORA-00001".into() };
        assert_eq!(
            user_message(SAVE_CONTEXT, &err),
            "Error al guardar el movimiento: HTTP 500: ORA-00001"
        );
    }

    #[test]
    fn test_encode_error_is_not_reported_as_response() {
        let err = ApiError::Encode("key must be a string".into());
        assert_eq!(
            user_message(SAVE_CONTEXT, &err),
            "Error al guardar el movimiento: invalid request body: key must be a string"
        );
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = ApiError::Validation("Seleccione un contenedor".into());
        assert_eq!(err.to_string(), "Seleccione un contenedor");
    }
}
