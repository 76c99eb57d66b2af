//! Erros da borda HTTP.
//!
//! O núcleo (busca + composição) não falha; tudo que pode dar errado
//! acontece na validação da requisição ou nos cadastros em memória.
//! Cada variante mapeia para um status HTTP e um corpo de texto simples.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Message is required")]
    MissingMessage,

    #[error("Solicitud inválida: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("Email o contraseña incorrectos")]
    InvalidCredentials,

    #[error("Este email ya está registrado")]
    EmailTaken,

    #[error("Libro no encontrado: {0}")]
    BookNotFound(String),

    #[error("Capítulo no encontrado: {0}")]
    ChapterNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingMessage | ApiError::BadRequest(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::BookNotFound(_) | ApiError::ChapterNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = %status, error = %self, "Requisição rejeitada");
        (status, self.to_string()).into_response()
    }
}
