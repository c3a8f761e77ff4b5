//! Tipos de erro para o cliente da API Google Drive.
//!
//! Define [`DriveError`] com variantes para erros da API, falha de
//! autenticação e erros de rede. Usa `thiserror` para derivar `Display`
//! e `Error` automaticamente a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao interagir com a API do Google Drive.
///
/// As variantes cobrem as duas fases de uma chamada autenticada:
/// - obtenção do token ([`TokenExchange`](DriveError::TokenExchange),
///   [`InvalidKey`](DriveError::InvalidKey), [`Jwt`](DriveError::Jwt))
/// - a chamada em si ([`ApiError`](DriveError::ApiError),
///   [`NetworkError`](DriveError::NetworkError))
#[derive(Debug, Error)]
pub enum DriveError {
    /// Erro retornado pela API (ex.: 401 token expirado, 404 arquivo
    /// inexistente, 403 cota excedida). Contém o código de status HTTP
    /// e a mensagem de erro do corpo da resposta.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// O endpoint OAuth2 rejeitou a asserção JWT da service account.
    #[error("token exchange failed (status {status}): {message}")]
    TokenExchange { status: u16, message: String },

    /// O arquivo de credenciais não contém uma chave de service account válida.
    #[error("invalid service account key: {0}")]
    InvalidKey(String),

    /// Falha ao assinar a asserção JWT com a chave privada.
    #[error("JWT signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Falha de E/S ao ler o arquivo de credenciais ou o arquivo a enviar.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = DriveError::ApiError {
            status: 403,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "API error (status 403): quota exceeded");
    }

    #[test]
    fn token_exchange_display() {
        let err = DriveError::TokenExchange {
            status: 400,
            message: "invalid_grant".into(),
        };
        assert_eq!(
            err.to_string(),
            "token exchange failed (status 400): invalid_grant"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DriveError>();
    }
}
