//! Tipos de dados para a API Google Drive v3 e para o token OAuth2.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato dos endpoints `files` do Drive e do endpoint de token.

use serde::{Deserialize, Serialize};

/// Um arquivo remoto retornado pela listagem da pasta no Drive.
///
/// Somente os campos pedidos em `fields=files(id, name, createdTime)`
/// estão presentes na resposta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFile {
    /// Identificador único do arquivo no Drive.
    pub id: String,
    /// Nome do arquivo como exibido na pasta.
    pub name: String,
    /// Carimbo de criação em RFC 3339 (ex.: "2026-08-06T10:15:00.000Z").
    /// Serializado como `"createdTime"` no JSON via `serde(rename)`.
    #[serde(rename = "createdTime")]
    pub created_time: String,
}

/// Resposta do endpoint de listagem (`GET /files`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileList {
    /// Arquivos na pasta consultada. Campo ausente quando a pasta está vazia.
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Resposta mínima da criação de um arquivo (`fields=id`).
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Identificador do objeto recém-criado.
    pub id: String,
}

/// Resposta da troca de token OAuth2 no `token_uri` da service account.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Token de acesso usado como bearer nas chamadas à API.
    pub access_token: String,
}
