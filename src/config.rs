//! Configuração do poddump carregada do ambiente.
//!
//! Os valores vêm de variáveis de ambiente, populadas a partir de um
//! arquivo `.env` local pelo `dotenvy` na inicialização. Valores ausentes
//! ou vazios usam defaults sensíveis.

use std::path::PathBuf;

// Caminho padrão do arquivo de credenciais da service account.
fn default_service_account_file() -> String {
    "devops-infra.json".to_string()
}

// Pasta de destino padrão no Google Drive.
fn default_folder_id() -> String {
    "1UQIThvghtfhvUdLFn-DAvcKj".to_string()
}

// Diretório local padrão para os arquivos temporários de dump.
fn default_output_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

/// Configuração de nível superior de um ciclo de captura.
#[derive(Debug, Clone)]
pub struct Config {
    /// Caminho do arquivo JSON de credenciais da service account.
    pub service_account_file: String,

    /// Identificador da pasta de destino no Google Drive.
    pub folder_id: String,

    /// Diretório local onde os dumps e o arquivo comprimido são gravados.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_account_file: default_service_account_file(),
            folder_id: default_folder_id(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Carrega a configuração das variáveis `SERVICE_ACCOUNT_FILE` e
    /// `FOLDER_ID`. Variáveis ausentes ou vazias mantêm os defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("SERVICE_ACCOUNT_FILE")
            && !path.is_empty()
        {
            config.service_account_file = path;
        }
        if let Ok(id) = std::env::var("FOLDER_ID")
            && !id.is_empty()
        {
            config.folder_id = id;
        }

        config
    }
}
