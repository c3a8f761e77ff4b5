//! Execução de comandos remotos em pods via kubectl.
//!
//! O [`PodTarget`] encapsula o par namespace/pod e oferece as operações de
//! exec e cópia de arquivos usadas na captura de dumps. Todos os comandos
//! são bloqueantes e uma saída não-zero interrompe o ciclo.

use std::path::Path;

use tokio::process::Command;

use crate::error::{DumpError, ensure_success};

/// Par namespace/pod endereçável no cluster, com o binário configurável.
pub struct PodTarget {
    // Binário invocado; "kubectl" fora dos testes.
    program: String,
    namespace: String,
    pod: String,
}

impl PodTarget {
    /// Cria um alvo usando o `kubectl` do PATH.
    pub fn new(namespace: impl Into<String>, pod: impl Into<String>) -> Self {
        Self::with_program("kubectl", namespace, pod)
    }

    /// Cria um alvo com um binário alternativo (útil para testes).
    pub fn with_program(
        program: impl Into<String>,
        namespace: impl Into<String>,
        pod: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            namespace: namespace.into(),
            pod: pod.into(),
        }
    }

    /// Nome do pod alvo.
    pub fn pod(&self) -> &str {
        &self.pod
    }

    /// Executa um comando dentro do pod, herdando stdout/stderr do terminal.
    pub async fn exec(&self, command: &[&str]) -> Result<(), DumpError> {
        let status = Command::new(&self.program)
            .args(["exec", "-n", &self.namespace, &self.pod, "--"])
            .args(command)
            .status()
            .await?;
        ensure_success(&self.program, status)
    }

    /// Executa um comando dentro do pod capturando o stdout completo.
    pub async fn exec_capture(&self, command: &[&str]) -> Result<String, DumpError> {
        let output = Command::new(&self.program)
            .args(["exec", "-n", &self.namespace, &self.pod, "--"])
            .args(command)
            .output()
            .await?;
        ensure_success(&self.program, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Copia um arquivo do pod para o sistema de arquivos local (`kubectl cp`).
    pub async fn copy_from(&self, remote: &str, local: &Path) -> Result<(), DumpError> {
        let source = format!("{}/{}:{}", self.namespace, self.pod, remote);
        let status = Command::new(&self.program)
            .arg("cp")
            .arg(&source)
            .arg(local)
            .status()
            .await?;
        ensure_success(&self.program, status)
    }
}
