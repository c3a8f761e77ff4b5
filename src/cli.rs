//! Interface de linha de comando do poddump baseada em clap.
//!
//! Define a struct [`Cli`] com os dois argumentos posicionais obrigatórios
//! (namespace e pod) que endereçam o contêiner alvo da captura.

use clap::Parser;

/// poddump — captura de heap/thread dumps de pods Java no cluster.
#[derive(Debug, Parser)]
#[command(name = "poddump", version, about)]
pub struct Cli {
    /// Namespace do cluster onde o pod está em execução.
    pub namespace: String,

    /// Nome do pod alvo (o processo Java deve ser o PID 1 do contêiner).
    pub pod: String,
}
