//! Interface de terminal do poddump — spinners e saída colorida.
//!
//! Usa as crates `indicatif` para spinners de progresso e `console` para
//! estilização com cores. O [`StepProgress`] acompanha visualmente cada
//! etapa do ciclo de captura no terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Indicador visual de progresso para uma etapa do ciclo.
///
/// Exibe um spinner animado enquanto a etapa bloqueia e uma mensagem
/// verde com checkmark na conclusão.
pub struct StepProgress {
    // Barra de progresso/spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para mensagens de conclusão.
    green: Style,
}

impl StepProgress {
    /// Inicia o spinner com a descrição da etapa.
    pub fn start(description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(description.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
        }
    }

    /// Finaliza o spinner e exibe a mensagem de conclusão em verde.
    pub fn done(&self, message: &str) {
        self.pb.finish_and_clear();
        println!("  {} {message}", self.green.apply_to("✓"));
    }
}

/// Imprime o link de download do arquivo enviado e o aviso de retenção.
pub fn print_link(link: &str) {
    println!();
    println!(
        "{} Link: {link}",
        Style::new().green().bold().apply_to("File uploaded successfully.")
    );
    println!(
        "{}",
        Style::new().yellow().apply_to("File will be deleted after 24 hours")
    );
}

/// Exibe uma falha fatal em vermelho no stderr.
pub fn print_failure(error: &anyhow::Error) {
    eprintln!("  {} {error:#}", Style::new().red().bold().apply_to("✗"));
}
