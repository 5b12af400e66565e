//! # FairHire AI — Servidor da Entrevista Adaptativa
//!
//! ```text
//! main()
//!   ├── Carrega Config do ambiente
//!   ├── Configura tracing/logging
//!   ├── Monta AppState (sessão em memória + broadcast SSE)
//!   ├── Cria Router
//!   └── Serve em INTERVIEW_ADDR (default 0.0.0.0:3000)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! INTERVIEW_ADDR=127.0.0.1:8080 cargo run
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use adaptive_interview::config::Config;
use adaptive_interview::web::{self, state::AppState};

/// Capacidade do canal SSE. Assinantes lentos perdem eventos antigos.
const EVENT_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Configuração inválida")?;

    // RUST_LOG tem prioridade; senão usa INTERVIEW_LOG (default "info").
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("FairHire AI starting");

    let addr = config.addr;
    tracing::info!(assets = %config.assets_dir.display(), "Servindo assets estáticos");

    let state = AppState::new(config, EVENT_CAPACITY);
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Falha ao fazer bind em {addr}"))?;
    tracing::info!(%addr, "Server running");

    axum::serve(listener, app).await?;

    Ok(())
}
