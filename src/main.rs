#![allow(rustdoc::broken_intra_doc_links)]
//! # EduCenter Tutor
//!
//! Servidor do tutor educacional: chat por palavra-chave sobre os livros
//! oficiais do centro, login de demonstração e painel de livros.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Carrega .env (dotenvy)
//!   ├── Configura tracing/logging
//!   ├── Carrega AppConfig (defaults → TOML → EDU__*)
//!   ├── Monta AppState (corpus, usuários, catálogo)
//!   ├── Cria Router
//!   └── Serve até Ctrl+C
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug EDU__PORT=8080 cargo run
//! ```

/// Módulo `auth` — usuários de demonstração em memória.
mod auth;

/// Módulo `catalog` — livros e capítulos em memória.
mod catalog;

/// Módulo `config` — carregamento da configuração.
mod config;

/// Módulo `core` — corpus de conhecimento e busca.
mod core;

/// Módulo `error` — erros da borda HTTP.
mod error;

/// Módulo `responder` — composição das respostas do tutor.
mod responder;

/// Módulo `tutor` — busca + composição por mensagem.
mod tutor;

/// Módulo `web` — servidor axum, handlers e templates.
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env é opcional
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    let addr = config.socket_addr()?;
    tracing::info!(app = %config.app_name, "🎓 Iniciando tutor");

    let state = AppState::from_config(config);
    tracing::info!(
        topics = state.tutor.corpus_size(),
        users = state.users.len(),
        "Estado montado"
    );

    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Falha ao escutar em {}", addr))?;
    tracing::info!("🚀 Servidor em http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Servidor encerrado com erro")?;

    tracing::info!("Servidor encerrado");
    Ok(())
}

/// Resolve quando o processo recebe Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Falha ao instalar handler de Ctrl+C");
        std::future::pending::<()>().await;
    }
}
