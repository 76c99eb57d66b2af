//! # Módulo Web — Interface HTTP do Tutor
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Browser (HTMX) / clientes JSON                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                                   │
//! │  ├── GET  /                          → página do tutor      │
//! │  ├── POST /chat                      → HTMX fragment        │
//! │  ├── POST /api/chat                  → JSON                 │
//! │  ├── GET  /api/knowledge             → JSON (corpus)        │
//! │  ├── GET  /api/status                → JSON                 │
//! │  ├── POST /api/auth/login|register   → JSON                 │
//! │  └──      /api/books[/...]           → CRUD livros/capítulos│
//! ├─────────────────────────────────────────────────────────────┤
//! │ tower-http: CorsLayer + TraceLayer                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Página, chat e corpus |
//! | [`account`] | Login e cadastro |
//! | [`books`] | Painel de livros |
//! | [`templates`] | Templates Maud |

pub mod account;
pub mod books;
pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página + HTMX ─────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        // ── API JSON ──────────────────────────────────────────
        .route("/api/chat", post(handlers::api_chat))
        .route("/api/knowledge", get(handlers::knowledge))
        .route("/api/status", get(handlers::status))
        .route("/api/auth/login", post(account::login))
        .route("/api/auth/register", post(account::register))
        // ── Livros ────────────────────────────────────────────
        .route("/api/books", get(books::list).post(books::create))
        .route("/api/books/facets", get(books::facets))
        .route(
            "/api/books/{id}",
            get(books::get).put(books::update).delete(books::delete),
        )
        .route("/api/books/{id}/chapters", post(books::add_chapter))
        .route(
            "/api/books/{id}/chapters/{chapter_id}",
            put(books::update_chapter).delete(books::delete_chapter),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
