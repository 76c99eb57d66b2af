//! # Handlers HTTP — Chat e Conhecimento
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página do tutor (Maud) |
//! | `chat` | POST | HTMX fragment | Turno do chat via formulário |
//! | `api_chat` | POST | JSON | `{ message }` → `{ response, timestamp }` |
//! | `knowledge` | GET | JSON | Navegador do corpus (`?q=`) |
//! | `status` | GET | JSON | Nome da app + contadores |
//!
//! O `timestamp` da resposta é gerado aqui, não no tutor.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use maud::html;
use serde::{Deserialize, Serialize};

use super::state::AppState;
use super::templates;
use crate::core::KnowledgeEntry;
use crate::error::{ApiError, ApiResult};

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// Corpo de `POST /api/chat`.
///
/// `message` é opcional na desserialização para que a ausência vire
/// [`ApiError::MissingMessage`] (400) e não uma rejeição genérica do Axum.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Dados do formulário HTMX (campo `message`).
#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct KnowledgeQuery {
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KnowledgeListing {
    pub query: Option<String>,
    pub total: usize,
    pub results: Vec<KnowledgeEntry>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub app_name: String,
    pub topics: usize,
    pub users: usize,
    pub books: usize,
}

/// GET `/` — Página do tutor.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    markup_to_html(templates::full_page(
        &state.config.app_name,
        state.tutor.entries(),
    ))
}

/// POST `/chat` — Turno do chat via HTMX.
///
/// Mensagem vazia devolve fragmento vazio (nada é anexado ao chat).
pub async fn chat(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ChatForm>,
) -> Html<String> {
    let user_text = form.message.trim().to_string();
    if user_text.is_empty() {
        return markup_to_html(html! {});
    }
    let answer = state.tutor.reply(&user_text);
    markup_to_html(templates::exchange(&user_text, &answer))
}

/// POST `/api/chat` — Chat JSON.
///
/// # Erros
///
/// - JSON malformado → 400
/// - `message` ausente ou vazio → 400 `Message is required`
pub async fn api_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let message = req
        .message
        .filter(|m| !m.is_empty())
        .ok_or(ApiError::MissingMessage)?;

    let response = state.tutor.reply(&message);
    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now(),
    }))
}

/// GET `/api/knowledge?q=` — Navegador do corpus.
///
/// Sem `q` (ou com `q` em branco) lista tudo; com `q` aplica a mesma
/// busca do tutor, mas sem o limite de três resultados.
pub async fn knowledge(
    State(state): State<AppState>,
    Query(params): Query<KnowledgeQuery>,
) -> Json<KnowledgeListing> {
    let query = params.q.filter(|q| !q.trim().is_empty());
    let results: Vec<KnowledgeEntry> = match query.as_deref() {
        Some(q) => state.tutor.browse(q).into_iter().cloned().collect(),
        None => state.tutor.entries().to_vec(),
    };
    Json(KnowledgeListing {
        query,
        total: results.len(),
        results,
    })
}

/// GET `/api/status`
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        app_name: state.config.app_name.clone(),
        topics: state.tutor.corpus_size(),
        users: state.users.len(),
        books: state.catalog.list(&Default::default()).len(),
    })
}
