//! # Handlers do Painel de Livros (`/api/books`)
//!
//! CRUD de livros e capítulos sobre o [`BookCatalog`](crate::catalog::BookCatalog).
//! Ids desconhecidos viram 404; campos obrigatórios ausentes viram 400.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::state::AppState;
use crate::catalog::{Book, BookFilter, BookInput, Chapter, ChapterInput, Facets};
use crate::error::ApiResult;

/// GET `/api/books?search=&subject=&grade=`
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>,
) -> Json<Vec<Book>> {
    Json(state.catalog.list(&filter))
}

/// GET `/api/books/facets` — matérias e cursos para os filtros.
pub async fn facets(State(state): State<AppState>) -> Json<Facets> {
    Json(state.catalog.facets())
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Book>> {
    state.catalog.get(&id).map(Json)
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let book = state.catalog.add(input)?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> ApiResult<Json<Book>> {
    state.catalog.update(&id, input).map(Json)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    state.catalog.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_chapter(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ChapterInput>,
) -> ApiResult<(StatusCode, Json<Chapter>)> {
    let chapter = state.catalog.add_chapter(&id, input)?;
    Ok((StatusCode::CREATED, Json(chapter)))
}

pub async fn update_chapter(
    State(state): State<AppState>,
    Path((id, chapter_id)): Path<(String, String)>,
    Json(input): Json<ChapterInput>,
) -> ApiResult<Json<Chapter>> {
    state
        .catalog
        .update_chapter(&id, &chapter_id, input)
        .map(Json)
}

pub async fn delete_chapter(
    State(state): State<AppState>,
    Path((id, chapter_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.catalog.delete_chapter(&id, &chapter_id)?;
    Ok(StatusCode::NO_CONTENT)
}
