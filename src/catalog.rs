//! # Catálogo de Livros e Capítulos
//!
//! Administração em memória dos livros oficiais do centro. Os livros
//! mantêm a ordem de inserção; ids novos são UUID v4.
//!
//! ## Filtro da listagem
//!
//! ```text
//! search   → título OU autor contém o termo (case-insensitive)
//! subject  → igualdade exata, "all" ou ausente = qualquer
//! grade    → igualdade exata, "all" ou ausente = qualquer
//! ```
//!
//! Os três critérios são combinados com E.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub content: String,
    pub page_number: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub status: BookStatus,
    pub chapters: Vec<Chapter>,
}

/// Campos editáveis de um livro (criação e edição).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookInput {
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub status: BookStatus,
    /// Na edição, `None` preserva os capítulos existentes.
    pub chapters: Option<Vec<ChapterInput>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChapterInput {
    pub title: String,
    pub content: String,
    pub page_number: u32,
}

/// Critérios da listagem (query string de `GET /api/books`).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookFilter {
    pub search: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
}

impl BookFilter {
    fn accepts(&self, book: &Book) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                book.title.to_lowercase().contains(&term)
                    || book.author.to_lowercase().contains(&term)
            }
            _ => true,
        };
        matches_search
            && facet_matches(self.subject.as_deref(), &book.subject)
            && facet_matches(self.grade.as_deref(), &book.grade)
    }
}

fn facet_matches(wanted: Option<&str>, value: &str) -> bool {
    match wanted {
        None | Some("") | Some("all") => true,
        Some(w) => w == value,
    }
}

/// Matérias e cursos distintos, na ordem em que aparecem.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Facets {
    pub subjects: Vec<String>,
    pub grades: Vec<String>,
}

pub struct BookCatalog {
    books: RwLock<Vec<Book>>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub fn list(&self, filter: &BookFilter) -> Vec<Book> {
        self.books
            .read()
            .iter()
            .filter(|b| filter.accepts(b))
            .cloned()
            .collect()
    }

    pub fn facets(&self) -> Facets {
        let books = self.books.read();
        let mut facets = Facets::default();
        for b in books.iter() {
            if !facets.subjects.contains(&b.subject) {
                facets.subjects.push(b.subject.clone());
            }
            if !facets.grades.contains(&b.grade) {
                facets.grades.push(b.grade.clone());
            }
        }
        facets
    }

    pub fn get(&self, id: &str) -> ApiResult<Book> {
        self.books
            .read()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| ApiError::BookNotFound(id.to_string()))
    }

    pub fn add(&self, input: BookInput) -> ApiResult<Book> {
        validate_book(&input)?;
        let book = Book {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            subject: input.subject,
            grade: input.grade,
            author: input.author,
            isbn: input.isbn,
            description: input.description,
            status: input.status,
            chapters: input
                .chapters
                .unwrap_or_default()
                .into_iter()
                .map(new_chapter)
                .collect(),
        };
        self.books.write().push(book.clone());
        tracing::info!(book = %book.id, title = %book.title, "Livro adicionado");
        Ok(book)
    }

    /// Substitui os campos editáveis, preservando o id.
    pub fn update(&self, id: &str, input: BookInput) -> ApiResult<Book> {
        validate_book(&input)?;
        let mut books = self.books.write();
        let book = find_mut(&mut books, id)?;
        book.title = input.title;
        book.subject = input.subject;
        book.grade = input.grade;
        book.author = input.author;
        book.isbn = input.isbn;
        book.description = input.description;
        book.status = input.status;
        if let Some(chapters) = input.chapters {
            book.chapters = chapters.into_iter().map(new_chapter).collect();
        }
        tracing::info!(book = %id, "Livro atualizado");
        Ok(book.clone())
    }

    pub fn delete(&self, id: &str) -> ApiResult<()> {
        let mut books = self.books.write();
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(ApiError::BookNotFound(id.to_string()));
        }
        tracing::info!(book = %id, "Livro removido");
        Ok(())
    }

    pub fn add_chapter(&self, book_id: &str, input: ChapterInput) -> ApiResult<Chapter> {
        validate_chapter(&input)?;
        let mut books = self.books.write();
        let book = find_mut(&mut books, book_id)?;
        let chapter = new_chapter(input);
        book.chapters.push(chapter.clone());
        Ok(chapter)
    }

    pub fn update_chapter(
        &self,
        book_id: &str,
        chapter_id: &str,
        input: ChapterInput,
    ) -> ApiResult<Chapter> {
        validate_chapter(&input)?;
        let mut books = self.books.write();
        let book = find_mut(&mut books, book_id)?;
        let chapter = book
            .chapters
            .iter_mut()
            .find(|c| c.id == chapter_id)
            .ok_or_else(|| ApiError::ChapterNotFound(chapter_id.to_string()))?;
        chapter.title = input.title;
        chapter.content = input.content;
        chapter.page_number = input.page_number;
        Ok(chapter.clone())
    }

    pub fn delete_chapter(&self, book_id: &str, chapter_id: &str) -> ApiResult<()> {
        let mut books = self.books.write();
        let book = find_mut(&mut books, book_id)?;
        let before = book.chapters.len();
        book.chapters.retain(|c| c.id != chapter_id);
        if book.chapters.len() == before {
            return Err(ApiError::ChapterNotFound(chapter_id.to_string()));
        }
        Ok(())
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn find_mut<'a>(books: &'a mut [Book], id: &str) -> ApiResult<&'a mut Book> {
    books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or_else(|| ApiError::BookNotFound(id.to_string()))
}

fn new_chapter(input: ChapterInput) -> Chapter {
    Chapter {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        content: input.content,
        page_number: input.page_number,
    }
}

fn validate_book(input: &BookInput) -> ApiResult<()> {
    if input.title.trim().is_empty()
        || input.subject.trim().is_empty()
        || input.grade.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Título, materia y curso son obligatorios".to_string(),
        ));
    }
    if let Some(chapters) = &input.chapters {
        chapters.iter().try_for_each(validate_chapter)?;
    }
    Ok(())
}

fn validate_chapter(input: &ChapterInput) -> ApiResult<()> {
    if input.title.trim().is_empty() {
        return Err(ApiError::Validation(
            "El capítulo necesita un título".to_string(),
        ));
    }
    Ok(())
}

/// Livros de exemplo com que o painel de administração inicia.
pub fn sample_books() -> Vec<Book> {
    fn chapter(id: &str, title: &str, content: &str, page_number: u32) -> Chapter {
        Chapter {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            page_number,
        }
    }

    vec![
        Book {
            id: "1".to_string(),
            title: "Matemáticas 3º ESO".to_string(),
            subject: "Matemáticas".to_string(),
            grade: "3º ESO".to_string(),
            author: "Editorial Santillana".to_string(),
            isbn: "978-84-294-8765-4".to_string(),
            description: "Libro oficial de matemáticas para 3º de ESO que cubre álgebra, geometría y estadística.".to_string(),
            status: BookStatus::Active,
            chapters: vec![
                chapter("1-1", "Números racionales e irracionales", "Los números racionales son aquellos que pueden expresarse como fracción...", 12),
                chapter("1-2", "Ecuaciones de primer grado", "Una ecuación de primer grado es una igualdad algebraica...", 45),
            ],
        },
        Book {
            id: "2".to_string(),
            title: "Biología y Geología 4º ESO".to_string(),
            subject: "Ciencias Naturales".to_string(),
            grade: "4º ESO".to_string(),
            author: "Editorial Anaya".to_string(),
            isbn: "978-84-678-3421-7".to_string(),
            description: "Texto completo de biología y geología para 4º de ESO con enfoque en evolución y genética.".to_string(),
            status: BookStatus::Active,
            chapters: vec![
                chapter("2-1", "La célula y sus componentes", "La célula es la unidad básica de la vida...", 8),
                chapter("2-2", "Genética y herencia", "Los genes son las unidades de herencia...", 78),
            ],
        },
        Book {
            id: "3".to_string(),
            title: "Historia de España 2º Bachillerato".to_string(),
            subject: "Historia".to_string(),
            grade: "2º Bachillerato".to_string(),
            author: "Editorial Vicens Vives".to_string(),
            isbn: "978-84-316-9876-2".to_string(),
            description: "Historia contemporánea de España desde el siglo XIX hasta la actualidad.".to_string(),
            status: BookStatus::Active,
            chapters: vec![chapter(
                "3-1",
                "La Guerra Civil Española",
                "La Guerra Civil Española (1936-1939) fue un conflicto...",
                156,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::with_books(sample_books())
    }

    fn input(title: &str, subject: &str, grade: &str) -> BookInput {
        BookInput {
            title: title.into(),
            subject: subject.into(),
            grade: grade.into(),
            author: "Editorial SM".into(),
            ..BookInput::default()
        }
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_lists_everything_in_order() {
        assert_eq!(ids(&catalog().list(&BookFilter::default())), vec!["1", "2", "3"]);
    }

    #[test]
    fn search_matches_title_or_author() {
        let c = catalog();
        let by_title = BookFilter {
            search: Some("HISTORIA".into()),
            ..BookFilter::default()
        };
        assert_eq!(ids(&c.list(&by_title)), vec!["3"]);

        let by_author = BookFilter {
            search: Some("anaya".into()),
            ..BookFilter::default()
        };
        assert_eq!(ids(&c.list(&by_author)), vec!["2"]);
    }

    #[test]
    fn facets_filter_and_all_wildcard() {
        let c = catalog();
        let f = BookFilter {
            subject: Some("all".into()),
            grade: Some("3º ESO".into()),
            ..BookFilter::default()
        };
        assert_eq!(ids(&c.list(&f)), vec!["1"]);

        let none = BookFilter {
            search: Some("matemáticas".into()),
            subject: Some("Historia".into()),
            ..BookFilter::default()
        };
        assert!(c.list(&none).is_empty());
    }

    #[test]
    fn facets_are_distinct_in_first_seen_order() {
        let c = catalog();
        c.add(input("Álgebra", "Matemáticas", "4º ESO")).unwrap();
        let f = c.facets();
        assert_eq!(f.subjects, vec!["Matemáticas", "Ciencias Naturales", "Historia"]);
        assert_eq!(f.grades, vec!["3º ESO", "4º ESO", "2º Bachillerato"]);
    }

    #[test]
    fn add_assigns_new_id_and_chapters() {
        let c = catalog();
        let mut i = input("Física 1º Bachillerato", "Física", "1º Bachillerato");
        i.chapters = Some(vec![ChapterInput {
            title: "Cinemática".into(),
            content: "Estudio del movimiento".into(),
            page_number: 10,
        }]);
        let book = c.add(i).unwrap();
        assert!(!["1", "2", "3"].contains(&book.id.as_str()));
        assert_eq!(book.chapters.len(), 1);
        assert_eq!(c.get(&book.id).unwrap(), book);
    }

    #[test]
    fn add_requires_title_subject_grade() {
        let c = catalog();
        let err = c.add(input("", "Física", "1º ESO")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(c.list(&BookFilter::default()).len(), 3);
    }

    #[test]
    fn update_keeps_id_and_chapters_when_omitted() {
        let c = catalog();
        let mut i = input("Matemáticas 3º ESO (2ª ed.)", "Matemáticas", "3º ESO");
        i.status = BookStatus::Inactive;
        let updated = c.update("1", i).unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.status, BookStatus::Inactive);
        assert_eq!(updated.chapters.len(), 2);
    }

    #[test]
    fn unknown_book_is_not_found() {
        let c = catalog();
        assert!(matches!(c.get("99"), Err(ApiError::BookNotFound(_))));
        assert!(matches!(c.delete("99"), Err(ApiError::BookNotFound(_))));
        assert!(matches!(
            c.update("99", input("x", "y", "z")),
            Err(ApiError::BookNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_book() {
        let c = catalog();
        c.delete("2").unwrap();
        assert_eq!(ids(&c.list(&BookFilter::default())), vec!["1", "3"]);
    }

    #[test]
    fn chapter_lifecycle() {
        let c = catalog();
        let ch = c
            .add_chapter(
                "3",
                ChapterInput {
                    title: "La Transición".into(),
                    content: "De la dictadura a la democracia".into(),
                    page_number: 210,
                },
            )
            .unwrap();
        assert_eq!(c.get("3").unwrap().chapters.len(), 2);

        let renamed = c
            .update_chapter(
                "3",
                &ch.id,
                ChapterInput {
                    title: "La Transición española".into(),
                    content: String::new(),
                    page_number: 212,
                },
            )
            .unwrap();
        assert_eq!(renamed.id, ch.id);
        assert_eq!(renamed.page_number, 212);

        c.delete_chapter("3", &ch.id).unwrap();
        assert!(matches!(
            c.delete_chapter("3", &ch.id),
            Err(ApiError::ChapterNotFound(_))
        ));
        assert_eq!(c.get("3").unwrap().chapters.len(), 1);
    }

    #[test]
    fn chapter_serializes_camel_case() {
        let json = serde_json::to_value(&sample_books()[0].chapters[0]).unwrap();
        assert_eq!(json["pageNumber"], 12);
        assert_eq!(serde_json::to_value(BookStatus::Active).unwrap(), "active");
    }
}
