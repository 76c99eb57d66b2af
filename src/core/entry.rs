//! # KnowledgeEntry — Unidade de Conteúdo Educacional
//!
//! Cada [`KnowledgeEntry`] é um registro estático extraído dos livros
//! oficiais do centro: título, matéria, curso e o texto do conteúdo.
//! As entradas são compiladas no binário (`&'static str`) e nunca mudam
//! durante a execução.
//!
//! ## Matérias
//!
//! | Variante | Rótulo (serializado) |
//! |----------|----------------------|
//! | [`Subject::Mathematics`] | Matemáticas |
//! | [`Subject::NaturalSciences`] | Ciencias Naturales |
//! | [`Subject::History`] | Historia |
//! | [`Subject::Literature`] | Lengua y Literatura |
//! | [`Subject::Chemistry`] | Química |

use serde::Serialize;

/// Matéria de uma entrada do corpus.
///
/// O rótulo em espanhol é o que aparece nas respostas e o que participa
/// da busca por substring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Subject {
    #[serde(rename = "Matemáticas")]
    Mathematics,
    #[serde(rename = "Ciencias Naturales")]
    NaturalSciences,
    #[serde(rename = "Historia")]
    History,
    #[serde(rename = "Lengua y Literatura")]
    Literature,
    #[serde(rename = "Química")]
    Chemistry,
}

impl Subject {
    /// Rótulo exibido ao usuário.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Matemáticas",
            Subject::NaturalSciences => "Ciencias Naturales",
            Subject::History => "Historia",
            Subject::Literature => "Lengua y Literatura",
            Subject::Chemistry => "Química",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Registro imutável do corpus de conhecimento.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KnowledgeEntry {
    /// Identificador estável ("1".."6" no corpus embutido).
    pub id: &'static str,
    /// Título do tema (ex: "La fotosíntesis").
    pub title: &'static str,
    /// Matéria à qual o tema pertence.
    pub subject: Subject,
    /// Curso (ex: "3º ESO", "2º Bachillerato").
    pub grade: &'static str,
    /// Texto integral do conteúdo.
    pub content: &'static str,
}

impl KnowledgeEntry {
    /// Verifica se a consulta (já em minúsculas) aparece no título,
    /// no conteúdo ou no rótulo da matéria.
    ///
    /// A comparação é feita sobre `to_lowercase()` de cada campo, então
    /// "FOTOSÍNTESIS" e "fotosíntesis" são equivalentes.
    pub fn mentions(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.content.to_lowercase().contains(query_lower)
            || self.subject.label().to_lowercase().contains(query_lower)
    }
}
