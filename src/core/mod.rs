//! # Módulo Core — Corpus de Conhecimento
//!
//! Tipos e operações de leitura sobre o conteúdo educacional:
//!
//! - [`Subject`] — matéria de uma entrada
//! - [`KnowledgeEntry`] — registro imutável (título, matéria, curso, conteúdo)
//! - [`KnowledgeSource`] — fonte somente-leitura de entradas
//! - [`StaticCorpus`] — corpus embutido no binário
//! - [`search`] / [`browse`] — busca por substring
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{search, StaticCorpus};
//!
//! let hits = search(&StaticCorpus, "fotosíntesis");
//! assert_eq!(hits[0].title, "La fotosíntesis");
//! ```

/// Sub-módulo com [`KnowledgeEntry`] e [`Subject`].
pub mod entry;

/// Sub-módulo com o corpus e a busca.
pub mod knowledge_base;

pub use entry::{KnowledgeEntry, Subject};
pub use knowledge_base::{browse, search, KnowledgeSource, StaticCorpus};
