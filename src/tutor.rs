//! # Tutor — Busca + Composição
//!
//! O [`Tutor`] liga a busca no corpus ao compositor de respostas. Cada
//! mensagem é tratada de forma síncrona e independente:
//!
//! ```text
//! mensagem ──► search(corpus, mensagem) ──► compose(mensagem, matches) ──► texto
//! ```
//!
//! Nenhum estado é mantido entre chamadas; o corpus é somente-leitura e
//! compartilhado via `Arc`.

use std::sync::Arc;

use crate::core::{self, KnowledgeEntry, KnowledgeSource};
use crate::responder::{self, HelpPicker, UuidPicker};

pub struct Tutor {
    source: Arc<dyn KnowledgeSource>,
}

impl Tutor {
    pub fn new(source: Arc<dyn KnowledgeSource>) -> Self {
        Self { source }
    }

    /// Todas as entradas do corpus, na ordem canônica.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        self.source.entries()
    }

    /// Número de entradas no corpus.
    pub fn corpus_size(&self) -> usize {
        self.entries().len()
    }

    /// Busca limitada a três resultados.
    pub fn search(&self, query: &str) -> Vec<&KnowledgeEntry> {
        core::search(self.source.as_ref(), query)
    }

    /// Todas as entradas que mencionam `query`.
    pub fn browse(&self, query: &str) -> Vec<&KnowledgeEntry> {
        core::browse(self.source.as_ref(), query)
    }

    /// Responde usando aleatoriedade real para as mensagens de ajuda.
    pub fn reply(&self, message: &str) -> String {
        self.reply_with(message, &mut UuidPicker)
    }

    /// Responde com um picker explícito.
    pub fn reply_with(&self, message: &str, picker: &mut dyn HelpPicker) -> String {
        let matches = self.search(message);
        tracing::info!(matches = matches.len(), "Mensagem processada pelo tutor");
        responder::compose(message, &matches, picker)
    }
}
