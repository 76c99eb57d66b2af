//! # Estado da Aplicação Web
//!
//! Tudo que os handlers compartilham, montado uma vez no `main`:
//!
//! ```text
//! AppState
//!  ├── config   (somente leitura)
//!  ├── tutor    (corpus somente leitura)
//!  ├── users    (RwLock interno)
//!  └── catalog  (RwLock interno)
//! ```

use std::sync::Arc;

use crate::auth::UserStore;
use crate::catalog::{self, BookCatalog};
use crate::config::AppConfig;
use crate::core::StaticCorpus;
use crate::tutor::Tutor;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tutor: Arc<Tutor>,
    pub users: Arc<UserStore>,
    pub catalog: Arc<BookCatalog>,
}

impl AppState {
    /// Monta o estado a partir da configuração, com o corpus embutido.
    pub fn from_config(config: AppConfig) -> Self {
        let users = if config.seed_demo_users {
            UserStore::with_demo_users()
        } else {
            UserStore::new()
        };
        let catalog = if config.seed_catalog {
            BookCatalog::with_books(catalog::sample_books())
        } else {
            BookCatalog::new()
        };
        Self {
            config: Arc::new(config),
            tutor: Arc::new(Tutor::new(Arc::new(StaticCorpus))),
            users: Arc::new(users),
            catalog: Arc::new(catalog),
        }
    }
}
