//! # Autenticação de Demonstração
//!
//! Cadastro de usuários **em memória** com senhas em texto puro. Serve
//! apenas para a demo: não há hash, sessão nem persistência. O cliente
//! guarda o [`User`] devolvido e o reapresenta como quiser.
//!
//! | Operação | Sucesso | Falha |
//! |----------|---------|-------|
//! | [`UserStore::login`] | `Some(User)` | `None` |
//! | [`UserStore::register`] | `Ok(User)` | [`ApiError::Validation`] / [`ApiError::EmailTaken`] |

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// Tamanho mínimo de senha aceito no cadastro.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

/// Usuário como visto pelo cliente (sem senha).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// Registro interno: usuário + senha.
struct StoredUser {
    user: User,
    password: String,
}

/// Dados do formulário de cadastro.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub struct UserStore {
    users: RwLock<Vec<StoredUser>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Loja com a aluna e o professor de demonstração.
    pub fn with_demo_users() -> Self {
        let store = Self::new();
        {
            let mut users = store.users.write();
            users.push(StoredUser {
                user: User {
                    id: "1".to_string(),
                    email: "estudiante@educenter.com".to_string(),
                    name: "Ana García".to_string(),
                    role: Role::Student,
                    grade: Some("3º ESO".to_string()),
                },
                password: "password123".to_string(),
            });
            users.push(StoredUser {
                user: User {
                    id: "2".to_string(),
                    email: "profesor@educenter.com".to_string(),
                    name: "Carlos Martínez".to_string(),
                    role: Role::Teacher,
                    grade: None,
                },
                password: "password123".to_string(),
            });
        }
        store
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Confere email e senha exatamente como foram cadastrados.
    pub fn login(&self, email: &str, password: &str) -> Option<User> {
        let users = self.users.read();
        let found = users
            .iter()
            .find(|u| u.user.email == email && u.password == password)
            .map(|u| u.user.clone());
        match &found {
            Some(u) => tracing::info!(user = %u.id, "Login aceito"),
            None => tracing::info!("Login recusado"),
        }
        found
    }

    /// Cadastra um novo aluno.
    ///
    /// # Erros
    ///
    /// - campos obrigatórios vazios, senha curta ou confirmação diferente
    ///   → [`ApiError::Validation`]
    /// - email já cadastrado → [`ApiError::EmailTaken`]
    pub fn register(&self, req: RegisterRequest) -> ApiResult<User> {
        if req.email.is_empty() || req.password.is_empty() || req.name.is_empty() {
            return Err(ApiError::Validation(
                "Por favor completa todos los campos obligatorios".to_string(),
            ));
        }
        if let Some(confirm) = &req.confirm_password {
            if *confirm != req.password {
                return Err(ApiError::Validation(
                    "Las contraseñas no coinciden".to_string(),
                ));
            }
        }
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "La contraseña debe tener al menos {} caracteres",
                MIN_PASSWORD_LEN
            )));
        }

        let mut users = self.users.write();
        if users.iter().any(|u| u.user.email == req.email) {
            return Err(ApiError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: req.email,
            name: req.name,
            role: Role::Student,
            grade: req.grade.filter(|g| !g.is_empty()),
        };
        users.push(StoredUser {
            user: user.clone(),
            password: req.password,
        });
        tracing::info!(user = %user.id, "Novo aluno cadastrado");
        Ok(user)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(email: &str, password: &str, name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            ..RegisterRequest::default()
        }
    }

    #[test]
    fn demo_student_can_log_in() {
        let store = UserStore::with_demo_users();
        let user = store
            .login("estudiante@educenter.com", "password123")
            .expect("login deveria funcionar");
        assert_eq!(user.name, "Ana García");
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.grade.as_deref(), Some("3º ESO"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = UserStore::with_demo_users();
        assert!(store.login("profesor@educenter.com", "nope").is_none());
        assert!(store.login("nadie@educenter.com", "password123").is_none());
    }

    #[test]
    fn serialized_user_has_no_password() {
        let store = UserStore::with_demo_users();
        let user = store.login("profesor@educenter.com", "password123").unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "teacher");
        assert!(json.get("grade").is_none());
    }

    #[test]
    fn register_then_login() {
        let store = UserStore::new();
        let mut r = req("nuevo@educenter.com", "secreto1", "Lucía");
        r.grade = Some("1º ESO".into());
        let user = store.register(r).unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.grade.as_deref(), Some("1º ESO"));
        assert_eq!(store.login("nuevo@educenter.com", "secreto1"), Some(user));
    }

    #[test]
    fn duplicate_email_is_conflict() {
        let store = UserStore::with_demo_users();
        let err = store
            .register(req("estudiante@educenter.com", "otra123", "Ana"))
            .unwrap_err();
        assert!(matches!(err, ApiError::EmailTaken));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn validation_errors() {
        let store = UserStore::new();
        assert!(matches!(
            store.register(req("", "secreto1", "X")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            store.register(req("a@b.c", "123", "X")),
            Err(ApiError::Validation(_))
        ));

        let mut mismatch = req("a@b.c", "secreto1", "X");
        mismatch.confirm_password = Some("secreto2".into());
        let err = store.register(mismatch).unwrap_err();
        assert_eq!(err.to_string(), "Las contraseñas no coinciden");
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn empty_grade_is_dropped() {
        let store = UserStore::new();
        let mut r = req("a@b.c", "secreto1", "X");
        r.grade = Some(String::new());
        assert_eq!(store.register(r).unwrap().grade, None);
    }
}
