//! # Configuração da Aplicação
//!
//! Carregada na inicialização com a seguinte precedência (maior vence):
//!
//! ```text
//! variáveis EDU__*  >  arquivo TOML (EDU_CONFIG ou config/tutor.toml)  >  defaults
//! ```
//!
//! O `.env` é lido antes (via `dotenvy`) pelo `main`, então variáveis
//! definidas lá também contam.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Caminho padrão do arquivo de configuração (sem extensão).
const DEFAULT_CONFIG_PATH: &str = "config/tutor";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nome exibido na página e em `/api/status`.
    pub app_name: String,
    /// Interface de escuta.
    pub host: String,
    /// Porta HTTP.
    pub port: u16,
    /// Cria os usuários de demonstração (aluno e professor).
    #[serde(default)]
    pub seed_demo_users: bool,
    /// Carrega os três livros de exemplo no catálogo.
    #[serde(default)]
    pub seed_catalog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "EduCenter".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_demo_users: true,
            seed_catalog: true,
        }
    }
}

impl AppConfig {
    /// Lê defaults, arquivo opcional e ambiente.
    pub fn load() -> Result<Self> {
        let path = std::env::var("EDU_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    fn load_from(config_path: &str) -> Result<Self> {
        Self::load_with_env(config_path, env_source())
    }

    fn load_with_env(config_path: &str, env: config::Environment) -> Result<Self> {
        let d = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", d.app_name)?
            .set_default("host", d.host)?
            .set_default("port", i64::from(d.port))?
            .set_default("seed_demo_users", d.seed_demo_users)?
            .set_default("seed_catalog", d.seed_catalog)?;

        let path = Path::new(config_path);
        let with_toml = path.with_extension("toml");
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else if with_toml.exists() {
            builder.add_source(config::File::from(with_toml.as_path()))
        } else {
            builder
        };

        builder
            .add_source(env)
            .build()
            .context("Falha ao montar configuração")?
            .try_deserialize()
            .context("Configuração inválida")
    }

    /// Endereço de bind derivado de `host` e `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Endereço inválido: {}:{}", self.host, self.port))
    }
}

/// Variáveis `EDU__CHAVE`, ex.: `EDU__PORT=8080`.
fn env_source() -> config::Environment {
    config::Environment::with_prefix("EDU")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let cfg = AppConfig::load_from("config/does-not-exist").unwrap();
        assert_eq!(cfg.app_name, "EduCenter");
        assert!(cfg.seed_demo_users);
        assert!(cfg.seed_catalog);
    }

    #[test]
    fn reads_toml_file() {
        let dir = std::env::temp_dir().join(format!("edu-cfg-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("tutor.toml");
        std::fs::write(
            &file,
            "app_name = \"Colegio Test\"\nport = 4100\nseed_demo_users = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(file.to_str().unwrap()).unwrap();
        assert_eq!(cfg.app_name, "Colegio Test");
        assert_eq!(cfg.port, 4100);
        assert!(!cfg.seed_demo_users);
        assert!(cfg.seed_catalog);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn env_vars_override_file_and_defaults() {
        let dir = std::env::temp_dir().join(format!("edu-cfg-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("tutor.toml");
        std::fs::write(&file, "app_name = \"Colegio Test\"\nport = 4100\n").unwrap();

        let mut vars = config::Map::new();
        vars.insert("EDU__PORT".to_string(), "4200".to_string());
        vars.insert("EDU__APP_NAME".to_string(), "Instituto Env".to_string());
        vars.insert("EDU__SEED_CATALOG".to_string(), "false".to_string());
        vars.insert("OTHER__PORT".to_string(), "1".to_string());

        let env = env_source().source(Some(vars));
        let cfg = AppConfig::load_with_env(file.to_str().unwrap(), env).unwrap();
        assert_eq!(cfg.port, 4200);
        assert_eq!(cfg.app_name, "Instituto Env");
        assert!(!cfg.seed_catalog);
        assert!(cfg.seed_demo_users);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn socket_addr_parses() {
        let cfg = AppConfig {
            host: "127.0.0.1".into(),
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);

        let bad = AppConfig {
            host: "not a host".into(),
            ..AppConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }
}
