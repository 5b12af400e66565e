//! # Configuração do Servidor
//!
//! Lida de variáveis de ambiente, todas opcionais:
//!
//! | Variável | Default | Uso |
//! |----------|---------|-----|
//! | `INTERVIEW_ADDR` | `0.0.0.0:3000` | Endereço de bind do servidor |
//! | `INTERVIEW_ASSETS_DIR` | `assets` | Diretório servido em `/assets` |
//! | `INTERVIEW_LOG` | `info` | Filtro de log quando `RUST_LOG` não está definido |

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid INTERVIEW_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuração efetiva do processo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Carrega a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Carrega a configuração a partir de uma função de lookup.
    ///
    /// Valores vazios contam como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get("INTERVIEW_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            assets_dir: get("INTERVIEW_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            log_filter: get("INTERVIEW_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
