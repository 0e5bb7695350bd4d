/// Erros de configuração do pool.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("intervalo de expiração vazio")]
    EmptyInterval,
    #[error("intervalo de expiração inválido: {0}")]
    InvalidInterval(String),
    #[error("unidade de tempo desconhecida: {0}. Use: ms, s, m, h")]
    UnknownUnit(String),
}

/// Result type alias.
pub type ConfigResult<T> = Result<T, ConfigError>;
