use std::time::Duration;

use crate::{ConfigError, ConfigResult, DEFAULT_EXPIRATION, DEFAULT_EXPIRATION_SECS};

/// Configuração do pool rotativo.
///
/// Pode ser embutida na CLI da aplicação hospedeira com `#[command(flatten)]`.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Tempo de vida de cada elemento (ex.: 500ms, 10s, 2m, 1h)
    #[arg(
        long = "expiration",
        env = "ROTAPOOL_EXPIRATION",
        default_value = DEFAULT_EXPIRATION,
        value_parser = parse_interval
    )]
    pub expiration: Duration,
}

impl PoolConfig {
    pub fn new(expiration: Duration) -> Self {
        Self { expiration }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_EXPIRATION_SECS))
    }
}

/// Converte `"<n>[ms|s|m|h]"` em `Duration`. Sem unidade = segundos.
///
/// Valores negativos viram zero: um pool com intervalo zero nunca tem
/// elementos válidos, e isso é aceito em vez de rejeitado.
pub fn parse_interval(s: &str) -> ConfigResult<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ConfigError::EmptyInterval);
    }

    let split = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let amount: i64 = number
        .parse()
        .map_err(|_| ConfigError::InvalidInterval(s.to_string()))?;
    let amount = amount.max(0) as u64;

    let duration = match unit.trim().to_lowercase().as_str() {
        "ms" => Duration::from_millis(amount),
        "" | "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount.saturating_mul(60)),
        "h" => Duration::from_secs(amount.saturating_mul(3600)),
        other => return Err(ConfigError::UnknownUnit(other.to_string())),
    };
    Ok(duration)
}
