use tokio::time::{Duration, Instant};

/// Entrada no store: valor + instante de inserção.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub value: T,
    pub inserted_at: Instant,
}

impl<T> Entry<T> {
    pub fn new(value: T, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    /// Válida enquanto `now - inserted_at < interval`. Na igualdade já expirou.
    pub fn is_valid_at(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.inserted_at) < interval
    }
}
