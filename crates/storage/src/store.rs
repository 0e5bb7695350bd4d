use tokio::time::{Duration, Instant};
use tracing::{debug, trace};

use rotapool_common::{DEFAULT_EXPIRATION_SECS, PoolConfig};

use crate::clock::{Clock, SystemClock};
use crate::entry::Entry;

/// Pool rotativo de elementos com expiração por tempo.
///
/// Os elementos ficam em ordem de inserção (mais antigo primeiro). Um
/// elemento é válido enquanto sua idade for estritamente menor que o
/// intervalo de expiração. [`next_valid`](Self::next_valid) entrega os
/// elementos válidos em round-robin, pulando os expirados.
///
/// Não é sincronizado: para acesso concorrente, proteja com um mutex.
#[derive(Debug)]
pub struct ExpiringRotationStore<T, C = SystemClock> {
    entries: Vec<Entry<T>>,
    expiration_interval: Duration,
    /// Índice do último elemento entregue pela rotação.
    cursor: Option<usize>,
    clock: C,
}

impl<T> ExpiringRotationStore<T> {
    pub fn new(expiration_interval: Duration) -> Self {
        Self::with_clock(expiration_interval, SystemClock)
    }

    pub fn from_config(config: &PoolConfig) -> Self {
        Self::new(config.expiration)
    }
}

impl<T> Default for ExpiringRotationStore<T> {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_EXPIRATION_SECS))
    }
}

impl<T, C: Clock> ExpiringRotationStore<T, C> {
    /// Intervalo zero é aceito: nenhum elemento chega a ser válido.
    pub fn with_clock(expiration_interval: Duration, clock: C) -> Self {
        Self {
            entries: Vec::new(),
            expiration_interval,
            cursor: None,
            clock,
        }
    }

    pub fn expiration_interval(&self) -> Duration {
        self.expiration_interval
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Número de entradas armazenadas, incluindo expiradas ainda não purgadas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // --- Inserção ---

    /// Insere com o instante atual do relógio.
    pub fn insert(&mut self, value: T) {
        let now = self.clock.now();
        self.push_after_sweep(value, now, now);
    }

    /// Insere com um instante explícito. A purga prévia usa o relógio.
    pub fn insert_at(&mut self, value: T, at: Instant) {
        let now = self.clock.now();
        self.push_after_sweep(value, at, now);
    }

    fn push_after_sweep(&mut self, value: T, at: Instant, now: Instant) {
        self.clear_expired_at(now);
        self.entries.push(Entry::new(value, at));
    }

    // --- Consulta ---

    pub fn count_valid(&self) -> usize {
        self.count_valid_at(self.clock.now())
    }

    pub fn count_valid_at(&self, now: Instant) -> usize {
        self.valid_at(now).count()
    }

    /// Elementos válidos agora, em ordem de inserção.
    pub fn valid(&self) -> impl Iterator<Item = &T> + '_ {
        self.valid_at(self.clock.now())
    }

    pub fn valid_at(&self, now: Instant) -> impl Iterator<Item = &T> + '_ {
        let interval = self.expiration_interval;
        self.entries
            .iter()
            .filter(move |e| e.is_valid_at(now, interval))
            .map(|e| &e.value)
    }

    // --- Rotação ---

    pub fn next_valid(&mut self) -> Option<&T> {
        let now = self.clock.now();
        self.next_valid_at(now)
    }

    /// Próximo elemento válido depois do último entregue, com wraparound.
    ///
    /// Se a cauda depois do cursor não tem nenhum válido, ela é descartada
    /// inteira e a busca recomeça do início. Sem válidos, o store é esvaziado.
    pub fn next_valid_at(&mut self, now: Instant) -> Option<&T> {
        let start = self.cursor.map_or(0, |i| i + 1);

        let index = match self.first_valid_from(start, now) {
            Some(index) => index,
            None => {
                if self.cursor.is_some() && start < self.entries.len() {
                    debug!(
                        dropped = self.entries.len() - start,
                        "cauda expirada descartada na rotação"
                    );
                    self.entries.truncate(start);
                }
                match self.first_valid_from(0, now) {
                    Some(index) => index,
                    None => {
                        if !self.entries.is_empty() {
                            debug!(
                                dropped = self.entries.len(),
                                "nenhum elemento válido, store esvaziado"
                            );
                        }
                        self.remove_all();
                        return None;
                    }
                }
            }
        };

        trace!(index, previous = ?self.cursor, "rotação avançou");
        self.cursor = Some(index);
        self.entries.get(index).map(|e| &e.value)
    }

    fn first_valid_from(&self, start: usize, now: Instant) -> Option<usize> {
        let interval = self.expiration_interval;
        self.entries
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, e)| e.is_valid_at(now, interval))
            .map(|(i, _)| i)
    }

    // --- Expiração ---

    pub fn clear_expired(&mut self) {
        let now = self.clock.now();
        self.clear_expired_at(now);
    }

    /// Remove todas as entradas expiradas, preservando a ordem das demais.
    ///
    /// O cursor recua uma posição por entrada removida no índice dele ou
    /// antes. Se recuar além do início, volta a ser `None` e a próxima
    /// rotação começa no índice 0.
    pub fn clear_expired_at(&mut self, now: Instant) {
        let interval = self.expiration_interval;
        let cursor = self.cursor;
        let before = self.entries.len();

        let mut index = 0;
        let mut removed_up_to_cursor = 0;
        self.entries.retain(|e| {
            let keep = e.is_valid_at(now, interval);
            if !keep && cursor.is_some_and(|c| index <= c) {
                removed_up_to_cursor += 1;
            }
            index += 1;
            keep
        });

        self.cursor = cursor.and_then(|c| c.checked_sub(removed_up_to_cursor));

        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "entradas expiradas removidas");
        }
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
