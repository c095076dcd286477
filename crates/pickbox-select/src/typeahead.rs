//! Type-to-select: a debounced search buffer owned by each select.

use crate::option::OptionRecord;
use std::time::Duration;

/// Default idle time after which the buffer clears.
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_secs(1);

/// Accumulates typed characters until the user pauses.
///
/// Every keystroke bumps a generation counter. The owner schedules a
/// one-shot timer carrying that generation; when it fires, [`expire`]
/// clears the buffer only if no newer keystroke arrived in the meantime.
/// That stale-generation check is what "cancel the previous timer" means
/// here.
///
/// [`expire`]: TypeAhead::expire
#[derive(Debug, Clone)]
pub struct TypeAhead {
    query: String,
    generation: u64,
    timeout: Duration,
}

impl TypeAhead {
    pub fn new(timeout: Duration) -> Self {
        Self {
            query: String::new(),
            generation: 0,
            timeout,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Append a character and return the generation the reset timer must
    /// carry.
    pub fn push(&mut self, ch: char) -> u64 {
        self.query.push(ch);
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Clear the buffer if `generation` is still the latest keystroke.
    /// Returns whether it cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.query.clear();
        true
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }
}

impl Default for TypeAhead {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TIMEOUT)
    }
}

/// Index of the first record whose label starts with `query`, ignoring case.
pub fn find_prefix(records: &[OptionRecord], query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    records
        .iter()
        .position(|r| r.label().to_lowercase().starts_with(&query))
}
