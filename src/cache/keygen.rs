//! Key Generator Module
//!
//! Produces keys for entries created without an explicit key.

// == Key Generator ==
/// Monotonic numeric key source.
///
/// Seeded once from the wall clock so generated keys look like millisecond
/// timestamps, then advanced by counting. The clock is never read again, so a
/// stalled or coarse clock cannot produce duplicates.
#[derive(Debug, Clone)]
pub struct KeyGenerator {
    /// Last value handed out
    last: u64,
}

impl KeyGenerator {
    // == Constructor ==
    /// Creates a generator whose first key is the current Unix time in milliseconds.
    pub fn new() -> Self {
        Self::starting_at(current_timestamp_ms())
    }

    /// Creates a generator whose first key is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            last: first.saturating_sub(1),
        }
    }

    // == Next ==
    /// Returns the next key for which `taken` answers false.
    ///
    /// Every call yields a value strictly greater than the previous one.
    pub fn next_key(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            self.last += 1;
            let candidate = self.last.to_string();
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
