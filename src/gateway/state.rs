use std::time::Instant;

use crate::config::InputPolicy;

/// Gateway shared state (read-only after startup)
#[derive(Debug, Clone)]
pub struct AppState {
    /// How malformed operands are reported
    pub input_policy: InputPolicy,
    /// Process start, for uptime in health responses
    started_at: Instant,
}

impl AppState {
    pub fn new(input_policy: InputPolicy) -> Self {
        Self {
            input_policy,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}
