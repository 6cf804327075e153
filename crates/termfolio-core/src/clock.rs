//! Wall-clock access for `date` and `uptime`.

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;

    /// Human-readable local date and time.
    fn local_date_string(&self) -> String;
}

/// A clock frozen at one instant.
#[derive(Clone, Debug)]
pub struct FixedClock {
    pub now_ms: f64,
    pub display: String,
}

impl FixedClock {
    pub fn new(now_ms: f64, display: impl Into<String>) -> Self {
        Self {
            now_ms,
            display: display.into(),
        }
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn local_date_string(&self) -> String {
        self.display.clone()
    }
}
