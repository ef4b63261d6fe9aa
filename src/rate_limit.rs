use dashmap::DashMap;
use std::time::{Duration, Instant};

// Per-client download limiter over a trailing window.
// Each client keeps the timestamps of its accepted requests; anything older
// than the window is dropped before counting.
pub struct RateLimiter {
    windows: DashMap<String, Vec<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window,
        }
    }

    // Returns true if the client may proceed, recording the request.
    // A rejected request leaves the client's window untouched.
    // The entry guard holds the shard lock across filter-then-append, so
    // concurrent handlers can't interleave on the same client.
    pub fn allow(&self, client: &str) -> bool {
        let now = Instant::now();

        let mut entry = self.windows.entry(client.to_string()).or_default();
        entry.retain(|t| now.duration_since(*t) < self.window);

        if entry.len() >= self.max_requests {
            return false;
        }

        entry.push(now);
        true
    }
}
