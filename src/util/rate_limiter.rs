use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Caps requests to an external service at `capacity` per `interval`.
pub struct RateLimiter {
    capacity: u32,
    interval: Duration,
    state: Mutex<State>,
}

struct State {
    issued: u32,
    window_start: Instant,
}

impl RateLimiter {
    pub fn new(capacity: u32, interval: Duration) -> Self {
        RateLimiter {
            capacity,
            interval,
            state: Mutex::new(State {
                issued: 0,
                window_start: Instant::now(),
            }),
        }
    }

    /// Blocks until the current window has a slot available.
    pub async fn wait(&self) {
        loop {
            let delay = {
                let mut state = self.state.lock().unwrap();
                let now = Instant::now();
                if now.duration_since(state.window_start) >= self.interval {
                    state.window_start = now;
                    state.issued = 0;
                }

                if state.issued < self.capacity {
                    state.issued += 1;
                    None
                } else {
                    Some(self.interval - now.duration_since(state.window_start))
                }
            };

            match delay {
                Some(delay) => tokio::time::sleep(delay).await,
                None => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn requests_within_capacity_do_not_block() {
        let limiter = RateLimiter::new(3, Duration::from_secs(1));

        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn requests_over_capacity_wait_for_next_window() {
        let limiter = RateLimiter::new(2, Duration::from_secs(1));

        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
