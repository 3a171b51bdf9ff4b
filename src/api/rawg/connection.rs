use std::time::Duration;

use crate::util::rate_limiter::RateLimiter;

pub struct RawgConnection {
    pub api_key: String,
    pub qps: RateLimiter,
}

impl RawgConnection {
    pub fn new(api_key: &str) -> Self {
        RawgConnection {
            api_key: String::from(api_key),
            qps: RateLimiter::new(4, Duration::from_secs(1)),
        }
    }
}
