use std::sync::Arc;
use std::time::Instant;

use crate::{
    config::Config,
    services::DateTimeService,
    utils::time::{Clock, SystemClock},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub datetime: DateTimeService,
    pub started_at: Instant,
}

impl AppState {
    /// State backed by the host's wall clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let datetime = DateTimeService::new(clock, config.time_zone);
        Self {
            config,
            datetime,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
