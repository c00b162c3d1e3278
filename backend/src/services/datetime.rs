use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;
use thiserror::Error;

use crate::error::TemporalError;
use crate::models::datetime::{BusinessReport, DateTimeInfo, RelativeDuration};
use crate::services::{moment, relative};
use crate::utils::time::{now_in_timezone, Clock};

#[derive(Error, Debug)]
pub enum RelativeTimeError {
    #[error(transparent)]
    Input(#[from] TemporalError),
    #[error(transparent)]
    Clock(anyhow::Error),
}

/// Reads the clock once per call and describes that instant in the configured zone.
#[derive(Clone)]
pub struct DateTimeService {
    clock: Arc<dyn Clock>,
    time_zone: Tz,
}

impl DateTimeService {
    pub fn new(clock: Arc<dyn Clock>, time_zone: Tz) -> Self {
        Self { clock, time_zone }
    }

    pub fn now(&self) -> anyhow::Result<DateTime<Tz>> {
        now_in_timezone(self.clock.as_ref(), &self.time_zone)
    }

    pub fn describe_now(&self) -> anyhow::Result<DateTimeInfo> {
        Ok(moment::describe_moment(&self.now()?))
    }

    pub fn describe_business_context(&self) -> anyhow::Result<BusinessReport> {
        Ok(moment::describe_business_context(&self.now()?))
    }

    /// Validates the target before reading the clock, so bad input is
    /// reported as such even when the clock is unavailable.
    pub fn compute_relative(
        &self,
        target_date: Option<&str>,
        target_time: Option<&str>,
    ) -> Result<RelativeDuration, RelativeTimeError> {
        let local = relative::parse_target(target_date, target_time)?;
        let now = self.now().map_err(RelativeTimeError::Clock)?;
        Ok(relative::relative_to_local(local, &now)?)
    }
}
