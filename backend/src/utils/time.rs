use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TemporalError;

/// Source of the current instant.
///
/// Handlers never call `Utc::now()` directly so that every field of a response
/// can be derived from a single reading, and so tests can freeze time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> anyhow::Result<DateTime<Utc>>;
}

/// Wall clock of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> anyhow::Result<DateTime<Utc>> {
        Ok(Utc::now())
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Freezes the clock at a wall-clock reading in `tz`.
    pub fn at_local(tz: &Tz, local: NaiveDateTime) -> Result<Self, TemporalError> {
        let instant = localize(tz, local)?.with_timezone(&Utc);
        Ok(Self { instant })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> anyhow::Result<DateTime<Utc>> {
        Ok(self.instant)
    }
}

/// Reads `clock` once and expresses the instant in the configured timezone.
pub fn now_in_timezone(clock: &dyn Clock, tz: &Tz) -> anyhow::Result<DateTime<Tz>> {
    Ok(clock.now()?.with_timezone(tz))
}

/// Attaches `tz` to a wall-clock reading.
///
/// A reading repeated by a DST fall-back resolves to its standard-time
/// occurrence. A reading skipped by a spring-forward gap is read with the
/// offset in force just before the gap, so 02:30 in a 02:00 -> 03:00 gap
/// becomes 03:30 on the new offset.
pub fn localize(tz: &Tz, local: NaiveDateTime) -> Result<DateTime<Tz>, TemporalError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(_, standard) => Ok(standard),
        LocalResult::None => {
            // A day earlier is clear of any gap, however wide.
            let before_gap = local
                .checked_sub_signed(Duration::days(1))
                .ok_or(TemporalError::UnrepresentableLocalTime(local))?;
            let offset_secs = tz
                .offset_from_utc_datetime(&before_gap)
                .fix()
                .local_minus_utc();
            let utc = local
                .checked_sub_signed(Duration::seconds(i64::from(offset_secs)))
                .ok_or(TemporalError::UnrepresentableLocalTime(local))?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}
