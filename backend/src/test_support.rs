//! Test utilities for the front desk crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{CheckIn, FrontDeskService, GuestDetails, Nights};

/// Deterministic clock that only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Start the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock forward by whole minutes.
    pub fn advance_minutes(&self, minutes: i64) {
        *self.lock_clock() += TimeDelta::minutes(minutes);
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Fixed instant used as "now" across the test suites.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Clock pinned at [`fixture_timestamp`].
pub fn fixture_clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::new(fixture_timestamp()))
}

/// Front desk service with the standard catalog and a fixture clock.
pub fn fixture_front_desk() -> Arc<FrontDeskService> {
    Arc::new(FrontDeskService::with_defaults(fixture_clock()))
}

/// Build a check-in for `name` with placeholder contact details.
pub fn guest_check_in(name: &str, room_type: &str, nights: u32) -> CheckIn {
    let email = format!("{}@example.test", name.to_lowercase());
    CheckIn {
        details: GuestDetails::new(name, email, "555-0100", None),
        room_type: room_type.to_owned(),
        nights: Nights::new(nights).expect("fixtures use positive nights"),
    }
}
