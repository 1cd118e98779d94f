//! Front desk service implementing the booking driving ports.
//!
//! The registry sits behind a single mutex so concurrent requests from actix
//! workers are applied one at a time. The lock is never held across an
//! `.await`.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{BookingCommand, BookingQuery, FrontDeskSnapshot};
use crate::domain::{BookingError, BookingRegistry, CheckIn, Error, GuestStay, RoomNumber};

const POISONED: &str = "booking registry lock poisoned";

/// Shared owner of the booking registry.
pub struct FrontDeskService {
    registry: Mutex<BookingRegistry>,
}

impl FrontDeskService {
    /// Wrap an existing registry.
    pub fn new(registry: BookingRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    /// Service over the standard catalog and room count.
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use frontdesk::domain::FrontDeskService;
    /// use mockable::DefaultClock;
    ///
    /// let _service = FrontDeskService::with_defaults(Arc::new(DefaultClock));
    /// ```
    pub fn with_defaults(clock: Arc<dyn Clock>) -> Self {
        Self::new(BookingRegistry::new(clock))
    }

    fn registry(&self) -> Option<MutexGuard<'_, BookingRegistry>> {
        self.registry.lock().ok()
    }
}

#[async_trait]
impl BookingCommand for FrontDeskService {
    async fn check_in(&self, request: CheckIn) -> Result<RoomNumber, BookingError> {
        let mut registry = self
            .registry()
            .ok_or_else(|| BookingError::unavailable(POISONED))?;
        let room_type = request.room_type.clone();
        let nights = request.nights;

        match registry.check_in(request) {
            Ok(room) => {
                info!(
                    room = %room,
                    room_type = %room_type,
                    nights = %nights,
                    available = registry.available_rooms(),
                    "guest checked in"
                );
                Ok(room)
            }
            Err(error) => {
                warn!(%error, room_type = %room_type, "check-in refused");
                Err(error)
            }
        }
    }

    async fn check_out(&self, room: RoomNumber) -> Result<GuestStay, BookingError> {
        let mut registry = self
            .registry()
            .ok_or_else(|| BookingError::unavailable(POISONED))?;

        match registry.check_out(room) {
            Ok(stay) => {
                info!(
                    room = %room,
                    total_cost = stay.total_cost(),
                    available = registry.available_rooms(),
                    "guest checked out"
                );
                Ok(stay)
            }
            Err(error) => {
                warn!(%error, room = %room, "check-out ignored");
                Err(error)
            }
        }
    }
}

#[async_trait]
impl BookingQuery for FrontDeskService {
    async fn snapshot(&self) -> Result<FrontDeskSnapshot, Error> {
        let registry = self
            .registry()
            .ok_or_else(|| Error::service_unavailable(POISONED))?;

        Ok(FrontDeskSnapshot {
            total_rooms: registry.total_rooms(),
            available_rooms: registry.available_rooms(),
            by_type: registry.available_by_type(),
            rates: registry.catalog().rates().to_vec(),
            guests: registry.guest_list().values().cloned().collect(),
            history: registry.history().to_vec(),
        })
    }

    async fn history(&self) -> Result<Vec<GuestStay>, Error> {
        let registry = self
            .registry()
            .ok_or_else(|| Error::service_unavailable(POISONED))?;
        Ok(registry.history().to_vec())
    }
}
