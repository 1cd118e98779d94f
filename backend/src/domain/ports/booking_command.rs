//! Driving port for occupancy changes.

use async_trait::async_trait;

use crate::domain::{BookingError, CheckIn, GuestStay, RoomNumber};

/// Check guests in and out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Place a guest in the lowest free room and return its number.
    async fn check_in(&self, request: CheckIn) -> Result<RoomNumber, BookingError>;

    /// Archive the stay in `room` and return the archived record.
    async fn check_out(&self, room: RoomNumber) -> Result<GuestStay, BookingError>;
}
