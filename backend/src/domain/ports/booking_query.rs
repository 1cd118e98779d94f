//! Driving port for reading occupancy and history.

use async_trait::async_trait;

use crate::domain::{Error, GuestStay, RoomRate, RoomTypeAvailability};

/// Point-in-time copy of everything the front desk page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontDeskSnapshot {
    /// Rooms the hotel operates.
    pub total_rooms: u32,
    /// Rooms currently free.
    pub available_rooms: usize,
    /// Per-type availability in catalog order.
    pub by_type: Vec<RoomTypeAvailability>,
    /// Bookable room types and prices in catalog order.
    pub rates: Vec<RoomRate>,
    /// Active stays ordered by room number.
    pub guests: Vec<GuestStay>,
    /// Archived stays in check-out order.
    pub history: Vec<GuestStay>,
}

/// Read-only view of the booking registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Capture availability, active guests and history in one consistent read.
    async fn snapshot(&self) -> Result<FrontDeskSnapshot, Error>;

    /// Archived stays in check-out order.
    async fn history(&self) -> Result<Vec<GuestStay>, Error>;
}
