//! Room occupancy bookkeeping.
//!
//! [`BookingRegistry`] is the only component allowed to change occupancy. It
//! owns the free room slots, the active stays keyed by room number, the
//! append-only check-out history, and per-room-type occupancy counters.
//!
//! Rooms are modelled as a fixed set of slots `1..=total_rooms`. Check-in
//! takes the lowest free slot and check-out returns it, so a room number is
//! never handed to two active guests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use mockable::Clock;

use crate::domain::{Error, GuestDetails, GuestStay, Nights, RoomCatalog, RoomNumber};

/// Number of rooms the hotel operates.
pub const TOTAL_ROOMS: u32 = 5;

/// Failures reported by booking operations.
///
/// Callers in the HTTP layer treat the first two as silent no-ops; they are
/// still surfaced as values so each cause can be logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Every room is occupied.
    #[error("no rooms are available")]
    NoRoomsAvailable,
    /// Check-out was requested for a room without an active guest.
    #[error("room {room} is not occupied")]
    RoomNotOccupied { room: RoomNumber },
    /// The registry could not be reached.
    #[error("booking registry unavailable: {message}")]
    Unavailable { message: String },
}

impl BookingError {
    /// Convenience constructor for [`BookingError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<BookingError> for Error {
    fn from(error: BookingError) -> Self {
        match &error {
            BookingError::NoRoomsAvailable => Error::conflict(error.to_string()),
            BookingError::RoomNotOccupied { .. } => Error::not_found(error.to_string()),
            BookingError::Unavailable { .. } => Error::service_unavailable(error.to_string()),
        }
    }
}

/// Everything needed to open a stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    /// Contact details and special requests.
    pub details: GuestDetails,
    /// Requested room type; unknown types are charged the default rate.
    pub room_type: String,
    /// Length of the stay.
    pub nights: Nights,
}

/// Occupancy summary for one catalog room type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTypeAvailability {
    /// Room type name.
    pub room_type: String,
    /// Price per night for the type.
    pub nightly_rate: u32,
    /// Active guests booked on this type.
    pub occupied: usize,
    /// Rooms that could still be booked as this type.
    pub available: usize,
}

/// Sole authority over room occupancy and guest history.
///
/// ## Invariants
/// - `available_rooms() + guest_list().len() == total_rooms()`.
/// - A room number is a key of the active mapping if and only if it is not
///   in the free set.
/// - Occupancy counters sum, per type, to the number of active stays of that
///   type; types with no active stays have no counter.
/// - History entries are archived stays and are never changed or removed.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use frontdesk::domain::{BookingRegistry, CheckIn, GuestDetails, Nights};
/// use mockable::DefaultClock;
///
/// let mut registry = BookingRegistry::new(Arc::new(DefaultClock));
/// let room = registry
///     .check_in(CheckIn {
///         details: GuestDetails::new("Alice", "alice@example.test", "555-0100", None),
///         room_type: "Single".to_owned(),
///         nights: Nights::new(2).expect("positive nights"),
///     })
///     .expect("a room is free");
/// assert_eq!(room.get(), 1);
/// assert_eq!(registry.available_rooms(), 4);
/// ```
pub struct BookingRegistry {
    total_rooms: u32,
    free_slots: BTreeSet<RoomNumber>,
    active: BTreeMap<RoomNumber, GuestStay>,
    history: Vec<GuestStay>,
    occupancy: BTreeMap<String, usize>,
    catalog: RoomCatalog,
    clock: Arc<dyn Clock>,
}

impl BookingRegistry {
    /// Registry with [`TOTAL_ROOMS`] rooms and the standard catalog.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_rooms(TOTAL_ROOMS, RoomCatalog::standard(), clock)
    }

    /// Registry with a custom room count and catalog.
    pub fn with_rooms(total_rooms: u32, catalog: RoomCatalog, clock: Arc<dyn Clock>) -> Self {
        Self {
            total_rooms,
            free_slots: (1..=total_rooms).map(RoomNumber::new).collect(),
            active: BTreeMap::new(),
            history: Vec::new(),
            occupancy: BTreeMap::new(),
            catalog,
            clock,
        }
    }

    /// Open a stay in the lowest free room.
    ///
    /// # Errors
    /// Returns [`BookingError::NoRoomsAvailable`] when every room is occupied;
    /// state is left untouched in that case.
    pub fn check_in(&mut self, request: CheckIn) -> Result<RoomNumber, BookingError> {
        let room_number = self
            .free_slots
            .pop_first()
            .ok_or(BookingError::NoRoomsAvailable)?;

        let CheckIn {
            details,
            room_type,
            nights,
        } = request;
        let nightly_rate = self.catalog.nightly_rate(&room_type);
        *self.occupancy.entry(room_type.clone()).or_default() += 1;

        let stay = GuestStay::open(
            room_number,
            details,
            room_type,
            nights,
            nightly_rate,
            self.clock.utc(),
        );
        self.active.insert(room_number, stay);
        Ok(room_number)
    }

    /// Close the stay in `room_number` and archive it.
    ///
    /// # Errors
    /// Returns [`BookingError::RoomNotOccupied`] when the room has no active
    /// guest; repeated check-outs are therefore harmless.
    pub fn check_out(&mut self, room_number: RoomNumber) -> Result<GuestStay, BookingError> {
        let stay = self
            .active
            .remove(&room_number)
            .ok_or(BookingError::RoomNotOccupied { room: room_number })?;

        let archived = stay.archive(self.clock.utc());
        self.release_type(archived.room_type());
        self.free_slots.insert(room_number);
        self.history.push(archived.clone());
        Ok(archived)
    }

    fn release_type(&mut self, room_type: &str) {
        if let Some(count) = self.occupancy.get_mut(room_type) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.occupancy.remove(room_type);
            }
        }
    }

    /// Number of rooms the hotel operates.
    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }

    /// Number of unoccupied rooms.
    pub fn available_rooms(&self) -> usize {
        self.free_slots.len()
    }

    /// Per-type availability in catalog order.
    ///
    /// Rooms are interchangeable, so every free room is bookable as any type;
    /// `occupied` reports the active guests booked on each type.
    pub fn available_by_type(&self) -> Vec<RoomTypeAvailability> {
        let available = self.available_rooms();
        self.catalog
            .rates()
            .iter()
            .map(|rate| RoomTypeAvailability {
                room_type: rate.room_type().to_owned(),
                nightly_rate: rate.nightly_rate(),
                occupied: self.occupancy.get(rate.room_type()).copied().unwrap_or(0),
                available,
            })
            .collect()
    }

    /// Active guests per room type, including types outside the catalog.
    pub fn occupancy_by_type(&self) -> &BTreeMap<String, usize> {
        &self.occupancy
    }

    /// Active stays ordered by room number.
    pub fn guest_list(&self) -> &BTreeMap<RoomNumber, GuestStay> {
        &self.active
    }

    /// Archived stays in check-out order.
    pub fn history(&self) -> &[GuestStay] {
        &self.history
    }

    /// The catalog used for pricing.
    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }
}
