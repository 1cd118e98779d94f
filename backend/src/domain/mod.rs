//! Domain primitives and aggregates.
//!
//! Purpose: Define the hotel front desk model used by the HTTP adapters.
//! Occupancy is owned by [`BookingRegistry`]; adapters reach it through the
//! driving ports in [`ports`], implemented by [`FrontDeskService`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - BookingRegistry (alias to `booking_registry::BookingRegistry`): rooms,
//!   active stays, and check-out history.
//! - RoomCatalog (alias to `room_catalog::RoomCatalog`): room types and
//!   nightly rates.
//! - GuestStay (alias to `guest_stay::GuestStay`): an active or archived stay.

pub mod booking_registry;
pub mod error;
pub mod front_desk_service;
pub mod guest_stay;
pub mod ports;
pub mod room_catalog;
pub mod trace_id;

pub use self::booking_registry::{
    BookingError, BookingRegistry, CheckIn, RoomTypeAvailability, TOTAL_ROOMS,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::front_desk_service::FrontDeskService;
pub use self::guest_stay::{GuestDetails, GuestStay, Nights, RoomNumber, ZeroNightsError};
pub use self::room_catalog::{DEFAULT_NIGHTLY_RATE, RoomCatalog, RoomCatalogError, RoomRate};
pub use self::trace_id::TraceId;

