//! Driving ports through which inbound adapters reach the booking domain.
//!
//! Adapters depend on these traits rather than on [`crate::domain::FrontDeskService`]
//! so handlers can be exercised against mocks.

mod booking_command;
mod booking_query;

#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::BookingCommand;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
pub use booking_query::{BookingQuery, FrontDeskSnapshot};
