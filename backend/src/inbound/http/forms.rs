//! Form bodies accepted by the front desk handlers.
//!
//! Every field is optional at the serde layer so a missing field surfaces as
//! a structured `invalid_request` error instead of actix's plain-text
//! extractor rejection.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CheckIn, Error, GuestDetails, RoomNumber};
use crate::inbound::http::validation::{
    FieldName, parse_nights, parse_room_number, required_text,
};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const PHONE: FieldName = FieldName::new("phone");
const ROOM_TYPE: FieldName = FieldName::new("room_type");
const NIGHTS: FieldName = FieldName::new("nights");

/// Check-in form submitted from the front desk page.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckInForm {
    #[schema(example = "Alice")]
    pub name: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
    #[schema(example = "Single")]
    pub room_type: Option<String>,
    /// Whole number of nights, at least 1.
    #[schema(example = "2")]
    pub nights: Option<String>,
    pub special_requests: Option<String>,
}

impl TryFrom<CheckInForm> for CheckIn {
    type Error = Error;

    fn try_from(form: CheckInForm) -> Result<Self, Self::Error> {
        let name = required_text(form.name, NAME)?;
        let email = required_text(form.email, EMAIL)?;
        let phone = required_text(form.phone, PHONE)?;
        let room_type = required_text(form.room_type, ROOM_TYPE)?;
        let nights = parse_nights(form.nights, NIGHTS)?;

        Ok(CheckIn {
            details: GuestDetails::new(name, email, phone, form.special_requests),
            room_type,
            nights,
        })
    }
}

/// Check-out form submitted from the front desk page.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckOutForm {
    #[schema(example = "1")]
    pub room: Option<String>,
}

impl CheckOutForm {
    /// The requested room, or `None` when the input is not a room number.
    pub fn room_number(&self) -> Option<RoomNumber> {
        parse_room_number(self.room.as_deref())
    }
}
