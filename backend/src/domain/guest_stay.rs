//! Guest stays and the value types they are built from.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Identifier of an occupied room slot, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Wrap a raw room number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw room number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Number of nights booked; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nights(NonZeroU32);

/// Raised when a stay length of zero nights is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a stay must last at least one night")]
pub struct ZeroNightsError;

impl Nights {
    /// Build a stay length, rejecting zero.
    pub fn new(value: u32) -> Result<Self, ZeroNightsError> {
        NonZeroU32::new(value).map(Self).ok_or(ZeroNightsError)
    }

    /// The number of nights.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Nights {
    type Error = ZeroNightsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Nights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact details captured on the check-in form. Values are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDetails {
    name: String,
    email: String,
    phone: String,
    special_requests: Option<String>,
}

impl GuestDetails {
    /// Build guest details. Blank special requests are stored as `None`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        special_requests: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            special_requests: special_requests.filter(|text| !text.trim().is_empty()),
        }
    }

    /// Guest name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Guest email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Guest phone number.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Free-text requests, if any were given.
    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }
}

/// One active or archived stay.
///
/// ## Invariants
/// - `total_cost == nightly_rate * nights`.
/// - `checked_out_at` is `None` while the stay is active and `Some` once it
///   has been archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestStay {
    room_number: RoomNumber,
    details: GuestDetails,
    room_type: String,
    nights: Nights,
    nightly_rate: u32,
    total_cost: u64,
    checked_in_at: DateTime<Utc>,
    checked_out_at: Option<DateTime<Utc>>,
}

impl GuestStay {
    pub(crate) fn open(
        room_number: RoomNumber,
        details: GuestDetails,
        room_type: String,
        nights: Nights,
        nightly_rate: u32,
        checked_in_at: DateTime<Utc>,
    ) -> Self {
        Self {
            room_number,
            details,
            room_type,
            nights,
            nightly_rate,
            total_cost: u64::from(nightly_rate) * u64::from(nights.get()),
            checked_in_at,
            checked_out_at: None,
        }
    }

    pub(crate) fn archive(mut self, checked_out_at: DateTime<Utc>) -> Self {
        self.checked_out_at = Some(checked_out_at);
        self
    }

    /// Room the guest occupies, or occupied before check-out.
    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Guest contact details.
    pub fn details(&self) -> &GuestDetails {
        &self.details
    }

    /// Room type as submitted at check-in.
    pub fn room_type(&self) -> &str {
        self.room_type.as_str()
    }

    /// Length of the stay.
    pub fn nights(&self) -> Nights {
        self.nights
    }

    /// Price per night resolved at check-in.
    pub fn nightly_rate(&self) -> u32 {
        self.nightly_rate
    }

    /// Price for the whole stay.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// When the guest checked in.
    pub fn checked_in_at(&self) -> DateTime<Utc> {
        self.checked_in_at
    }

    /// When the guest checked out, once archived.
    pub fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    /// Whether the stay has been moved to history.
    pub fn is_archived(&self) -> bool {
        self.checked_out_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn timestamp(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[rstest]
    fn zero_nights_are_rejected() {
        assert_eq!(Nights::new(0), Err(ZeroNightsError));
        assert_eq!(Nights::try_from(3).map(Nights::get), Ok(3));
    }

    #[rstest]
    #[case(" 4 ", Some(4))]
    #[case("12", Some(12))]
    #[case("four", None)]
    #[case("-1", None)]
    fn room_numbers_parse_from_form_text(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(raw.parse::<RoomNumber>().ok().map(RoomNumber::get), expected);
    }

    #[rstest]
    #[case(Some("   ".to_owned()), None)]
    #[case(None, None)]
    #[case(Some("late arrival".to_owned()), Some("late arrival"))]
    fn blank_special_requests_are_dropped(
        #[case] requests: Option<String>,
        #[case] expected: Option<&str>,
    ) {
        let details = GuestDetails::new("Ada", "ada@example.test", "555-0100", requests);
        assert_eq!(details.special_requests(), expected);
    }

    #[rstest]
    fn opening_a_stay_derives_total_cost() {
        let nights = Nights::new(3).expect("positive nights");
        let stay = GuestStay::open(
            RoomNumber::new(2),
            GuestDetails::new("Ada", "ada@example.test", "555-0100", None),
            "Double".to_owned(),
            nights,
            80,
            timestamp(9),
        );

        assert_eq!(stay.total_cost(), 240);
        assert!(!stay.is_archived());
    }

    #[rstest]
    fn archiving_keeps_every_field_and_stamps_checkout() {
        let stay = GuestStay::open(
            RoomNumber::new(1),
            GuestDetails::new("Ada", "ada@example.test", "555-0100", Some("quiet".to_owned())),
            "Suite".to_owned(),
            Nights::new(1).expect("positive nights"),
            120,
            timestamp(9),
        );

        let archived = stay.clone().archive(timestamp(11));

        assert_eq!(archived.checked_out_at(), Some(timestamp(11)));
        assert_eq!(archived.room_number(), stay.room_number());
        assert_eq!(archived.details(), stay.details());
        assert_eq!(archived.total_cost(), stay.total_cost());
        assert_eq!(archived.checked_in_at(), stay.checked_in_at());
    }
}
