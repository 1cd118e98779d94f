//! Room types and their nightly prices.
//!
//! The catalog is static configuration: it is built once at start-up and is
//! never mutated while the server runs. Declaration order is significant and
//! is preserved for rendering and per-type reports.

/// Nightly price charged when a guest books a room type the catalog lacks.
pub const DEFAULT_NIGHTLY_RATE: u32 = 50;

/// A room type together with its nightly price in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRate {
    room_type: String,
    nightly_rate: u32,
}

impl RoomRate {
    /// Build a rate entry.
    pub fn new(room_type: impl Into<String>, nightly_rate: u32) -> Self {
        Self {
            room_type: room_type.into(),
            nightly_rate,
        }
    }

    /// Room type name, e.g. `Suite`.
    pub fn room_type(&self) -> &str {
        self.room_type.as_str()
    }

    /// Price per night.
    pub fn nightly_rate(&self) -> u32 {
        self.nightly_rate
    }
}

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomCatalogError {
    /// A room type name was empty or whitespace.
    #[error("room type names must not be blank")]
    BlankRoomType,
    /// The same room type was declared twice.
    #[error("room type {room_type} is declared more than once")]
    DuplicateRoomType { room_type: String },
}

/// Ordered mapping from room type to nightly price.
///
/// # Examples
/// ```
/// use frontdesk::domain::{DEFAULT_NIGHTLY_RATE, RoomCatalog};
///
/// let catalog = RoomCatalog::standard();
/// assert_eq!(catalog.nightly_rate("Double"), 80);
/// assert_eq!(catalog.nightly_rate("Penthouse"), DEFAULT_NIGHTLY_RATE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rates: Vec<RoomRate>,
}

impl RoomCatalog {
    /// Build a catalog from rates in declaration order.
    pub fn try_new(rates: Vec<RoomRate>) -> Result<Self, RoomCatalogError> {
        for (index, rate) in rates.iter().enumerate() {
            if rate.room_type.trim().is_empty() {
                return Err(RoomCatalogError::BlankRoomType);
            }
            let declared_earlier = rates
                .iter()
                .take(index)
                .any(|earlier| earlier.room_type == rate.room_type);
            if declared_earlier {
                return Err(RoomCatalogError::DuplicateRoomType {
                    room_type: rate.room_type.clone(),
                });
            }
        }
        Ok(Self { rates })
    }

    /// The compiled-in catalog: `Single` 50, `Double` 80, `Suite` 120.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rates: vec![
                RoomRate::new("Single", 50),
                RoomRate::new("Double", 80),
                RoomRate::new("Suite", 120),
            ],
        }
    }

    /// Rates in declaration order.
    pub fn rates(&self) -> &[RoomRate] {
        &self.rates
    }

    /// Whether the catalog lists `room_type`.
    pub fn contains(&self, room_type: &str) -> bool {
        self.rate_for(room_type).is_some()
    }

    /// Nightly price for `room_type`, or [`DEFAULT_NIGHTLY_RATE`] when unknown.
    pub fn nightly_rate(&self, room_type: &str) -> u32 {
        self.rate_for(room_type)
            .map_or(DEFAULT_NIGHTLY_RATE, RoomRate::nightly_rate)
    }

    fn rate_for(&self, room_type: &str) -> Option<&RoomRate> {
        self.rates.iter().find(|rate| rate.room_type == room_type)
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
