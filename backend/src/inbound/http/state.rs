//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the booking ports and stay testable with mocks.

use std::sync::Arc;

use crate::domain::FrontDeskService;
use crate::domain::ports::{BookingCommand, BookingQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub bookings: Arc<dyn BookingCommand>,
    pub booking_queries: Arc<dyn BookingQuery>,
}

impl HttpState {
    /// Construct state from separate port implementations.
    pub fn new(bookings: Arc<dyn BookingCommand>, booking_queries: Arc<dyn BookingQuery>) -> Self {
        Self {
            bookings,
            booking_queries,
        }
    }

    /// Serve both ports from one front desk service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use frontdesk::domain::FrontDeskService;
    /// use frontdesk::inbound::http::state::HttpState;
    /// use mockable::DefaultClock;
    ///
    /// let service = Arc::new(FrontDeskService::with_defaults(Arc::new(DefaultClock)));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service(service: Arc<FrontDeskService>) -> Self {
        Self::new(service.clone(), service)
    }
}
