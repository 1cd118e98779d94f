//! Hotel front desk: room bookings, check-out history and the HTTP adapters
//! serving them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
