//! Request middleware.
//!
//! Purpose: Cross-cutting request concerns for the front desk HTTP surface.
//! Currently request tracing only.

pub mod trace;

pub use trace::Trace;
