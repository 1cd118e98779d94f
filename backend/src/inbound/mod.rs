//! Inbound adapters that translate external requests into front desk port
//! calls while keeping framework details at the edge.
//!
//! The only transport is HTTP, under [`http`].

pub mod http;
