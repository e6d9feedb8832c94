//! Shared contracts between the console frontend and the gateway.
//!
//! Everything here is UI-free: row records returned by the PHP endpoints,
//! the response envelope, and the table state machine that every list screen
//! is built on.

pub mod domain;
pub mod shared;
pub mod system;
