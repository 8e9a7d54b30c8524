//! Protocol module for the Lanai server.
//!
//! Requests are decoded by [`crate::dispatcher::Command`]; this module owns
//! the response side of the wire contract, the one-byte status prefix that
//! every transport puts in front of a dispatcher result.

pub mod frame;

pub use frame::{ResponseFrame, STATUS_ERROR, STATUS_SUCCESS};
