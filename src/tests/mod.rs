//! Test modules for the Lanai server.
//!
//! Component tests that span more than one module live here; tests for a
//! single type sit next to it.


pub use test_utils::{create_test_dir, key_set_strategy, key_strategy};
