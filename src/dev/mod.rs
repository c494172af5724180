//! Development utilities module
//!
//! This module contains utilities for development and testing,
//! such as the fixture-backed mock client used by `--mock`.

pub mod mock_client;

pub use mock_client::{MockClient, MockMode};
