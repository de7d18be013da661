//! Integration test utilities for Papa Leguas
//!
//! Shared models, record fixtures and a log capturing subscriber used by
//! the tests that exercise the builders, settings and renderer together.

pub mod fixtures;
pub mod logging;
