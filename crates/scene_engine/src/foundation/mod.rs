//! Foundation module - core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and shared geometry
//! - Logging utilities

pub mod logging;
pub mod math;
