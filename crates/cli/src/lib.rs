//! CLI utilities for Mario Health tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Formatting for scores, timestamps and ranked procedures

#![warn(missing_docs)]

pub mod output;
