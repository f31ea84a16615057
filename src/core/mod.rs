//! Core domain models
//!
//! This module defines the pipeline definitions, execution state, errors and
//! output sinks shared by both pipeline kinds.

pub mod config;
pub mod error;
pub mod sink;
pub mod state;
pub mod step;

pub use error::*;
pub use sink::*;
pub use state::*;
pub use step::*;
