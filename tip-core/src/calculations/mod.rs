//! Tip calculation modules.
//!
//! This module provides the arithmetic behind the tip calculator and the
//! shared rounding helpers it relies on.

pub mod common;
pub mod tip;

pub use tip::{TipCalculator, TipInput};
