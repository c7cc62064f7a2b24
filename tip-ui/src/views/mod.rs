//! Text views for the tip calculator.
//!
//! Each view renders from the current state and a calculator; none of them
//! hold state of their own.

pub mod tip_screen;

pub use tip_screen::{render, tip_label};
