//! Transient state of the tip screen.
//!
//! Holds the raw text of the two entry fields and the round-up switch. The
//! numbers the calculator sees are derived from the text on every read, so
//! the tip shown is always a function of the current inputs.

use rust_decimal::Decimal;
use tip_core::TipInput;
use tracing::debug;

use crate::{models::TipFormModel, utils::parse_or_zero};

/// Screen state for one calculator session. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipTimeState {
    /// Raw bill amount text as typed.
    pub bill_text: String,
    /// Raw tip percentage text as typed.
    pub tip_text: String,
    /// Round-up switch.
    pub round_up: bool,
    /// Number of people sharing the bill, when splitting.
    pub split_between: Option<u32>,

    /// Values restored by [`TipTimeState::clear`].
    initial_tip_text: String,
    initial_round_up: bool,
}

impl TipTimeState {
    /// Creates an empty state with the switch off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state whose tip field and switch start pre-filled.
    pub fn with_defaults(
        tip_text: impl Into<String>,
        round_up: bool,
    ) -> Self {
        let tip_text = tip_text.into();
        Self {
            tip_text: tip_text.clone(),
            round_up,
            initial_tip_text: tip_text,
            initial_round_up: round_up,
            ..Default::default()
        }
    }

    pub fn set_bill_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.bill_text = text.into();
        debug!(bill = %self.bill_text, "bill amount edited");
    }

    pub fn set_tip_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.tip_text = text.into();
        debug!(tip = %self.tip_text, "tip percentage edited");
    }

    pub fn set_round_up(
        &mut self,
        round_up: bool,
    ) {
        self.round_up = round_up;
        debug!(round_up, "round up switched");
    }

    pub fn toggle_round_up(&mut self) {
        self.set_round_up(!self.round_up);
    }

    /// Sets the number of people sharing the bill. `None` or zero turns splitting off.
    pub fn set_split_between(
        &mut self,
        people: Option<u32>,
    ) {
        self.split_between = people.filter(|&n| n > 0);
    }

    /// Resets every field to the values the session started with.
    pub fn clear(&mut self) {
        self.bill_text.clear();
        self.tip_text = self.initial_tip_text.clone();
        self.round_up = self.initial_round_up;
        self.split_between = None;
    }

    /// Bill amount; invalid or empty text reads as 0.
    pub fn bill_amount(&self) -> Decimal {
        parse_or_zero(&self.bill_text)
    }

    /// Tip percentage; invalid or empty text reads as 0.
    pub fn tip_percent(&self) -> Decimal {
        parse_or_zero(&self.tip_text)
    }

    /// Calculator input for the current field values.
    pub fn tip_input(&self) -> TipInput {
        TipInput {
            amount: self.bill_amount(),
            tip_percent: self.tip_percent(),
            round_up: self.round_up,
        }
    }

    pub fn to_model(&self) -> TipFormModel {
        TipFormModel {
            bill_amount: self.bill_amount(),
            tip_percent: self.tip_percent(),
            round_up: self.round_up,
            split_between: self.split_between,
        }
    }
}
