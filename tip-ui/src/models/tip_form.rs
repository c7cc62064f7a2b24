use std::fmt;

use rust_decimal::Decimal;
use tip_core::TipInput;

/// Parsed values of the tip form at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TipFormModel {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
    pub split_between: Option<u32>,
}

impl TipFormModel {
    pub fn to_tip_input(&self) -> TipInput {
        TipInput {
            amount: self.bill_amount,
            tip_percent: self.tip_percent,
            round_up: self.round_up,
        }
    }
}

impl fmt::Display for TipFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Bill amount:    {}", self.bill_amount)?;
        writeln!(f, "Tip percentage: {}", self.tip_percent)?;
        writeln!(f, "Round up:       {}", self.round_up)?;
        match self.split_between {
            Some(people) => write!(f, "Split between:  {people}"),
            None => write!(f, "Split between:  —"),
        }
    }
}
