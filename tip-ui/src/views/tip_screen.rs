//! The single calculator screen.

use tip_core::TipCalculator;

use crate::state::TipTimeState;

pub const HEADING: &str = "Calculate Tip";
pub const BILL_AMOUNT: &str = "Bill Amount";
pub const TIP_PERCENTAGE: &str = "Tip Percentage";
pub const ROUND_UP: &str = "Round up tip?";
pub const TIP_AMOUNT: &str = "Tip Amount";
pub const TOTAL_AMOUNT: &str = "Total";
pub const PER_PERSON: &str = "Per Person";

/// Width of the label column on the input rows.
const LABEL_WIDTH: usize = 16;

/// The result label, e.g. `Tip Amount: $2.00`.
pub fn tip_label(
    state: &TipTimeState,
    calculator: &TipCalculator,
) -> String {
    format!("{TIP_AMOUNT}: {}", calculator.calculate(&state.tip_input()))
}

/// Renders the whole screen: heading, the three inputs as typed, and the
/// results computed from them.
pub fn render(
    state: &TipTimeState,
    calculator: &TipCalculator,
) -> String {
    let model = state.to_model();
    let input = model.to_tip_input();
    let switch = if state.round_up { "[x]" } else { "[ ]" };

    let mut lines = vec![
        HEADING.to_string(),
        String::new(),
        format!("{:<LABEL_WIDTH$}{}", format!("{BILL_AMOUNT}:"), state.bill_text),
        format!("{:<LABEL_WIDTH$}{}", format!("{TIP_PERCENTAGE}:"), state.tip_text),
        format!("{ROUND_UP:<LABEL_WIDTH$}{switch}"),
        String::new(),
        tip_label(state, calculator),
        format!("{TOTAL_AMOUNT}: {}", calculator.format_total(&input)),
    ];
    if let Some(people) = model.split_between {
        lines.extend(
            calculator
                .format_split(&input, people)
                .map(|share| format!("{PER_PERSON} ({people}): {share}")),
        );
    }
    lines.push(String::new());
    lines.join("\n")
}
