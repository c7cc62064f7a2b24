//! Interactive editing session.
//!
//! Reads one command per line, applies it to the screen state and prints
//! the recalculated tip after every accepted edit.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use thiserror::Error;
use tip_core::TipCalculator;
use tracing::{debug, info};

use crate::{
    state::TipTimeState,
    views::{
        render, tip_label,
        tip_screen::PER_PERSON,
    },
};

pub const HELP: &str = "\
Commands:
  bill <amount>          set the bill amount (empty clears it)
  tip <percent>          set the tip percentage (empty clears it)
  round on|off|toggle    set the round-up switch
  split <people>|off     split the total between people
  show                   show the whole screen
  clear                  reset every field
  help                   show this help
  quit                   leave";

/// Errors for lines that are not valid commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("expected on, off or toggle, got '{0}'")]
    InvalidSwitch(String),

    #[error("expected a number of people or 'off', got '{0}'")]
    InvalidSplit(String),
}

/// Desired position of the round-up switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl FromStr for Switch {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" => Ok(Self::On),
            "off" | "no" | "false" => Ok(Self::Off),
            "" | "toggle" => Ok(Self::Toggle),
            _ => Err(CommandError::InvalidSwitch(s.to_string())),
        }
    }
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bill(String),
    Tip(String),
    Round(Switch),
    Split(Option<u32>),
    Show,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses `<word> [argument]`. The argument of `bill` and `tip` is kept
    /// verbatim, since the field accepts any text.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, argument) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        match word.to_ascii_lowercase().as_str() {
            "bill" | "b" => Ok(Self::Bill(argument.to_string())),
            "tip" | "t" => Ok(Self::Tip(argument.to_string())),
            "round" | "r" => argument.parse().map(Self::Round),
            "split" | "s" => match argument {
                "" | "off" => Ok(Self::Split(None)),
                people => people
                    .parse()
                    .map(|n| Self::Split(Some(n)))
                    .map_err(|_| CommandError::InvalidSplit(people.to_string())),
            },
            "show" => Ok(Self::Show),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// What the session does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies `command` to `state` and writes its response.
pub fn apply<W: Write>(
    state: &mut TipTimeState,
    calculator: &TipCalculator,
    command: Command,
    output: &mut W,
) -> io::Result<Flow> {
    debug!(?command, "applying command");
    match command {
        Command::Bill(text) => state.set_bill_text(text),
        Command::Tip(text) => state.set_tip_text(text),
        Command::Round(Switch::On) => state.set_round_up(true),
        Command::Round(Switch::Off) => state.set_round_up(false),
        Command::Round(Switch::Toggle) => state.toggle_round_up(),
        Command::Split(people) => state.set_split_between(people),
        Command::Clear => state.clear(),
        Command::Show => {
            write!(output, "{}", render(state, calculator))?;
            return Ok(Flow::Continue);
        }
        Command::Help => {
            writeln!(output, "{HELP}")?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    writeln!(output, "{}", tip_label(state, calculator))?;
    let input = state.tip_input();
    let split = state
        .split_between
        .and_then(|people| Some((people, calculator.format_split(&input, people)?)));
    if let Some((people, share)) = split {
        writeln!(output, "{PER_PERSON} ({people}): {share}")?;
    }
    Ok(Flow::Continue)
}

/// Runs the session until `quit` or end of input.
///
/// Invalid commands are reported on `output` and the session carries on.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut TipTimeState,
    calculator: &TipCalculator,
    input: R,
    mut output: W,
) -> io::Result<()> {
    info!(locale = %calculator.locale(), "session started");
    write!(output, "{}", render(state, calculator))?;
    writeln!(output, "Type 'help' for commands.")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if apply(state, calculator, command, &mut output)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => writeln!(output, "error: {e}")?,
        }
        output.flush()?;
    }

    info!("session ended");
    Ok(())
}
