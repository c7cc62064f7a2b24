use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};

use tip_core::{CurrencyLocale, TipCalculator};
use tip_ui::{
    ConfigError, TipTimeConfig, TipTimeState,
    logging::{self, LogSettings},
    session, views,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Calculates the tip for a bill and prints it in the currency of the
/// selected locale. Without `--interactive` the screen is printed once.
#[derive(Debug, Parser)]
#[command(name = "tip-time", version, about)]
struct Cli {
    /// Bill amount. Text that is not a number counts as 0.
    #[arg(short, long, default_value = "")]
    bill: String,

    /// Tip percentage. Overrides `default-tip-percent` from the config file.
    #[arg(short, long)]
    tip: Option<String>,

    /// Round the tip up to a whole currency unit.
    #[arg(short, long)]
    round_up: bool,

    /// Split the total between this many people.
    #[arg(short, long)]
    split: Option<u32>,

    /// Locale for currency formatting (e.g. en-US, de-DE, ja-JP).
    /// Defaults to the config file, then LC_ALL / LC_MONETARY / LANG.
    #[arg(short, long)]
    locale: Option<CurrencyLocale>,

    /// Edit the values line by line on stdin.
    #[arg(short, long)]
    interactive: bool,

    /// Configuration file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`, `tip_ui=trace`).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(short, long)]
    quiet: bool,
}

// ─── setup ───────────────────────────────────────────────────────────────────

/// Loads the config file. An unusable file at the default location is
/// returned alongside the defaults so it can be reported once logging is up.
fn load_config(cli: &Cli) -> anyhow::Result<(TipTimeConfig, Option<ConfigError>)> {
    match &cli.config {
        Some(path) => {
            let config = TipTimeConfig::load_from(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            Ok((config, None))
        }
        None => match TipTimeConfig::load_default() {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((TipTimeConfig::default(), Some(e))),
        },
    }
}

fn log_settings(
    cli: &Cli,
    config: &TipTimeConfig,
) -> LogSettings {
    LogSettings {
        level: cli.log_level.clone().or_else(|| config.log_level.clone()),
        file: cli.log_file.clone().or_else(|| config.log_file.clone()),
        quiet: cli.quiet,
    }
}

fn initial_state(
    cli: &Cli,
    config: &TipTimeConfig,
) -> TipTimeState {
    let mut state =
        TipTimeState::with_defaults(config.initial_tip_text(), config.round_up.unwrap_or(false));
    state.set_bill_text(cli.bill.as_str());
    if let Some(tip) = &cli.tip {
        state.set_tip_text(tip.as_str());
    }
    if cli.round_up {
        state.set_round_up(true);
    }
    state.set_split_between(cli.split);
    state
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, unusable_config) = load_config(&cli)?;
    logging::init_logging(&log_settings(&cli, &config))?;
    if let Some(e) = unusable_config {
        warn!("{e}; using defaults");
    }

    let locale = cli
        .locale
        .or(config.locale)
        .unwrap_or_else(CurrencyLocale::from_env);
    debug!(%locale, "resolved locale");

    let calculator = TipCalculator::new(locale)
        .with_context(|| format!("Failed to set up currency formatting for {locale}"))?;

    let mut state = initial_state(&cli, &config);
    debug!(model = %state.to_model(), "initial values");

    if cli.interactive {
        session::run_session(&mut state, &calculator, io::stdin().lock(), io::stdout().lock())
            .context("Interactive session failed")?;
    } else {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", views::render(&state, &calculator))?;
        stdout.flush()?;
        info!(tip = %views::tip_label(&state, &calculator), "calculated");
    }

    Ok(())
}
