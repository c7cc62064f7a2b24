pub mod config;
pub mod logging;
pub mod models;
pub mod session;
pub mod state;
pub mod utils;
pub mod views;

pub use config::{ConfigError, TipTimeConfig};
pub use state::TipTimeState;
