pub mod calculations;
pub mod currency;
pub mod models;

pub use calculations::{TipCalculator, TipInput};
pub use currency::{CurrencyFormatError, CurrencyFormatter};
pub use models::*;
